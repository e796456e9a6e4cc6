//! Chart aggregate: series formatting, tooltip text and the engine seam.

pub mod engine;
pub mod series;
pub mod tooltip;
pub mod value_objects;

pub use engine::*;
pub use series::*;
pub use tooltip::*;
pub use value_objects::*;
