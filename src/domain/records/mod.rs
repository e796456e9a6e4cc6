//! Record aggregate: farming campaigns / pairs supplied by the data provider.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
