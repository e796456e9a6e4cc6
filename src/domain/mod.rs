pub mod chart;
pub mod errors;
pub mod listing;
pub mod logging;
pub mod records;
