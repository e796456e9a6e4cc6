pub mod chart_controller;
pub mod list_view;

pub use chart_controller::{ChartInputs, ChartLifecycleController, ChartPhase, SyncOutcome};
pub use list_view::{FarmingListState, ListBody};
