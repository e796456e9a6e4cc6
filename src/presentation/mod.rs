pub mod farming_list;
pub mod trading_view_chart;
pub mod wasm_api;

pub use farming_list::{FarmingList, LocalLoader};
pub use trading_view_chart::TradingViewChart;
pub use wasm_api::DashboardApi;
