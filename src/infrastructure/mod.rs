pub mod lightweight_charts;
pub mod services;
pub mod tooltip_overlay;
pub mod viewport;

pub use lightweight_charts::{LightweightChart, LightweightChartsBackend};
pub use services::{BrowserTimeProvider, ConsoleLogger};
pub use tooltip_overlay::{DomTooltipOverlay, legend_html};
