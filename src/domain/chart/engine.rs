use super::series::SeriesPoint;
use super::tooltip::TooltipContent;
use super::value_objects::{ChartKind, ChartSpec, CrosshairEvent, Theme};
use crate::domain::errors::ChartResult;

/// Charting engine bound to one anchor element.
///
/// Each component owns its own backend, so overlays and charts are never
/// looked up globally.
pub trait ChartBackend {
    type Chart: ChartInstance;
    type Overlay: TooltipOverlay;

    fn create_chart(&self, spec: &ChartSpec) -> ChartResult<Self::Chart>;

    /// Create the tooltip element and append it to the anchor.
    fn attach_overlay(&self, theme: Theme) -> ChartResult<Self::Overlay>;

    /// Remove the tooltip element from the anchor; errors when it is gone.
    fn detach_overlay(&self, overlay: &Self::Overlay) -> ChartResult<()>;
}

/// A live chart instance.
pub trait ChartInstance {
    /// Attach the series for `kind` (histogram for bars, area otherwise).
    fn add_series(&mut self, kind: ChartKind, points: &[SeriesPoint]) -> ChartResult<()>;

    /// Replace the data of the attached series.
    fn set_data(&mut self, points: &[SeriesPoint]) -> ChartResult<()>;

    fn subscribe_crosshair_move(&mut self, handler: Box<dyn FnMut(CrosshairEvent)>);

    fn resize(&mut self, width: u32, height: u32);

    fn fit_content(&self);

    fn scroll_to_position(&self, position: f64);

    /// Release the engine resources.
    fn destroy(self);
}

/// Tooltip element drawn over the chart. Handles are cheap clones of the
/// same element.
pub trait TooltipOverlay: Clone + 'static {
    fn render(&self, content: &TooltipContent);
}
