use crate::{
    domain::{
        chart::{
            ChartBackend, ChartInstance, ChartKind, ChartSpec, SeriesData, Theme, TooltipContext,
            TooltipOverlay, format_series,
        },
        errors::ChartResult,
        logging::LogComponent,
    },
    log_debug, log_warn,
};
use std::{cell::RefCell, rc::Rc};

/// Inputs of one evaluation cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartInputs {
    pub kind: ChartKind,
    /// Shared history; a new `Rc` counts as new data
    pub data: Option<Rc<SeriesData>>,
    /// Entry field to plot
    pub field: String,
    pub base: Option<f64>,
    pub base_change: Option<f64>,
    pub title: String,
    pub width: u32,
    pub weekly: bool,
    pub theme: Theme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartPhase {
    Absent,
    Created,
}

/// What a `sync` call did, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyncOutcome {
    pub torn_down: bool,
    pub created: bool,
    pub data_replaced: bool,
    pub resized: bool,
    /// Resting legend re-rendered with a new title or change figure
    pub legend_refreshed: bool,
}

/// Values seen on the previous evaluation.
#[derive(Debug, Clone)]
struct Observed {
    data: Option<Rc<SeriesData>>,
    theme: Theme,
    base: Option<f64>,
}

struct LiveChart<B: ChartBackend> {
    chart: B::Chart,
    overlay: B::Overlay,
    /// Read by the crosshair handler on every pointer move
    tooltip: Rc<RefCell<TooltipContext>>,
}

/// Owns at most one chart instance and its tooltip overlay.
///
/// Every `sync` first tears down a stale chart (bar data replaced, theme or
/// base value changed) and only then creates a new one, so two instances
/// never share the anchor.
pub struct ChartLifecycleController<B: ChartBackend> {
    backend: B,
    height: u32,
    live: Option<LiveChart<B>>,
    observed: Option<Observed>,
}

impl<B: ChartBackend> ChartLifecycleController<B> {
    pub fn new(backend: B, height: u32) -> Self {
        Self { backend, height, live: None, observed: None }
    }

    pub fn phase(&self) -> ChartPhase {
        if self.live.is_some() { ChartPhase::Created } else { ChartPhase::Absent }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn sync(&mut self, inputs: &ChartInputs) -> ChartResult<SyncOutcome> {
        let mut outcome = SyncOutcome::default();

        let (data_changed, theme_changed, base_changed) = match &self.observed {
            Some(previous) => (
                !same_data(&previous.data, &inputs.data),
                previous.theme != inputs.theme,
                !same_base(previous.base, inputs.base),
            ),
            None => (false, false, false),
        };
        self.observed =
            Some(Observed { data: inputs.data.clone(), theme: inputs.theme, base: inputs.base });

        let stale = (data_changed && inputs.kind == ChartKind::Bar) || theme_changed || base_changed;
        if stale && self.live.is_some() {
            self.teardown();
            outcome.torn_down = true;
        }

        let height = self.height;
        match self.live.as_mut() {
            Some(live) => {
                if data_changed {
                    if let Some(data) = &inputs.data {
                        live.chart.set_data(&format_series(data, &inputs.field))?;
                        outcome.data_replaced = true;
                    }
                }

                let next = tooltip_context(inputs, height);
                let previous = live.tooltip.replace(next.clone());
                if previous.width != next.width {
                    live.chart.resize(next.width, height);
                    live.chart.scroll_to_position(0.0);
                    outcome.resized = true;
                }
                if previous.summary() != next.summary() {
                    live.overlay.render(&next.summary());
                    outcome.legend_refreshed = true;
                }
            }
            None => {
                if let Some(data) = &inputs.data {
                    self.create(inputs, data)?;
                    outcome.created = true;
                }
            }
        }

        Ok(outcome)
    }

    /// Re-fit the time scale to all loaded points.
    pub fn fit_content(&self) {
        if let Some(live) = &self.live {
            live.chart.fit_content();
        }
    }

    /// Unmount: drop the chart and forget the observed inputs.
    pub fn release(&mut self) {
        self.teardown();
        self.observed = None;
    }

    fn create(&mut self, inputs: &ChartInputs, data: &SeriesData) -> ChartResult<()> {
        let spec = ChartSpec {
            kind: inputs.kind,
            width: inputs.width,
            height: self.height,
            theme: inputs.theme,
        };
        let mut chart = self.backend.create_chart(&spec)?;

        let points = format_series(data, &inputs.field);
        if let Err(e) = chart.add_series(inputs.kind, &points) {
            chart.destroy();
            return Err(e);
        }
        let overlay = match self.backend.attach_overlay(inputs.theme) {
            Ok(overlay) => overlay,
            Err(e) => {
                chart.destroy();
                return Err(e);
            }
        };

        let tooltip = Rc::new(RefCell::new(tooltip_context(inputs, self.height)));
        overlay.render(&tooltip.borrow().summary());

        let hover_overlay = overlay.clone();
        let hover_tooltip = Rc::clone(&tooltip);
        chart.subscribe_crosshair_move(Box::new(move |event| {
            let content = hover_tooltip.borrow().for_crosshair(&event);
            hover_overlay.render(&content);
        }));
        chart.fit_content();

        log_debug!(
            LogComponent::ChartLifecycle,
            "{} chart created: {} points, {}x{}",
            inputs.kind,
            points.len(),
            inputs.width,
            self.height
        );
        self.live = Some(LiveChart { chart, overlay, tooltip });
        Ok(())
    }

    fn teardown(&mut self) {
        let Some(LiveChart { mut chart, overlay, .. }) = self.live.take() else {
            return;
        };
        if let Err(e) = self.backend.detach_overlay(&overlay) {
            log_warn!(
                LogComponent::ChartLifecycle,
                "tooltip overlay removal skipped: {}",
                e
            );
        }
        chart.resize(0, 0);
        chart.destroy();
        log_debug!(LogComponent::ChartLifecycle, "chart torn down");
    }
}

impl<B: ChartBackend> Drop for ChartLifecycleController<B> {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn tooltip_context(inputs: &ChartInputs, height: u32) -> TooltipContext {
    TooltipContext {
        title: inputs.title.clone(),
        kind: inputs.kind,
        weekly: inputs.weekly,
        base: inputs.base,
        base_change: inputs.base_change,
        width: inputs.width,
        height,
    }
}

fn same_data(previous: &Option<Rc<SeriesData>>, next: &Option<Rc<SeriesData>>) -> bool {
    match (previous, next) {
        (Some(previous), Some(next)) => Rc::ptr_eq(previous, next),
        (None, None) => true,
        _ => false,
    }
}

/// Bitwise comparison so a NaN base does not look new on every cycle.
fn same_base(previous: Option<f64>, next: Option<f64>) -> bool {
    previous.map(f64::to_bits) == next.map(f64::to_bits)
}
