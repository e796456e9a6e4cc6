use chrono::NaiveDate;
use derive_more::Display;
use strum::{AsRefStr, EnumIter, EnumString};

/// Value Object - Chart type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, EnumString, AsRefStr)]
#[strum(ascii_case_insensitive)]
pub enum ChartKind {
    /// Histogram series, one bar per day
    #[default]
    #[display(fmt = "Bar")]
    #[strum(serialize = "BAR")]
    Bar,
    /// Filled area under a line
    #[display(fmt = "Area")]
    #[strum(serialize = "AREA")]
    Area,
}

impl ChartKind {
    /// Top margin of the right price scale, as a fraction of the height.
    pub fn top_scale_margin(&self) -> f64 {
        match self {
            ChartKind::Bar => 0.2,
            ChartKind::Area => 0.32,
        }
    }
}

/// Value Object - colour theme of the host page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum Theme {
    #[default]
    #[display(fmt = "light")]
    Light,
    #[display(fmt = "dark")]
    Dark,
}

impl Theme {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode { Theme::Dark } else { Theme::Light }
    }

    pub fn text_color(&self) -> &'static str {
        match self {
            Theme::Light => "black",
            Theme::Dark => "white",
        }
    }

    /// CSS class of the tooltip legend
    pub fn legend_class(&self) -> &'static str {
        match self {
            Theme::Light => "three-line-legend",
            Theme::Dark => "three-line-legend-dark",
        }
    }
}

/// Everything the engine needs to build a chart surface.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub width: u32,
    pub height: u32,
    pub theme: Theme,
}

/// Pointer move reported by the engine.
///
/// `point` is in pixels relative to the plot; `price` is the hovered
/// series value at `time`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CrosshairEvent {
    pub time: Option<NaiveDate>,
    pub point: Option<(f64, f64)>,
    pub price: Option<f64>,
}

impl CrosshairEvent {
    /// Pointer left the chart.
    pub fn left() -> Self {
        Self::default()
    }

    pub fn at(time: NaiveDate, x: f64, y: f64, price: Option<f64>) -> Self {
        Self { time: Some(time), point: Some((x, y)), price }
    }
}
