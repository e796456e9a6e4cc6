use super::value_objects::{ChartKind, CrosshairEvent};
use crate::format_utils::formatted_num;
use crate::time_utils::{long_date, week_range_label};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeColor {
    Green,
    Red,
}

impl ChangeColor {
    pub fn css(&self) -> &'static str {
        match self {
            ChangeColor::Green => "green",
            ChangeColor::Red => "red",
        }
    }
}

/// Signed percentage next to the headline figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeBadge {
    pub text: String,
    pub color: ChangeColor,
}

/// `+1.25%` / `-3.50%`; `0%` when the change is unknown or rounds to zero.
pub fn change_badge(change: Option<f64>) -> ChangeBadge {
    let rounded = change.filter(|c| c.is_finite()).map(|c| (c * 100.0).round() / 100.0);
    match rounded {
        Some(value) if value != 0.0 => ChangeBadge {
            text: format!("{:+.2}%", value),
            color: if value > 0.0 { ChangeColor::Green } else { ChangeColor::Red },
        },
        _ => ChangeBadge { text: "0%".to_string(), color: ChangeColor::Green },
    }
}

/// Headline figure: formatted value, or a loading indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Headline {
    Value(String),
    Loading,
}

/// What the tooltip overlay shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TooltipContent {
    /// Resting state: title, current base value and change
    Summary { title: String, headline: Headline, change: ChangeBadge },
    /// Hovering a data point
    Hover { title: String, value: String, date_label: String },
}

/// Inputs the tooltip text is derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContext {
    pub title: String,
    pub kind: ChartKind,
    pub weekly: bool,
    pub base: Option<f64>,
    pub base_change: Option<f64>,
    pub width: u32,
    pub height: u32,
}

impl TooltipContext {
    pub fn summary(&self) -> TooltipContent {
        let title = if self.kind == ChartKind::Bar && !self.weekly {
            format!("{} (24hr)", self.title)
        } else {
            self.title.clone()
        };
        let headline = match self.base.filter(|b| !b.is_nan()) {
            Some(base) => Headline::Value(formatted_num(base, true)),
            None => Headline::Loading,
        };
        TooltipContent::Summary { title, headline, change: change_badge(self.base_change) }
    }

    /// Content for a pointer move; outside the plot the summary comes back.
    pub fn for_crosshair(&self, event: &CrosshairEvent) -> TooltipContent {
        let (Some(date), Some((x, y)), Some(price)) = (event.time, event.point, event.price)
        else {
            return self.summary();
        };
        if x < 0.0 || x > f64::from(self.width) || y < 0.0 || y > f64::from(self.height) {
            return self.summary();
        }

        let date_label = if self.weekly { week_range_label(date) } else { long_date(date) };
        TooltipContent::Hover {
            title: self.title.clone(),
            value: formatted_num(price, true),
            date_label,
        }
    }
}
