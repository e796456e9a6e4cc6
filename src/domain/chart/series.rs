use crate::domain::errors::ValidationResult;
use crate::domain::records::parse_float;
use crate::time_utils::iso_date;
use serde::{Deserialize, Serialize};

/// One day of chart history: a unix date plus arbitrary metric fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesEntry {
    pub date: i64,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl SeriesEntry {
    pub fn new(date: i64) -> Self {
        Self { date, fields: serde_json::Map::new() }
    }

    pub fn with_field(mut self, name: &str, value: impl Into<serde_json::Value>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    /// Float value of `field`, NaN when missing or not numeric.
    pub fn value_of(&self, field: &str) -> f64 {
        match self.fields.get(field) {
            Some(serde_json::Value::Number(number)) => number.as_f64().unwrap_or(f64::NAN),
            Some(serde_json::Value::String(text)) => parse_float(text),
            _ => f64::NAN,
        }
    }
}

pub type SeriesData = Vec<SeriesEntry>;

pub fn series_from_json(json: &str) -> ValidationResult<SeriesData> {
    Ok(serde_json::from_str(json)?)
}

/// Point in the chart engine's format.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    /// `YYYY-MM-DD`, UTC
    pub time: String,
    pub value: f64,
}

/// Convert history into engine points for `field`.
///
/// Entries with an unrepresentable date or a non-finite value are dropped,
/// the engine refuses `null` values.
pub fn format_series(entries: &[SeriesEntry], field: &str) -> Vec<SeriesPoint> {
    entries
        .iter()
        .filter_map(|entry| {
            let value = entry.value_of(field);
            if !value.is_finite() {
                return None;
            }
            iso_date(entry.date).map(|time| SeriesPoint { time, value })
        })
        .collect()
}
