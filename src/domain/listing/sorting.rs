use crate::domain::records::{Record, RecordId, RecordSet};
use std::cmp::Ordering;
use strum::{AsRefStr, EnumIter};

/// Placeholder annualized yield until campaign rewards are priced.
pub const PLACEHOLDER_APY: f64 = 1.0;

/// Value Object - sortable column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr)]
pub enum SortField {
    #[strum(serialize = "stake")]
    Stake,
    #[strum(serialize = "volume")]
    Volume,
    #[strum(serialize = "tvl")]
    Tvl,
    #[strum(serialize = "fees")]
    Fees,
    #[strum(serialize = "apy")]
    Apy,
}

impl SortField {
    /// Numeric value the comparator looks at.
    pub fn value_of(&self, record: &Record) -> f64 {
        match self {
            SortField::Stake => record.staked_amount.value(),
            SortField::Volume | SortField::Fees => record.one_day_volume_usd.value(),
            SortField::Tvl => record
                .stakable_pair
                .as_ref()
                .map(|pair| pair.reserve_usd.value())
                .unwrap_or(f64::NAN),
            SortField::Apy => PLACEHOLDER_APY,
        }
    }

    pub fn header_label(&self) -> &'static str {
        match self {
            SortField::Stake => "Staked",
            SortField::Volume => "Underlying Tokens",
            SortField::Tvl => "TVL",
            SortField::Fees => "Fees (24hr)",
            SortField::Apy => "1y Fees / Liquidity",
        }
    }

    pub fn help_text(&self) -> Option<&'static str> {
        match self {
            SortField::Apy => Some("Based on 24hr volume annualized"),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Descending,
    Ascending,
}

impl SortDirection {
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Descending => SortDirection::Ascending,
            SortDirection::Ascending => SortDirection::Descending,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Descending => "↓",
            SortDirection::Ascending => "↑",
        }
    }
}

/// Selected column plus direction; defaults to staked amount, descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self { field: SortField::Stake, direction: SortDirection::Descending }
    }
}

impl SortState {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Header click: a new column starts descending, the active one flips.
    pub fn select(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.toggle();
        } else {
            self.field = field;
            self.direction = SortDirection::Descending;
        }
    }

    /// Arrow shown next to `field`'s header, empty when it is not active.
    pub fn indicator_for(&self, field: SortField) -> &'static str {
        if self.field == field { self.direction.arrow() } else { "" }
    }

    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        let ascending = compare_values(self.field.value_of(a), self.field.value_of(b));
        match self.direction {
            SortDirection::Ascending => ascending,
            SortDirection::Descending => ascending.reverse(),
        }
    }
}

/// Total order on parsed values; NaN ranks below every number.
pub fn compare_values(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Record ids ordered by `state`; equal values keep the set's key order.
pub fn sort_record_ids<'a>(records: &'a RecordSet, state: &SortState) -> Vec<&'a RecordId> {
    let mut entries: Vec<(&RecordId, &Record)> = records.iter().collect();
    // `sort_by` is stable
    entries.sort_by(|(_, a), (_, b)| state.compare(a, b));
    entries.into_iter().map(|(id, _)| id).collect()
}
