use super::sorting::SortField;

/// `max-width` media query flags derived from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Breakpoints {
    pub below_600: bool,
    pub below_680: bool,
    pub below_740: bool,
    pub below_1080: bool,
}

impl Breakpoints {
    pub fn from_width(width_px: f64) -> Self {
        Self {
            below_600: width_px <= 600.0,
            below_680: width_px <= 680.0,
            below_740: width_px <= 740.0,
            below_1080: width_px <= 1080.0,
        }
    }
}

/// Which columns and decorations a row renders at the current breakpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSet {
    pub show_index: bool,
    pub show_tvl: bool,
    pub show_fees: bool,
    pub show_apy: bool,
    pub logo_size_px: u32,
    pub name_max_characters: usize,
    pub logo_margin: bool,
}

impl ColumnSet {
    pub fn for_breakpoints(breakpoints: Breakpoints) -> Self {
        Self {
            show_index: !breakpoints.below_680,
            show_tvl: !breakpoints.below_680,
            show_fees: !breakpoints.below_1080,
            show_apy: !breakpoints.below_1080,
            logo_size_px: if breakpoints.below_600 { 16 } else { 20 },
            name_max_characters: if breakpoints.below_600 { 8 } else { 16 },
            logo_margin: !breakpoints.below_740,
        }
    }

    /// Sortable headers in display order.
    pub fn sortable_headers(&self) -> Vec<SortField> {
        let mut headers = vec![SortField::Stake, SortField::Volume];
        if self.show_tvl {
            headers.push(SortField::Tvl);
        }
        if self.show_fees {
            headers.push(SortField::Fees);
        }
        if self.show_apy {
            headers.push(SortField::Apy);
        }
        headers
    }

    /// CSS grid template matching the visible columns.
    pub fn grid_template(&self) -> &'static str {
        if self.show_fees {
            "1.5fr 0.6fr 1fr 1fr 1fr 1fr"
        } else if self.show_tvl {
            "180px 1fr 1fr 1fr"
        } else {
            "100px 1fr 1fr"
        }
    }
}

impl Default for ColumnSet {
    fn default() -> Self {
        Self::for_breakpoints(Breakpoints::default())
    }
}
