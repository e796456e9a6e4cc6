use crate::{
    config::ListConfig,
    domain::{
        listing::{NativeCurrency, Pager, RowView, SortField, SortState, sort_record_ids},
        logging::LogComponent,
        records::{RecordId, RecordSet},
    },
    log_debug,
};
use std::rc::Rc;

/// What the list area shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ListBody {
    /// No record set delivered yet
    Loading,
    /// Record set delivered and empty
    Empty,
    Rows(Vec<RowView>),
}

/// Sort and page state of the farming list over a shared record set.
#[derive(Debug, Clone)]
pub struct FarmingListState {
    records: Option<Rc<RecordSet>>,
    sort: SortState,
    pager: Pager,
    native: NativeCurrency,
}

impl FarmingListState {
    pub fn new(page_size: usize, native: NativeCurrency) -> Self {
        Self { records: None, sort: SortState::default(), pager: Pager::new(page_size), native }
    }

    pub fn from_config(config: &ListConfig) -> Self {
        Self::new(
            config.page_size,
            NativeCurrency::new(&config.native_symbol, &config.native_wrapper_symbol),
        )
    }

    /// Swap the record set. A different set (by reference) resets paging.
    ///
    /// Returns whether the reference changed.
    pub fn set_records(&mut self, records: Option<Rc<RecordSet>>) -> bool {
        let changed = match (&self.records, &records) {
            (Some(current), Some(next)) => !Rc::ptr_eq(current, next),
            (None, None) => false,
            _ => true,
        };
        if changed {
            let count = records.as_ref().map(|set| set.len()).unwrap_or(0);
            self.pager.reset(count);
            log_debug!(
                LogComponent::FarmingList,
                "record set replaced: {} records, {} pages",
                count,
                self.pager.page_count()
            );
        }
        self.records = records;
        changed
    }

    pub fn select_sort(&mut self, field: SortField) {
        self.sort.select(field);
    }

    pub fn next_page(&mut self) {
        self.pager.next();
    }

    pub fn previous_page(&mut self) {
        self.pager.previous();
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn records(&self) -> Option<&Rc<RecordSet>> {
        self.records.as_ref()
    }

    /// Every id in display order, across all pages.
    pub fn sorted_ids(&self) -> Vec<RecordId> {
        match &self.records {
            Some(records) => sort_record_ids(records, &self.sort).into_iter().cloned().collect(),
            None => Vec::new(),
        }
    }

    /// Rows of the current page.
    pub fn body(&self) -> ListBody {
        let Some(records) = &self.records else {
            return ListBody::Loading;
        };
        if records.is_empty() {
            return ListBody::Empty;
        }

        let sorted = sort_record_ids(records, &self.sort);
        let window = self.pager.window(sorted.len());
        let first_index = self.pager.first_index();
        let rows = sorted[window]
            .iter()
            .enumerate()
            .filter_map(|(offset, id)| {
                records
                    .get(id)
                    .map(|record| RowView::build(first_index + offset, id, record, &self.native))
            })
            .collect();
        ListBody::Rows(rows)
    }
}
