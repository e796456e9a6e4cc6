//! Sorting, pagination and row models of the farming / pair list.

pub mod columns;
pub mod pagination;
pub mod rows;
pub mod sorting;

pub use columns::{Breakpoints, ColumnSet};
pub use pagination::{Pager, page_count_for};
pub use rows::{NativeCurrency, PairRow, RowView, TokenCell, pair_link};
pub use sorting::{SortDirection, SortField, SortState, compare_values, sort_record_ids};
