use std::ops::Range;

/// Page cursor over a list of `page_size` rows per page.
///
/// `page` is 1-based and always stays within `1..=page_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
    page_count: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self { page: 1, page_size: page_size.max(1), page_count: 1 }
    }

    /// Back to the first page with the count derived from `item_count`.
    pub fn reset(&mut self, item_count: usize) {
        self.page = 1;
        self.page_count = page_count_for(item_count, self.page_size);
    }

    pub fn next(&mut self) {
        if self.page < self.page_count {
            self.page += 1;
        }
    }

    pub fn previous(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn is_first(&self) -> bool {
        self.page == 1
    }

    pub fn is_last(&self) -> bool {
        self.page == self.page_count
    }

    /// Slice of the sorted list shown on the current page.
    pub fn window(&self, item_count: usize) -> Range<usize> {
        let start = (self.page_size * (self.page - 1)).min(item_count);
        let end = (self.page_size * self.page).min(item_count);
        start..end
    }

    /// 1-based position of the first row on this page.
    pub fn first_index(&self) -> usize {
        self.page_size * (self.page - 1) + 1
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.page_count)
    }
}

/// `ceil(item_count / page_size)`, never below 1.
pub fn page_count_for(item_count: usize, page_size: usize) -> usize {
    item_count.div_ceil(page_size.max(1)).max(1)
}

#[cfg(test)]
mod tests {
    use super::page_count_for;

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count_for(0, 10), 1);
        assert_eq!(page_count_for(10, 10), 1);
        assert_eq!(page_count_for(11, 10), 2);
        assert_eq!(page_count_for(25, 10), 3);
    }
}
