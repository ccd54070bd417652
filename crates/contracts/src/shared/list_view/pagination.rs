use serde::{Deserialize, Serialize};

/// Rows per page when a list does not say otherwise
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// 1-based page cursor over a derived collection.
///
/// Navigation never fails: out-of-range requests clamp to the first or last
/// page. The cursor does not know the collection, so every operation that
/// depends on it takes its length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationCursor {
    page_index: usize,
    page_size: usize,
}

impl Default for PaginationCursor {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PaginationCursor {
    /// A zero page size is coerced to 1
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `max(1, ceil(len / page_size))`
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size).max(1)
    }

    /// Rows of the current page
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.page_index - 1)
            .saturating_mul(self.page_size)
            .min(items.len());
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }

    pub fn go_to(&mut self, page_index: usize, len: usize) {
        self.page_index = page_index.clamp(1, self.total_pages(len));
    }

    pub fn next(&mut self, len: usize) {
        self.go_to(self.page_index.saturating_add(1), len);
    }

    pub fn prev(&mut self) {
        self.page_index = self.page_index.saturating_sub(1).max(1);
    }

    pub fn first(&mut self) {
        self.page_index = 1;
    }

    pub fn last(&mut self, len: usize) {
        self.page_index = self.total_pages(len);
    }

    pub fn has_prev(&self) -> bool {
        self.page_index > 1
    }

    pub fn has_next(&self, len: usize) -> bool {
        self.page_index < self.total_pages(len)
    }

    /// Pull the page index back inside the collection after it shrank.
    /// Returns true if the index moved.
    pub fn clamp(&mut self, len: usize) -> bool {
        let total = self.total_pages(len);
        if self.page_index > total {
            self.page_index = total;
            true
        } else {
            false
        }
    }

    /// Changing the page size starts over from the first page
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page_index = 1;
    }

    /// 1-based `(first, last)` row numbers of the current page, `(0, 0)` when
    /// there is nothing to show
    pub fn range(&self, len: usize) -> (usize, usize) {
        let shown = self.slice_len(len);
        if shown == 0 {
            return (0, 0);
        }
        let first = (self.page_index - 1) * self.page_size + 1;
        (first, first + shown - 1)
    }

    fn slice_len(&self, len: usize) -> usize {
        let start = (self.page_index - 1).saturating_mul(self.page_size).min(len);
        (len - start).min(self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twenty_five_rows_make_two_pages() {
        let rows: Vec<u32> = (0..25).collect();
        let mut cursor = PaginationCursor::new(20);

        assert_eq!(cursor.total_pages(rows.len()), 2);
        assert_eq!(cursor.slice(&rows).len(), 20);

        cursor.next(rows.len());
        assert_eq!(cursor.page_index(), 2);
        assert_eq!(cursor.slice(&rows), &rows[20..25]);
    }

    #[test]
    fn test_empty_collection_has_one_page() {
        let mut cursor = PaginationCursor::new(20);
        assert_eq!(cursor.total_pages(0), 1);
        assert!(cursor.slice::<u8>(&[]).is_empty());
        cursor.next(0);
        assert_eq!(cursor.page_index(), 1);
        assert_eq!(cursor.range(0), (0, 0));
    }

    #[test]
    fn test_navigation_clamps() {
        let mut cursor = PaginationCursor::new(10);
        cursor.prev();
        assert_eq!(cursor.page_index(), 1);

        cursor.go_to(99, 35);
        assert_eq!(cursor.page_index(), 4);
        cursor.next(35);
        assert_eq!(cursor.page_index(), 4);
        assert!(!cursor.has_next(35));

        cursor.go_to(0, 35);
        assert_eq!(cursor.page_index(), 1);
        assert!(!cursor.has_prev());
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut cursor = PaginationCursor::new(20);
        cursor.go_to(3, 60);
        assert!(cursor.clamp(25));
        assert_eq!(cursor.page_index(), 2);
        assert!(!cursor.clamp(25));
        assert!(cursor.clamp(0));
        assert_eq!(cursor.page_index(), 1);
    }

    #[test]
    fn test_page_size_change_resets() {
        let mut cursor = PaginationCursor::new(20);
        cursor.go_to(2, 40);
        cursor.set_page_size(0);
        assert_eq!(cursor.page_index(), 1);
        assert_eq!(cursor.page_size(), 1);
    }

    #[test]
    fn test_range_label() {
        let mut cursor = PaginationCursor::new(20);
        assert_eq!(cursor.range(25), (1, 20));
        cursor.last(25);
        assert_eq!(cursor.range(25), (21, 25));
    }
}
