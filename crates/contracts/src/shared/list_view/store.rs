use std::collections::HashSet;

use super::config::ListConfig;
use super::filter::{filter_records, matches_tab, FilterState};
use super::pagination::PaginationCursor;
use super::record::ListRecord;
use super::selection::{Coverage, SelectAllScope, SelectionTracker};
use super::sort::{sort_records, SortState};

/// Generation stamp of a list fetch.
///
/// Taken when the request starts; the response is applied only if no newer
/// fetch began in the meantime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a fetch ticket must be handed back to apply_fetch"]
pub struct FetchTicket(u64);

/// State of one list page: the fetched collection and everything derived
/// from it.
#[derive(Debug, Clone)]
pub struct ListStore<T> {
    config: ListConfig,
    records: Vec<T>,
    stats: Option<serde_json::Value>,
    filter: FilterState,
    sort: SortState,
    cursor: PaginationCursor,
    selection: SelectionTracker,
    // filtered + sorted, recomputed by every mutator
    view: Vec<T>,
    generation: u64,
    loaded: bool,
}

impl<T: ListRecord + Clone> ListStore<T> {
    pub fn new(config: ListConfig) -> Self {
        let cursor = PaginationCursor::new(config.page_size);
        Self {
            config,
            records: Vec::new(),
            stats: None,
            filter: FilterState::default(),
            sort: SortState::default(),
            cursor,
            selection: SelectionTracker::new(),
            view: Vec::new(),
            generation: 0,
            loaded: false,
        }
    }

    // ------------------------------------------------------------------
    // Fetch lifecycle
    // ------------------------------------------------------------------

    /// Start a fetch; any ticket issued before this one becomes stale
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        FetchTicket(self.generation)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Install a fetched collection. Returns false and changes nothing when
    /// the ticket is stale.
    pub fn apply_fetch(
        &mut self,
        ticket: FetchTicket,
        records: Vec<T>,
        stats: Option<serde_json::Value>,
    ) -> bool {
        if !self.is_current(ticket) {
            log::debug!(
                "discarding stale list response (generation {} < {})",
                ticket.0,
                self.generation
            );
            return false;
        }

        self.records = records;
        self.stats = stats;
        self.loaded = true;

        let known: HashSet<&str> = self.records.iter().map(|r| r.record_id()).collect();
        let evicted = self.selection.retain_known(&known);
        if evicted > 0 {
            log::debug!("evicted {} selected ids missing from refreshed list", evicted);
        }

        self.refresh_view();
        true
    }

    /// Fetch and apply in one step, for data that is already at hand
    pub fn replace_records(&mut self, records: Vec<T>) {
        let ticket = self.begin_fetch();
        self.apply_fetch(ticket, records, None);
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    // ------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn stats(&self) -> Option<&serde_json::Value> {
        self.stats.as_ref()
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn cursor(&self) -> &PaginationCursor {
        &self.cursor
    }

    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    /// Records passing the active tab and search, in display order
    pub fn filtered(&self) -> &[T] {
        &self.view
    }

    /// Rows of the current page
    pub fn visible_page(&self) -> &[T] {
        self.cursor.slice(&self.view)
    }

    pub fn page_index(&self) -> usize {
        self.cursor.page_index()
    }

    pub fn total_pages(&self) -> usize {
        self.cursor.total_pages(self.view.len())
    }

    /// Records per tab, ignoring the search text
    pub fn tab_counts(&self) -> Vec<(&'static str, usize)> {
        self.config
            .tabs
            .iter()
            .map(|tab| {
                let count = self
                    .records
                    .iter()
                    .filter(|r| matches_tab(*r, self.config.status_field, tab.status))
                    .count();
                (tab.label, count)
            })
            .collect()
    }

    /// Ids the header checkbox acts on, according to the select-all scope
    pub fn visible_ids(&self) -> Vec<String> {
        let rows = match self.config.select_all_scope {
            SelectAllScope::FilteredView => self.filtered(),
            SelectAllScope::CurrentPage => self.visible_page(),
        };
        rows.iter().map(|r| r.record_id().to_string()).collect()
    }

    pub fn selection_coverage(&self) -> Coverage {
        let rows = match self.config.select_all_scope {
            SelectAllScope::FilteredView => self.filtered(),
            SelectAllScope::CurrentPage => self.visible_page(),
        };
        self.selection.coverage(rows.iter().map(|r| r.record_id()))
    }

    // ------------------------------------------------------------------
    // Filter / sort / paging
    // ------------------------------------------------------------------

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.filter.search_text = text.into();
        self.refresh_view();
    }

    pub fn set_tab(&mut self, label: impl Into<String>) {
        self.filter.active_tab = label.into();
        self.refresh_view();
    }

    pub fn set_sort(&mut self, sort: SortState) {
        self.sort = sort;
        self.refresh_view();
    }

    pub fn toggle_sort(&mut self, field: &str) {
        self.sort.toggle(field);
        self.refresh_view();
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.cursor.set_page_size(page_size);
    }

    pub fn go_to_page(&mut self, page_index: usize) {
        self.cursor.go_to(page_index, self.view.len());
    }

    pub fn next_page(&mut self) {
        self.cursor.next(self.view.len());
    }

    pub fn prev_page(&mut self) {
        self.cursor.prev();
    }

    pub fn first_page(&mut self) {
        self.cursor.first();
    }

    pub fn last_page(&mut self) {
        self.cursor.last(self.view.len());
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Ignores ids that are not in the collection
    pub fn toggle_selection(&mut self, id: &str) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.selection.toggle(id)
    }

    pub fn set_selected(&mut self, id: &str, selected: bool) {
        if selected && !self.contains(id) {
            return;
        }
        self.selection.set(id, selected);
    }

    pub fn select_all_visible(&mut self) {
        let ids = self.visible_ids();
        self.selection.select_all(ids);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Drop a record after it was deleted remotely; its selection goes too
    pub fn remove_record(&mut self, id: &str) -> Option<T> {
        let pos = self.records.iter().position(|r| r.record_id() == id)?;
        let removed = self.records.remove(pos);
        self.selection.evict(id);
        self.refresh_view();
        Some(removed)
    }

    fn contains(&self, id: &str) -> bool {
        self.records.iter().any(|r| r.record_id() == id)
    }

    fn refresh_view(&mut self) {
        let mut view = filter_records(&self.records, &self.filter, &self.config).into_owned();
        sort_records(&mut view, &self.sort);
        self.view = view;
        self.cursor.clamp(self.view.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::ALL_TAB;

    #[derive(Debug, Clone, PartialEq)]
    struct Order {
        id: String,
        customer: String,
        status: &'static str,
    }

    impl ListRecord for Order {
        fn record_id(&self) -> &str {
            &self.id
        }

        fn field_value(&self, field: &str) -> Option<String> {
            match field {
                "customer" => Some(self.customer.clone()),
                "status" => Some(self.status.to_string()),
                _ => None,
            }
        }
    }

    fn orders(n: usize) -> Vec<Order> {
        (0..n)
            .map(|i| Order {
                id: format!("o{:02}", i),
                customer: if i % 5 == 0 { "John Doe".into() } else { format!("Customer {}", i) },
                status: if i % 2 == 0 { "pending" } else { "shipped" },
            })
            .collect()
    }

    fn config() -> ListConfig {
        ListConfig::new("status")
            .tab("Pending", "pending")
            .tab("Shipped", "shipped")
            .searchable(&["customer", "status"])
    }

    fn store_with(n: usize) -> ListStore<Order> {
        let mut store = ListStore::new(config());
        store.replace_records(orders(n));
        store
    }

    #[test]
    fn test_twenty_five_orders_on_two_pages() {
        let mut store = store_with(25);
        assert_eq!(store.filter().active_tab, ALL_TAB);
        assert_eq!(store.total_pages(), 2);
        assert_eq!(store.visible_page().len(), 20);
        store.next_page();
        assert_eq!(store.visible_page().len(), 5);
        store.next_page();
        assert_eq!(store.page_index(), 2);
    }

    #[test]
    fn test_shrinking_filter_clamps_page() {
        let mut store = ListStore::new(config().page_size(5));
        store.replace_records(orders(40));
        store.go_to_page(8);
        assert_eq!(store.page_index(), 8);

        // 20 pending orders -> 4 pages
        store.set_tab("Pending");
        assert_eq!(store.page_index(), 4);

        // John Doe is every fifth order; the pending ones are o00, o10, o20, o30
        store.set_search("john");
        assert_eq!(store.filtered().len(), 4);
        assert_eq!(store.page_index(), 1);

        store.set_search("nobody");
        assert!(store.filtered().is_empty());
        assert_eq!(store.page_index(), 1);
        assert_eq!(store.total_pages(), 1);
    }

    #[test]
    fn test_select_all_respects_scope() {
        let mut store = store_with(25);
        store.select_all_visible();
        assert_eq!(store.selection().count(), 25);
        assert_eq!(store.selection_coverage(), Coverage::All);

        let mut paged = ListStore::new(config().select_all_scope(SelectAllScope::CurrentPage));
        paged.replace_records(orders(25));
        paged.select_all_visible();
        assert_eq!(paged.selection().count(), 20);

        paged.clear_selection();
        assert_eq!(paged.selection().count(), 0);
        assert_eq!(paged.selection_coverage(), Coverage::None);
    }

    #[test]
    fn test_remove_record_evicts_selection() {
        let mut store = store_with(3);
        store.toggle_selection("o00");
        store.toggle_selection("o01");
        assert_eq!(store.selection().count(), 2);

        let removed = store.remove_record("o01");
        assert_eq!(removed.map(|o| o.id), Some("o01".to_string()));
        assert_eq!(store.selection().count(), 1);
        assert!(!store.selection().is_selected("o01"));
        assert_eq!(store.records().len(), 2);
        assert!(store.remove_record("o01").is_none());
    }

    #[test]
    fn test_unknown_ids_are_not_selected() {
        let mut store = store_with(2);
        assert!(!store.toggle_selection("ghost"));
        store.set_selected("ghost", true);
        assert!(store.selection().is_empty());
    }

    #[test]
    fn test_stale_fetch_is_discarded() {
        let mut store: ListStore<Order> = ListStore::new(config());
        let first = store.begin_fetch();
        let second = store.begin_fetch();

        assert!(store.apply_fetch(second, orders(3), None));
        assert!(!store.apply_fetch(first, orders(10), None));
        assert_eq!(store.records().len(), 3);
    }

    #[test]
    fn test_refetch_evicts_missing_selection() {
        let mut store = store_with(5);
        store.select_all_visible();
        let ticket = store.begin_fetch();
        store.apply_fetch(ticket, orders(2), Some(serde_json::json!({ "total": 2 })));
        assert_eq!(store.selection().selected_ids(), vec!["o00", "o01"]);
        assert_eq!(store.stats().and_then(|s| s["total"].as_u64()), Some(2));
    }

    #[test]
    fn test_tab_counts_ignore_search() {
        let mut store = store_with(5);
        store.set_search("john");
        assert_eq!(
            store.tab_counts(),
            vec![(ALL_TAB, 5), ("Pending", 3), ("Shipped", 2)]
        );
    }

    #[test]
    fn test_sort_applies_after_filter() {
        let mut store = store_with(4);
        store.toggle_sort("customer");
        store.toggle_sort("customer");
        let ids: Vec<_> = store.filtered().iter().map(|o| o.id.as_str()).collect();
        // descending: "John Doe" > "Customer 3" > "Customer 2" > "Customer 1"
        assert_eq!(ids, vec!["o00", "o03", "o02", "o01"]);
    }
}
