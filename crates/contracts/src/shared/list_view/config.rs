use super::filter::ALL_TAB;
use super::pagination::DEFAULT_PAGE_SIZE;
use super::selection::SelectAllScope;

/// Named status bucket of a list page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tab {
    /// Label shown in the tab strip (and stored in `FilterState::active_tab`)
    pub label: &'static str,
    /// Status value records must carry to be in this tab; `None` for "All"
    pub status: Option<&'static str>,
}

/// Capability set of a list page: which tabs exist, which fields search
/// looks at, how many rows a page holds and what "select all" means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConfig {
    pub status_field: &'static str,
    pub tabs: Vec<Tab>,
    pub searchable_fields: Vec<&'static str>,
    pub page_size: usize,
    pub select_all_scope: SelectAllScope,
}

impl ListConfig {
    /// Config with only the "All" tab, default page size and select-all over
    /// the filtered view.
    pub fn new(status_field: &'static str) -> Self {
        Self {
            status_field,
            tabs: vec![Tab {
                label: ALL_TAB,
                status: None,
            }],
            searchable_fields: Vec::new(),
            page_size: DEFAULT_PAGE_SIZE,
            select_all_scope: SelectAllScope::default(),
        }
    }

    pub fn tab(mut self, label: &'static str, status: &'static str) -> Self {
        self.tabs.push(Tab {
            label,
            status: Some(status),
        });
        self
    }

    pub fn searchable(mut self, fields: &[&'static str]) -> Self {
        self.searchable_fields.extend_from_slice(fields);
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn select_all_scope(mut self, scope: SelectAllScope) -> Self {
        self.select_all_scope = scope;
        self
    }

    /// Status value a tab label narrows to.
    ///
    /// `None` means "no narrowing": the "All" tab and labels the config does
    /// not know.
    pub fn tab_status(&self, label: &str) -> Option<&'static str> {
        self.tabs
            .iter()
            .find(|t| t.label == label)
            .and_then(|t| t.status)
    }

    pub fn has_tab(&self, label: &str) -> bool {
        self.tabs.iter().any(|t| t.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_all_tab_first() {
        let config = ListConfig::new("status")
            .tab("Pending", "pending")
            .tab("Shipped", "shipped");

        assert_eq!(config.tabs[0].label, ALL_TAB);
        assert_eq!(config.tabs.len(), 3);
        assert_eq!(config.tab_status("Pending"), Some("pending"));
        assert_eq!(config.tab_status(ALL_TAB), None);
        assert_eq!(config.tab_status("Refunded"), None);
        assert!(!config.has_tab("Refunded"));
    }

    #[test]
    fn test_zero_page_size_is_coerced() {
        let config = ListConfig::new("status").page_size(0);
        assert_eq!(config.page_size, 1);
    }
}
