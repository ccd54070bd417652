use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::config::ListConfig;
use super::record::ListRecord;

/// Label of the tab that applies no status narrowing
pub const ALL_TAB: &str = "All";

/// Search text and active tab of a list page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub search_text: String,
    pub active_tab: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            active_tab: ALL_TAB.to_string(),
        }
    }
}

impl FilterState {
    /// True when filtering cannot remove anything
    pub fn is_identity(&self) -> bool {
        self.active_tab == ALL_TAB && self.search_text.trim().is_empty()
    }
}

/// Narrow a collection by the active tab, then by the search text.
///
/// Search is a case-insensitive substring match OR'd across the config's
/// searchable fields; a missing field matches as the empty string. When no
/// filter is active the collection is returned borrowed and untouched.
pub fn filter_records<'a, T>(
    collection: &'a [T],
    filter: &FilterState,
    config: &ListConfig,
) -> Cow<'a, [T]>
where
    T: ListRecord + Clone,
{
    if filter.is_identity() {
        return Cow::Borrowed(collection);
    }

    let status = config.tab_status(&filter.active_tab);
    let needle = filter.search_text.trim().to_lowercase();

    Cow::Owned(
        collection
            .iter()
            .filter(|record| matches_tab(*record, config.status_field, status))
            .filter(|record| matches_search(*record, &needle, &config.searchable_fields))
            .cloned()
            .collect(),
    )
}

/// Exact match of the record's status field against a tab's status value
pub fn matches_tab<T: ListRecord>(record: &T, status_field: &str, status: Option<&str>) -> bool {
    match status {
        None => true,
        Some(expected) => record.field_value(status_field).as_deref() == Some(expected),
    }
}

/// `needle` must already be lowercased; an empty needle matches everything
pub fn matches_search<T: ListRecord>(record: &T, needle: &str, fields: &[&str]) -> bool {
    if needle.is_empty() {
        return true;
    }
    fields.iter().any(|field| {
        record
            .field_value(field)
            .unwrap_or_default()
            .to_lowercase()
            .contains(needle)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: &'static str,
        name: &'static str,
        status: &'static str,
        note: Option<&'static str>,
    }

    impl ListRecord for Row {
        fn record_id(&self) -> &str {
            self.id
        }

        fn field_value(&self, field: &str) -> Option<String> {
            match field {
                "name" => Some(self.name.to_string()),
                "status" => Some(self.status.to_string()),
                "note" => self.note.map(str::to_string),
                _ => None,
            }
        }
    }

    fn config() -> ListConfig {
        ListConfig::new("status")
            .tab("Pending", "pending")
            .tab("Shipped", "shipped")
            .searchable(&["name", "note", "status"])
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: "1", name: "John Doe", status: "pending", note: None },
            Row { id: "2", name: "Jane", status: "shipped", note: Some("gift wrap") },
            Row { id: "3", name: "Johnny", status: "shipped", note: None },
        ]
    }

    fn state(tab: &str, search: &str) -> FilterState {
        FilterState {
            search_text: search.to_string(),
            active_tab: tab.to_string(),
        }
    }

    #[test]
    fn test_identity_is_borrowed() {
        let data = rows();
        let result = filter_records(&data, &FilterState::default(), &config());
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let data = vec![
            Row { id: "1", name: "John Doe", status: "pending", note: None },
            Row { id: "2", name: "Jane", status: "pending", note: None },
        ];
        let result = filter_records(&data, &state(ALL_TAB, "john"), &config());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "1");
    }

    #[test]
    fn test_tab_narrows_before_search() {
        let data = rows();
        let result = filter_records(&data, &state("Shipped", "john"), &config());
        let ids: Vec<_> = result.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["3"]);
    }

    #[test]
    fn test_missing_field_matches_as_empty() {
        let data = rows();
        let result = filter_records(&data, &state(ALL_TAB, "gift"), &config());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "2");
    }

    #[test]
    fn test_unknown_tab_does_not_narrow() {
        let data = rows();
        let result = filter_records(&data, &state("Refunded", ""), &config());
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_whitespace_search_is_empty() {
        let data = rows();
        let filter = state(ALL_TAB, "   ");
        assert!(filter.is_identity());
        assert_eq!(filter_records(&data, &filter, &config()).len(), 3);
    }

    #[test]
    fn test_input_is_untouched() {
        let data = rows();
        let before = data.clone();
        let _ = filter_records(&data, &state("Pending", "doe"), &config());
        assert_eq!(data, before);
    }
}
