use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

/// What the header checkbox selects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SelectAllScope {
    /// Every record that passes the current tab and search
    #[default]
    FilteredView,
    /// Only the rows of the page being shown
    CurrentPage,
}

/// How much of a set of visible rows is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage {
    None,
    Partial,
    All,
}

/// Selected record ids of a list page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    selected: BTreeSet<String>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`; returns whether it is now selected
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.selected.remove(id) {
            false
        } else {
            self.selected.insert(id.to_string());
            true
        }
    }

    pub fn set(&mut self, id: &str, selected: bool) {
        if selected {
            self.selected.insert(id.to_string());
        } else {
            self.selected.remove(id);
        }
    }

    /// Replace the selection with exactly `visible_ids`
    pub fn select_all<I, S>(&mut self, visible_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected = visible_ids.into_iter().map(Into::into).collect();
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Selected ids in a stable (sorted) order
    pub fn selected_ids(&self) -> Vec<String> {
        self.selected.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }

    pub fn coverage<'a, I>(&self, visible_ids: I) -> Coverage
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut total = 0usize;
        let mut hit = 0usize;
        for id in visible_ids {
            total += 1;
            if self.selected.contains(id) {
                hit += 1;
            }
        }
        match (hit, total) {
            (0, _) => Coverage::None,
            (h, t) if h == t => Coverage::All,
            _ => Coverage::Partial,
        }
    }

    /// Drop an id whose record is gone; returns whether it was selected
    pub fn evict(&mut self, id: &str) -> bool {
        self.selected.remove(id)
    }

    /// Keep only ids present in `known`; returns how many were evicted
    pub fn retain_known(&mut self, known: &HashSet<&str>) -> usize {
        let before = self.selected.len();
        self.selected.retain(|id| known.contains(id.as_str()));
        before - self.selected.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips() {
        let mut selection = SelectionTracker::new();
        assert!(selection.toggle("a"));
        assert!(selection.is_selected("a"));
        assert!(!selection.toggle("a"));
        assert_eq!(selection.count(), 0);
    }

    #[test]
    fn test_select_all_replaces() {
        let mut selection = SelectionTracker::new();
        selection.set("stale", true);
        selection.select_all(["b", "a", "c"]);
        assert_eq!(selection.count(), 3);
        assert!(!selection.is_selected("stale"));
        assert_eq!(selection.selected_ids(), vec!["a", "b", "c"]);

        selection.clear();
        assert_eq!(selection.count(), 0);
    }

    #[test]
    fn test_coverage() {
        let mut selection = SelectionTracker::new();
        let visible = ["a", "b"];
        assert_eq!(selection.coverage(visible), Coverage::None);
        selection.set("a", true);
        assert_eq!(selection.coverage(visible), Coverage::Partial);
        selection.set("b", true);
        assert_eq!(selection.coverage(visible), Coverage::All);
        assert_eq!(selection.coverage(std::iter::empty()), Coverage::None);
    }

    #[test]
    fn test_evict_and_retain() {
        let mut selection = SelectionTracker::new();
        selection.select_all(["a", "b", "c"]);
        assert!(selection.evict("b"));
        assert!(!selection.evict("b"));

        let known: HashSet<&str> = ["a"].into_iter().collect();
        assert_eq!(selection.retain_known(&known), 1);
        assert_eq!(selection.selected_ids(), vec!["a"]);
    }
}
