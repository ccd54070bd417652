use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::record::ListRecord;

/// Column sort of a list page; no field keeps the order the API returned
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    pub field: Option<String>,
    pub ascending: bool,
}

impl SortState {
    /// Same field flips direction, another field starts ascending
    pub fn toggle(&mut self, field: &str) {
        if self.field.as_deref() == Some(field) {
            self.ascending = !self.ascending;
        } else {
            self.field = Some(field.to_string());
            self.ascending = true;
        }
    }

    pub fn is_sorted_by(&self, field: &str) -> bool {
        self.field.as_deref() == Some(field)
    }
}

/// Stable sort by the state's field.
///
/// Finite numbers come first and compare numerically; everything else follows
/// as lowercase text. Records without the field go last whatever the
/// direction.
pub fn sort_records<T: ListRecord>(items: &mut [T], sort: &SortState) {
    let Some(field) = sort.field.as_deref() else {
        return;
    };

    items.sort_by(|a, b| {
        match (
            a.field_value(field).map(SortKey::from),
            b.field_value(field).map(SortKey::from),
        ) {
            (Some(x), Some(y)) => {
                let cmp = x.cmp(&y);
                if sort.ascending {
                    cmp
                } else {
                    cmp.reverse()
                }
            }
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
}

/// Total order over field values: numbers rank before text
#[derive(Debug)]
enum SortKey {
    Number(f64),
    Text(String),
}

impl From<String> for SortKey {
    fn from(value: String) -> Self {
        match value.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => SortKey::Number(n),
            _ => SortKey::Text(value.to_lowercase()),
        }
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Number(x), SortKey::Number(y)) => x.total_cmp(y),
            (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
            (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
            (SortKey::Text(x), SortKey::Text(y)) => x.cmp(y),
        }
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}
