/// Item of a remote collection that can be shown in a managed list.
///
/// Field names are the ones a [`ListConfig`](super::ListConfig) refers to in
/// its searchable fields and status field.
pub trait ListRecord {
    /// Unique identifier of the record
    fn record_id(&self) -> &str;

    /// Stringified value of a field, `None` if the record has no such value
    fn field_value(&self, field: &str) -> Option<String>;
}

/// Stringify an amount the way it is displayed and searched: `20` for whole
/// numbers, `19.9` otherwise.
pub fn amount_text(value: f64) -> String {
    value.to_string()
}
