//! Declarative parts of a list page: columns, stats, bulk and row actions.

use contracts::shared::api::BulkAction;
use leptos::prelude::*;
use serde_json::Value;

use crate::shared::components::StatTone;

/// One table column
pub struct ColumnDef<T> {
    pub title: &'static str,
    /// Field used when the header is clicked; `None` makes the column fixed
    pub sort_field: Option<&'static str>,
    pub min_width: f64,
    pub render: fn(&T) -> AnyView,
}

impl<T> ColumnDef<T> {
    pub fn new(title: &'static str, render: fn(&T) -> AnyView) -> Self {
        Self {
            title,
            sort_field: None,
            min_width: 120.0,
            render,
        }
    }

    pub fn sortable(mut self, field: &'static str) -> Self {
        self.sort_field = Some(field);
        self
    }

    pub fn min_width(mut self, width: f64) -> Self {
        self.min_width = width;
        self
    }
}

/// Card showing one entry of the `stats` object the list endpoint returns
#[derive(Clone)]
pub struct StatDef {
    pub label: &'static str,
    pub key: &'static str,
    pub icon: &'static str,
    pub tone: StatTone,
    pub format: fn(&Value) -> String,
}

impl StatDef {
    pub fn new(label: &'static str, key: &'static str) -> Self {
        Self {
            label,
            key,
            icon: "",
            tone: StatTone::Neutral,
            format: format_stat,
        }
    }

    pub fn icon(mut self, icon: &'static str) -> Self {
        self.icon = icon;
        self
    }

    pub fn tone(mut self, tone: StatTone) -> Self {
        self.tone = tone;
        self
    }

    pub fn format(mut self, format: fn(&Value) -> String) -> Self {
        self.format = format;
        self
    }

    /// Formatted value, `None` when the server did not report it
    pub fn value_in(&self, stats: Option<&Value>) -> Option<String> {
        stats
            .and_then(|s| s.get(self.key))
            .filter(|v| !v.is_null())
            .map(self.format)
    }
}

fn format_stat(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Toolbar button acting on the whole selection.
///
/// `make` builds the action when clicked, reading whatever input `control`
/// rendered; an `Err` is shown to the user and nothing is sent.
#[derive(Clone)]
pub struct BulkActionDef {
    pub label: &'static str,
    pub confirm: bool,
    pub control: Option<ViewFn>,
    pub make: Callback<(), Result<BulkAction, String>>,
}

impl BulkActionDef {
    pub fn delete() -> Self {
        Self {
            label: "Delete",
            confirm: true,
            control: None,
            make: Callback::new(|_| Ok(BulkAction::Delete)),
        }
    }

    pub fn new(
        label: &'static str,
        make: impl Fn(()) -> Result<BulkAction, String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            label,
            confirm: false,
            control: None,
            make: Callback::new(make),
        }
    }

    pub fn with_control(mut self, control: impl Into<ViewFn>) -> Self {
        self.control = Some(control.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowActionKind {
    Delete,
    /// `POST {resource}/{id}/{action}`
    Endpoint(&'static str),
}

/// Button in the actions column of a row
pub struct RowActionDef<T> {
    pub label: &'static str,
    pub icon: &'static str,
    pub kind: RowActionKind,
    pub confirm: bool,
    pub visible: fn(&T) -> bool,
}

impl<T> RowActionDef<T> {
    pub fn delete() -> Self {
        Self {
            label: "Delete",
            icon: "delete",
            kind: RowActionKind::Delete,
            confirm: true,
            visible: |_| true,
        }
    }

    pub fn endpoint(label: &'static str, action: &'static str, visible: fn(&T) -> bool) -> Self {
        Self {
            label,
            icon: "refresh",
            kind: RowActionKind::Endpoint(action),
            confirm: false,
            visible,
        }
    }
}
