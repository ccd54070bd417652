//! Select-all checkbox of a table header
//!
//! # Example
//!
//! ```text
//! <TableHeaderCheckbox
//!     coverage=Signal::derive(move || store.with(|s| s.selection_coverage()))
//!     on_change=Callback::new(move |check_all: bool| { /* select or clear */ })
//! />
//! ```

use contracts::shared::list_view::Coverage;
use leptos::prelude::*;
use thaw::*;

/// Tri-state checkbox: unchecked, checked or indeterminate depending on how
/// much of the visible rows is selected. Clicking it selects every visible
/// row unless all of them already are.
#[component]
pub fn TableHeaderCheckbox(
    /// Selection coverage of the visible rows
    #[prop(into)]
    coverage: Signal<Coverage>,

    /// Callback on click (true = select all, false = clear)
    on_change: Callback<bool>,

    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // `indeterminate` exists only as a DOM property
    Effect::new(move |_| {
        let state = coverage.get();
        if let Some(input) = checkbox_ref.get() {
            input.set_indeterminate(matches!(state, Coverage::Partial));
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                title="Select all"
                disabled=move || disabled.get()
                prop:checked=move || matches!(coverage.get(), Coverage::All)
                on:change=move |_| {
                    on_change.run(!matches!(coverage.get_untracked(), Coverage::All));
                }
            />
        </TableHeaderCell>
    }
}
