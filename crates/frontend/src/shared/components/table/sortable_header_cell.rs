//! Sortable table header cell
//!
//! # Example
//!
//! ```text
//! <SortableHeaderCell
//!     label="Total"
//!     sort_field="total"
//!     sort=Signal::derive(move || store.with(|s| s.sort().clone()))
//!     on_sort=Callback::new(move |field: String| store.update(|s| s.toggle_sort(&field)))
//! />
//! ```

use crate::shared::list_utils::{sort_class, sort_indicator};
use contracts::shared::list_view::SortState;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,

    /// Field handed to `on_sort`
    sort_field: &'static str,

    /// Current sort of the list
    #[prop(into)]
    sort: Signal<SortState>,

    on_sort: Callback<String>,

    #[prop(optional, default = 100.0)]
    min_width: f64,
) -> impl IntoView {
    view! {
        <TableHeaderCell resizable=false min_width=min_width class="resizable">
            <div
                class="table__sortable-header"
                style="cursor: pointer; padding-right: 12px;"
                on:click=move |_| on_sort.run(sort_field.to_string())
            >
                {label}
                <span class=move || sort_class(&sort.get(), sort_field)>
                    {move || sort_indicator(&sort.get(), sort_field)}
                </span>
            </div>
        </TableHeaderCell>
    }
}
