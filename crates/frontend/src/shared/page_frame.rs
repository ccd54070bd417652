//! PageFrame: root wrapper of every routed page.
//!
//! Sets `id` (`"{entity}--{category}"`) and `data-page-category` on the root
//! element so a page found in the DOM inspector leads straight to its
//! `domain/` directory.

use super::page_standard::is_valid_page_id;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`, e.g. `"a101_product--list"`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(page_id) {
        log::warn!("page id `{}` is not in {{entity}}--{{category}} form", page_id);
    }

    view! {
        <div id=page_id class="page" data-page-category=category>
            {children()}
        </div>
    }
}
