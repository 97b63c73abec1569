//! PageFrame — standard root wrapper for every routed page.
//!
//! Puts two metadata attributes on the root DOM element:
//!   - `id`                 — `"{entity}--{category}"`, e.g. `"a001_client--list"`
//!   - `data-page-category` — one of the `PAGE_CAT_*` constants
//!
//! The `--` separator keeps the entity searchable: copy the id from the DOM
//! inspector and it leads to `domain/a001_client/`.

use leptos::prelude::*;

/// List of records — table with search and bulk actions.
pub const PAGE_CAT_LIST: &str = "list";

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`.
    page_id: &'static str,
    /// One of the `PAGE_CAT_*` constants.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div id=page_id class="page" data-page-category=category>
            {children()}
        </div>
    }
}
