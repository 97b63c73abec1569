//! List helpers: client-side search and the search input component.
use leptos::prelude::*;

/// Types that can be matched against a search query.
pub trait Searchable {
    /// `filter_lower` is the query already lowercased by the caller.
    fn matches_filter(&self, filter_lower: &str) -> bool;
}

/// Case-insensitive filter keeping the original order.
///
/// An empty query returns every item.
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    if filter.is_empty() {
        return items.to_vec();
    }

    let filter_lower = filter.to_lowercase();
    items
        .iter()
        .filter(|item| item.matches_filter(&filter_lower))
        .cloned()
        .collect()
}

/// Search input with a clear button.
///
/// Every keystroke is forwarded to `on_change`; there is no debounce.
#[component]
pub fn SearchInput(
    /// Current filter value
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new filter value
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let is_filter_active = move || !value.get().is_empty();

    view! {
        <div class="search-input" style="position: relative; display: flex; align-items: center; flex: 1;">
            <span style="position: absolute; left: 8px; display: inline-flex; color: #888;">
                {crate::shared::icons::icon("search")}
            </span>
            <input
                type="text"
                placeholder={placeholder}
                style=move || format!(
                    "width: 100%; padding: 6px 32px 6px 30px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px; background: {};",
                    if is_filter_active() { "#fffbea" } else { "white" }
                )
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=is_filter_active>
                <button
                    style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                    on:click=move |_| on_change.run(String::new())
                    title="Clear"
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}
