//! Row selection checkbox rendered as a table cell.
//!
//! ```ignore
//! <TableCellCheckbox
//!     item_id=row.id.clone()
//!     checked=Signal::derive(move || selected.get().contains(&id))
//!     on_toggle=Callback::new(move |id| toggle_select(id))
//! />
//! ```

use leptos::prelude::*;
use thaw::*;

/// Checkbox cell for a single row.
///
/// Holds no state of its own: `checked` is the caller's selection and every
/// change is reported through `on_toggle` with the row id. Clicks do not
/// propagate to the row.
#[component]
pub fn TableCellCheckbox(
    /// Id of the row
    #[prop(into)]
    item_id: String,
    /// Whether the row is in the selection
    #[prop(into)]
    checked: Signal<bool>,
    /// Called with `item_id` on every change
    on_toggle: Callback<String>,
    /// Disable the checkbox
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    view! {
        <TableCell class="table__cell--checkbox" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || checked.get()
                prop:disabled=move || disabled.get().unwrap_or(false)
                on:change=move |_| on_toggle.run(item_id.clone())
            />
        </TableCell>
    }
}
