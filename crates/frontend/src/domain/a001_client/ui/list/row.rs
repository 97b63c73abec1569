use contracts::domain::a001_client::Client;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::TableCellCheckbox;

/// One client row: selection checkbox, then name and contact cells.
///
/// A pure function of its inputs. Pending rows cannot be selected.
#[component]
pub fn ClientRow(
    client: Client,
    is_selected: bool,
    /// Record is an optimistic placeholder awaiting the server
    #[prop(optional)]
    pending: bool,
    on_toggle: Callback<String>,
) -> impl IntoView {
    let Client {
        id,
        first_name,
        last_name,
        email,
        phone_number,
    } = client;
    let row_style = if pending { "opacity: 0.6;" } else { "" };

    view! {
        <TableRow attr:style=row_style>
            <TableCellCheckbox
                item_id=id
                checked=is_selected
                disabled=pending
                on_toggle=on_toggle
            />
            <TableCell>
                <TableCellLayout truncate=true>{first_name}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>{last_name}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>{phone_number}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>{email}</TableCellLayout>
            </TableCell>
        </TableRow>
    }
}
