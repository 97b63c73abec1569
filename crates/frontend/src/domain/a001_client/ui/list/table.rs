use contracts::domain::a001_client::Client;
use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;

use super::row::ClientRow;
use crate::domain::a001_client::store::is_pending_id;

pub const NO_CLIENTS_TEXT: &str = "No clients";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientRowModel {
    pub client: Client,
    pub selected: bool,
    pub pending: bool,
}

/// What the table body shows for a given input.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientTableBody {
    Placeholder,
    Rows(Vec<ClientRowModel>),
}

pub fn build_table_body(clients: &[Client], selected: &HashSet<String>) -> ClientTableBody {
    if clients.is_empty() {
        return ClientTableBody::Placeholder;
    }

    ClientTableBody::Rows(
        clients
            .iter()
            .map(|client| ClientRowModel {
                selected: selected.contains(&client.id),
                pending: is_pending_id(&client.id),
                client: client.clone(),
            })
            .collect(),
    )
}

#[component]
pub fn ClientTable(
    /// Records to show, already filtered
    #[prop(into)]
    clients: Signal<Vec<Client>>,
    /// Page selection
    #[prop(into)]
    selected: Signal<HashSet<String>>,
    on_toggle: Callback<String>,
) -> impl IntoView {
    let body = move || clients.with(|c| selected.with(|s| build_table_body(c, s)));

    view! {
        <div class="table-wrapper">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell attr:style="width: 40px;"></TableHeaderCell>
                        <TableHeaderCell>"First name"</TableHeaderCell>
                        <TableHeaderCell>"Last name"</TableHeaderCell>
                        <TableHeaderCell>"Phone number"</TableHeaderCell>
                        <TableHeaderCell>"Email"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || match body() {
                        ClientTableBody::Placeholder => view! {
                            <TableRow>
                                <TableCell attr:colspan="5">
                                    <TableCellLayout>{NO_CLIENTS_TEXT}</TableCellLayout>
                                </TableCell>
                            </TableRow>
                        }
                        .into_any(),
                        ClientTableBody::Rows(rows) => rows
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <ClientRow
                                        client=row.client
                                        is_selected=row.selected
                                        pending=row.pending
                                        on_toggle=on_toggle
                                    />
                                }
                            })
                            .collect_view()
                            .into_any(),
                    }}
                </TableBody>
            </Table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_client::store::new_pending_id;

    fn ann() -> Client {
        Client {
            id: "1".to_string(),
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            email: "a@x.com".to_string(),
            phone_number: "555".to_string(),
        }
    }

    #[test]
    fn test_empty_list_renders_single_placeholder() {
        let body = build_table_body(&[], &HashSet::new());
        assert_eq!(body, ClientTableBody::Placeholder);
        assert_eq!(NO_CLIENTS_TEXT, "No clients");
    }

    #[test]
    fn test_rows_follow_input_order_and_selection() {
        let mut bob = ann();
        bob.id = "2".to_string();
        bob.first_name = "Bob".to_string();
        let selected: HashSet<String> = ["2".to_string()].into_iter().collect();

        let ClientTableBody::Rows(rows) = build_table_body(&[ann(), bob], &selected) else {
            panic!("expected data rows");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].client.first_name, "Ann");
        assert!(!rows[0].selected);
        assert_eq!(rows[1].client.first_name, "Bob");
        assert!(rows[1].selected);
    }

    #[test]
    fn test_pending_rows_are_flagged() {
        let mut pending = ann();
        pending.id = new_pending_id();

        let ClientTableBody::Rows(rows) = build_table_body(&[ann(), pending], &HashSet::new())
        else {
            panic!("expected data rows");
        };
        assert!(!rows[0].pending);
        assert!(rows[1].pending);
    }
}
