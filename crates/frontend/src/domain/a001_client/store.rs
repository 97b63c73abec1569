//! Shared client list.
//!
//! `ClientsStore` is the only container of client records on the page:
//! fetch, creation and display all go through it. Mutations are expressed as
//! [`ClientsAction`]s and applied by the pure [`reduce`] function.

use contracts::domain::a001_client::{Client, ClientDto};
use leptos::prelude::*;
use uuid::Uuid;

use super::api;

const PENDING_ID_PREFIX: &str = "pending-";

#[derive(Debug, Clone, PartialEq)]
pub enum ClientsAction {
    FetchAll(Vec<Client>),
    InsertPending(Client),
    Reconcile { pending_id: String, client: Client },
    DiscardPending(String),
}

/// Apply `action` to the list in place.
pub fn reduce(clients: &mut Vec<Client>, action: ClientsAction) {
    match action {
        ClientsAction::FetchAll(list) => *clients = list,
        ClientsAction::InsertPending(client) => clients.push(client),
        ClientsAction::Reconcile { pending_id, client } => {
            // A fetch may have dropped the pending row and already brought the server record.
            let slot = clients
                .iter()
                .position(|c| c.id == pending_id)
                .or_else(|| clients.iter().position(|c| c.id == client.id));
            match slot {
                Some(i) => clients[i] = client,
                None => clients.push(client),
            }
        }
        ClientsAction::DiscardPending(pending_id) => clients.retain(|c| c.id != pending_id),
    }
}

/// Temporary identifier for a record whose creation is still in flight.
///
/// Never collides with a server identifier.
pub fn new_pending_id() -> String {
    format!("{}{}", PENDING_ID_PREFIX, Uuid::new_v4())
}

pub fn is_pending_id(id: &str) -> bool {
    id.starts_with(PENDING_ID_PREFIX)
}

/// Optimistic record built from the form, carrying a fresh pending id.
pub fn pending_client(form: &ClientDto) -> Client {
    let mut client = form.to_create_request();
    client.id = new_pending_id();
    client
}

#[derive(Clone, Copy)]
pub struct ClientsStore {
    pub clients: RwSignal<Vec<Client>>,
}

impl ClientsStore {
    pub fn new() -> Self {
        Self {
            clients: RwSignal::new(Vec::new()),
        }
    }

    pub fn dispatch(&self, action: ClientsAction) {
        self.clients.update(|clients| reduce(clients, action));
    }

    /// Fetch the full list and replace the store contents.
    ///
    /// Failures are only logged; there is no retry.
    pub fn load(&self) {
        let store = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_clients().await {
                Ok(list) => {
                    log::debug!("Loaded {} clients", list.len());
                    store.dispatch(ClientsAction::FetchAll(list));
                }
                Err(e) => log::error!("Error fetching clients: {}", e),
            }
        });
    }
}

impl Default for ClientsStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_clients_store() -> ClientsStore {
    use_context::<ClientsStore>().expect("ClientsStore not found in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(id: &str, first_name: &str) -> Client {
        Client {
            id: id.to_string(),
            first_name: first_name.to_string(),
            last_name: "Lee".to_string(),
            email: format!("{}@x.com", first_name.to_lowercase()),
            phone_number: "555".to_string(),
        }
    }

    #[test]
    fn test_fetch_all_replaces_list() {
        let mut clients = vec![client("1", "Ann")];
        reduce(
            &mut clients,
            ClientsAction::FetchAll(vec![client("2", "Bob"), client("3", "Cid")]),
        );
        let ids: Vec<&str> = clients.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn test_insert_pending_appends() {
        let pending = pending_client(&ClientDto::default());
        let mut clients = vec![client("1", "Ann")];
        reduce(&mut clients, ClientsAction::InsertPending(pending.clone()));
        assert_eq!(clients.len(), 2);
        assert_eq!(clients[1], pending);
    }

    #[test]
    fn test_reconcile_replaces_pending_in_place() {
        let pending = pending_client(&ClientDto {
            first_name: "Bob".to_string(),
            ..ClientDto::default()
        });
        let pending_id = pending.id.clone();
        let mut clients = vec![client("1", "Ann")];
        reduce(&mut clients, ClientsAction::InsertPending(pending));
        reduce(
            &mut clients,
            ClientsAction::InsertPending(client("3", "Cid")),
        );

        reduce(
            &mut clients,
            ClientsAction::Reconcile {
                pending_id,
                client: client("2", "Bob"),
            },
        );

        let ids: Vec<&str> = clients.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert!(!clients.iter().any(|c| is_pending_id(&c.id)));
    }

    #[test]
    fn test_reconcile_appends_when_pending_is_gone() {
        let mut clients = vec![client("1", "Ann")];
        reduce(
            &mut clients,
            ClientsAction::Reconcile {
                pending_id: new_pending_id(),
                client: client("2", "Bob"),
            },
        );
        assert_eq!(clients.len(), 2);
        assert_eq!(clients[1].id, "2");
    }

    #[test]
    fn test_reconcile_after_refetch_keeps_ids_unique() {
        let pending = pending_client(&ClientDto {
            first_name: "Bob".to_string(),
            ..ClientDto::default()
        });
        let pending_id = pending.id.clone();
        let mut clients = vec![client("1", "Ann")];
        reduce(&mut clients, ClientsAction::InsertPending(pending));
        // The refetch already contains the saved record and no longer the pending one.
        reduce(
            &mut clients,
            ClientsAction::FetchAll(vec![client("1", "Ann"), client("2", "Bob")]),
        );

        reduce(
            &mut clients,
            ClientsAction::Reconcile {
                pending_id,
                client: client("2", "Bob"),
            },
        );

        let ids: Vec<&str> = clients.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_discard_pending() {
        let pending = pending_client(&ClientDto::default());
        let pending_id = pending.id.clone();
        let mut clients = vec![client("1", "Ann"), pending];
        reduce(&mut clients, ClientsAction::DiscardPending(pending_id));
        assert_eq!(clients, vec![client("1", "Ann")]);
    }

    #[test]
    fn test_pending_ids_are_distinct() {
        let a = new_pending_id();
        let b = new_pending_id();
        assert_ne!(a, b);
        assert!(is_pending_id(&a));
        assert!(!is_pending_id("17"));
        assert!(!is_pending_id(""));
    }
}
