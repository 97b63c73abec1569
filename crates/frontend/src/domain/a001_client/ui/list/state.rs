use contracts::domain::a001_client::Client;
use leptos::prelude::*;
use std::collections::HashSet;

use crate::shared::query_state;

pub const SEARCH_PARAM: &str = "search";

/// Page-owned state of the clients list.
///
/// This is the only place the selection lives; the table and rows only read it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClientsListState {
    pub search_query: String,
    pub selected: HashSet<String>,
}

impl ClientsListState {
    /// Flip membership of `id`; returns whether it is selected afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.selected.remove(id) {
            false
        } else {
            self.selected.insert(id.to_string());
            true
        }
    }

    /// The delete confirmation may only open over a non-empty selection.
    pub fn can_request_delete(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Empty the selection, returning the ids it held in sorted order.
    pub fn take_selection(&mut self) -> Vec<String> {
        let mut ids: Vec<String> = self.selected.drain().collect();
        ids.sort();
        ids
    }

    /// Drop selected ids that no longer belong to any record.
    ///
    /// Returns true if the selection changed.
    pub fn retain_known(&mut self, clients: &[Client]) -> bool {
        let before = self.selected.len();
        self.selected
            .retain(|id| clients.iter().any(|client| &client.id == id));
        self.selected.len() != before
    }
}

/// State for a freshly mounted page; the search term is restored from the URL.
pub fn create_state() -> RwSignal<ClientsListState> {
    let search_query = query_state::read_param(SEARCH_PARAM).unwrap_or_default();
    RwSignal::new(ClientsListState {
        search_query,
        ..ClientsListState::default()
    })
}
