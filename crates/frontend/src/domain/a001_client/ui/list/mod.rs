mod row;
mod state;
mod table;

use contracts::domain::a001_client::Client;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_client::store::use_clients_store;
use crate::domain::a001_client::ui::create::{CreateClientDialog, CreateClientWizard};
use crate::domain::a001_client::ui::delete::DeleteClientsDialog;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, SearchInput, Searchable};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::query_state;
use state::{create_state, SEARCH_PARAM};
use table::ClientTable;

impl Searchable for Client {
    fn matches_filter(&self, filter_lower: &str) -> bool {
        self.matches_search(filter_lower)
    }
}

/// Records whose first name, last name, email or phone contain `search`.
pub fn filter_clients(clients: &[Client], search: &str) -> Vec<Client> {
    filter_list(clients, search)
}

#[component]
pub fn ClientsListPage() -> impl IntoView {
    let store = use_clients_store();
    let state = create_state();
    let wizard = RwSignal::new(CreateClientWizard::default());
    let create_open = RwSignal::new(false);
    let delete_open = RwSignal::new(false);

    store.load();

    // Selection only ever refers to records that exist.
    Effect::new(move |_| {
        store
            .clients
            .with(|clients| state.maybe_update(|s| s.retain_known(clients)));
    });

    Effect::new(move |_| {
        let search = state.with(|s| s.search_query.clone());
        query_state::write_param(SEARCH_PARAM, &search);
    });

    let filtered = Signal::derive(move || {
        store
            .clients
            .with(|clients| state.with(|s| filter_clients(clients, &s.search_query)))
    });
    let selected = Signal::derive(move || state.with(|s| s.selected.clone()));
    let selected_count = Signal::derive(move || state.with(|s| s.selected.len()));
    let search_value = Signal::derive(move || state.with(|s| s.search_query.clone()));

    let toggle_selection = move |id: String| {
        state.update(|s| {
            s.toggle(&id);
        });
    };

    let open_create = move |_| {
        wizard.update(|w| w.open());
        create_open.set(true);
    };

    let open_delete = move |_| {
        if state.with(|s| s.can_request_delete()) {
            delete_open.set(true);
        }
    };

    let confirm_delete = move |_: ()| {
        delete_open.set(false);
        let mut ids = Vec::new();
        state.update(|s| ids = s.take_selection());
        // TODO: send DELETE /api/clients/{id} for each id once the API exposes it.
        log::info!("Delete requested for clients {:?}; deletion is not implemented", ids);
    };

    view! {
        <PageFrame page_id="a001_client--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("customers")}
                    <h1 class="page__title">"Clients"</h1>
                    <Badge>
                        {move || store.clients.with(|c| c.len()).to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=open_delete>
                        {icon("delete")}
                        {move || format!(" Delete selected ({})", selected_count.get())}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Flex gap=FlexGap::Small align=FlexAlign::Center attr:style="margin: 16px 0;">
                    <SearchInput
                        value=search_value
                        on_change=Callback::new(move |value: String| {
                            state.update(|s| s.search_query = value);
                        })
                        placeholder="Search clients..."
                    />
                    <Button appearance=ButtonAppearance::Primary on_click=open_create>
                        {icon("plus")}
                        " Create new client"
                    </Button>
                </Flex>

                <ClientTable
                    clients=filtered
                    selected=selected
                    on_toggle=Callback::new(toggle_selection)
                />
            </div>

            <CreateClientDialog open=create_open wizard=wizard />
            <DeleteClientsDialog
                open=delete_open
                count=selected_count
                on_confirm=Callback::new(confirm_delete)
            />
        </PageFrame>
    }
}
