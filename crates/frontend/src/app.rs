use crate::domain::a001_client::store::ClientsStore;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Single authoritative container for client records, shared via context.
    provide_context(ClientsStore::new());

    view! {
        <AppRoutes />
    }
}
