use crate::domain::a001_client::ui::list::ClientsListPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Page not found"</h1>
            </div>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=ClientsListPage />
                    <Route path=path!("/clients") view=ClientsListPage />
                </Routes>
            </main>
        </Router>
    }
}
