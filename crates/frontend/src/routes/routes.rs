use crate::domain::a003_purchase::ui::details::PurchaseDetails;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="app-main">
                <Routes fallback=|| view! { <div class="page__empty">"Page not found"</div> }>
                    <Route path=path!("/") view=PurchaseDetails />
                    <Route path=path!("/transactions/purchase") view=PurchaseDetails />
                </Routes>
            </main>
        </Router>
    }
}
