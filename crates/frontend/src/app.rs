use crate::routes::routes::AppRoutes;
use crate::system::session::context::provide_session;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Identity is read from localStorage once and shared via context.
    provide_session();

    view! {
        <AppRoutes />
    }
}
