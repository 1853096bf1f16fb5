use crate::pages::{Dashboard, LoginPage};
use crate::state::{AppContext, AppState};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext(AppState::new()));

    // Router hooks (`use_navigate`) require the <Router> context.
    view! {
        <Router>
            <Routes fallback=|| view! { <div class="px-4 py-8 text-xs text-muted-foreground">"Not found"</div> }>
                <Route path=path!("") view=LoginPage />
                <Route path=path!("login") view=LoginPage />
                <Route path=path!("dashboard") view=Dashboard />
            </Routes>
        </Router>
    }
}
