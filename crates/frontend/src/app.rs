use leptos::prelude::*;

use crate::deterrent;
use crate::logs::filter::LogFilters;
use crate::pages::dashboard::DashboardPage;
use crate::pages::iframe_view::IframeView;
use crate::pages::login::LoginPage;
use crate::session::{BrowserSessionStore, SessionStore, View};
use crate::shared::modal::ModalService;

/// App-wide state: the active view plus the dashboard filter criteria.
///
/// The filter criteria live here (not in the dashboard page) so they survive
/// refetches of the log set; only the user clears them. All view changes go
/// through the transition functions below — there are no other transitions.
#[derive(Clone, Copy)]
pub struct AppState {
    pub view: RwSignal<View>,
    pub filters: RwSignal<LogFilters>,
}

impl AppState {
    pub fn new(initial: View) -> Self {
        Self {
            view: RwSignal::new(initial),
            filters: RwSignal::new(LogFilters::default()),
        }
    }

    /// Initial state from the session store, defaulting to Login. Attempted
    /// once at startup.
    pub fn restore(store: &impl SessionStore) -> Self {
        Self::new(store.restore().unwrap_or_default())
    }

    /// Login → Iframe, on successful user login.
    pub fn enter_iframe(&self, store: &impl SessionStore, url: String) {
        let view = View::Iframe { url };
        store.save(&view);
        self.view.set(view);
    }

    /// Login → Dashboard, on successful admin login.
    pub fn enter_dashboard(&self, store: &impl SessionStore, admin_name: String) {
        let view = View::Dashboard { admin_name };
        store.save(&view);
        self.view.set(view);
    }

    /// Dashboard → Login and Iframe → Login, on explicit logout.
    pub fn logout(&self, store: &impl SessionStore) {
        store.clear();
        self.view.set(View::Login);
    }
}

pub fn use_app_state() -> AppState {
    use_context::<AppState>().expect("AppState not found in component tree")
}

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::restore(&BrowserSessionStore);
    provide_context(state);
    provide_context(ModalService::new());

    deterrent::install();

    view! {
        {move || match state.view.get() {
            View::Login => view! { <LoginPage /> }.into_any(),
            View::Dashboard { admin_name } => {
                view! { <DashboardPage admin_name=admin_name /> }.into_any()
            }
            View::Iframe { url } => view! { <IframeView url=url /> }.into_any(),
        }}
    }
}
