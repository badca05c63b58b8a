use leptos::prelude::*;

use crate::app::use_app_state;
use crate::session::BrowserSessionStore;

/// Full-screen embed of the dashboard URL returned by the user login.
#[component]
pub fn IframeView(url: String) -> impl IntoView {
    let state = use_app_state();

    view! {
        <div class="iframe-view">
            <header class="iframe-header">
                <button
                    class="back-button"
                    on:click=move |_| state.logout(&BrowserSessionStore)
                >
                    "← Voltar"
                </button>
                <h1 class="header-title">"Radar de Leads"</h1>
            </header>
            <div class="iframe-container">
                <iframe id="hiddenFrame" src=url title="Dashboard Content"></iframe>
            </div>
        </div>
    }
}
