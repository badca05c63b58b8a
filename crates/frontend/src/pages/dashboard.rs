use contracts::logs::LogEntry;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::use_app_state;
use crate::logs::api;
use crate::logs::chart::{daily_counts, ChartRenderer};
use crate::logs::filter::{apply, sort_logs, LogFilters};
use crate::session::{BrowserSessionStore, View};
use crate::shared::alert;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::month_input::MonthInput;

/// A log response is applied only while a dashboard view is still active.
/// One arriving after logout must not touch the torn-down view.
fn accepts_log_response(view: &View) -> bool {
    view.is_dashboard()
}

#[component]
pub fn DashboardPage(admin_name: String) -> impl IntoView {
    let state = use_app_state();
    let filters = state.filters;

    let all_logs: RwSignal<Vec<LogEntry>> = RwSignal::new(Vec::new());

    // Entering the dashboard always fetches a fresh log set. The existing
    // filter criteria keep applying to the new data.
    spawn_local(async move {
        match api::fetch_logs().await {
            Ok(mut logs) => {
                if !accepts_log_response(&state.view.get_untracked()) {
                    return;
                }
                sort_logs(&mut logs);
                all_logs.set(logs);
            }
            Err(e) => {
                log::error!("failed to fetch logs: {}", e);
                if accepts_log_response(&state.view.get_untracked()) {
                    alert(&e);
                }
            }
        }
    });

    let filtered = Memo::new(move |_| apply(&all_logs.get(), &filters.get()));

    // The Chart.js handle is a JsValue and not Send; keep it thread-local.
    let renderer = StoredValue::new_local(ChartRenderer::new());
    let canvas_ref: NodeRef<html::Canvas> = NodeRef::new();

    Effect::new(move |_| {
        let counts = daily_counts(&filtered.get());
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        renderer.update_value(|r| {
            if let Err(err) = r.render(&canvas, &counts) {
                log::error!("failed to render chart: {:?}", err);
            }
        });
    });

    on_cleanup(move || {
        renderer.update_value(|r| r.dispose());
    });

    // Editing the text filter clears both date criteria; the two date
    // criteria clear each other (mutual exclusivity).
    let on_name = move |value: String| {
        filters.update(|f| {
            f.name = value;
            f.date.clear();
            f.month.clear();
        });
    };
    let on_date = move |value: String| {
        filters.update(|f| {
            f.date = value;
            f.month.clear();
        });
    };
    let on_month = move |value: String| {
        filters.update(|f| {
            f.month = value;
            f.date.clear();
        });
    };
    let on_clear = move |_| filters.set(LogFilters::default());

    view! {
        <div class="admin-dashboard-container">
            <header class="dashboard-header">
                <h1>"Painel de Logs"</h1>
                <p>"Seja bem-vindo(a), " <span id="admin-name">{admin_name}</span> "!"</p>
                <button
                    class="logout-button"
                    on:click=move |_| state.logout(&BrowserSessionStore)
                >
                    "Sair"
                </button>
            </header>
            <div class="dashboard-filters">
                <div class="filter-group">
                    <input
                        type="text"
                        placeholder="Filtrar por nome ou empresa..."
                        prop:value=move || filters.get().name
                        on:input=move |ev| on_name(event_target_value(&ev))
                    />
                </div>
                <div class="filter-group">
                    <DateInput
                        value=Signal::derive(move || filters.get().date)
                        on_change=on_date
                        title="Filtrar por dia".to_string()
                    />
                </div>
                <div class="filter-group">
                    <MonthInput
                        value=Signal::derive(move || filters.get().month)
                        on_change=on_month
                        title="Filtrar por mês".to_string()
                    />
                </div>
                <button class="ghost-button" on:click=on_clear>
                    "Limpar Filtros"
                </button>
            </div>
            <main class="dashboard-content">
                <div class="chart-container">
                    <canvas node_ref=canvas_ref></canvas>
                </div>
                <div class="table-container">
                    <h2>"Registros de Acesso"</h2>
                    <table class="logs-table">
                        <thead>
                            <tr>
                                <th>"Nome"</th>
                                <th>"Empresa"</th>
                                <th>"Data"</th>
                                <th>"Horário"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let logs = filtered.get();
                                if logs.is_empty() {
                                    view! {
                                        <tr>
                                            <td colspan="4" class="no-results-message">
                                                "Nenhum registro encontrado."
                                            </td>
                                        </tr>
                                    }.into_any()
                                } else {
                                    logs.into_iter()
                                        .map(|log| {
                                            view! {
                                                <tr>
                                                    <td>{log.name}</td>
                                                    <td>{log.company}</td>
                                                    <td>{log.date}</td>
                                                    <td>{log.time}</td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()
                                        .into_any()
                                }
                            }}
                        </tbody>
                    </table>
                </div>
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crate::session::MemorySessionStore;

    #[test]
    fn log_response_is_ignored_after_logout() {
        let store = MemorySessionStore::new();
        let state = AppState::restore(&store);

        state.enter_dashboard(&store, "Carla".into());
        assert!(accepts_log_response(&state.view.get_untracked()));

        // The fetch was issued from the dashboard, but the user logged out
        // before the response arrived.
        state.logout(&store);
        assert!(!accepts_log_response(&state.view.get_untracked()));
    }

    #[test]
    fn log_response_is_ignored_outside_the_dashboard() {
        assert!(accepts_log_response(&View::Dashboard { admin_name: "Carla".into() }));
        assert!(!accepts_log_response(&View::Login));
        assert!(!accepts_log_response(&View::Iframe { url: "https://painel".into() }));
    }
}
