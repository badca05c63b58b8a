use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::use_app_state;
use crate::auth::api;
use crate::session::{BrowserSessionStore, View};
use crate::shared::alert;
use crate::shared::icons::icon;
use crate::shared::modal::{Modal, ModalService};

#[component]
pub fn LoginPage() -> impl IntoView {
    let state = use_app_state();
    let modal = use_context::<ModalService>().expect("ModalService not provided in context");

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (password_visible, set_password_visible) = signal(false);
    // Single-flight guard for the user form only; the admin modal has its own.
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let password_val = password.get();

        set_is_loading.set(true);

        spawn_local(async move {
            match api::login_user(email_val, password_val).await {
                Ok(response) => {
                    set_is_loading.set(false);
                    if state.view.get_untracked() == View::Login {
                        state.enter_iframe(&BrowserSessionStore, response.link);
                    }
                }
                Err(e) => {
                    log::error!("user login failed: {}", e);
                    alert("Erro ao tentar fazer login. Tente novamente.");
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="container">
                <div class="login-card">
                    <div class="login-header">
                        <h1>"Radar de Leads"</h1>
                    </div>
                    <form class="login-form" on:submit=on_submit>
                        <div class="input-group">
                            <div class="input-container">
                                <input
                                    type="email"
                                    id="email"
                                    required
                                    placeholder=" "
                                    prop:value=move || email.get()
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                />
                                <label for="email">"Digite seu e-mail"</label>
                            </div>
                        </div>
                        <div class="input-group">
                            <div class="input-container">
                                <input
                                    type=move || if password_visible.get() { "text" } else { "password" }
                                    id="password"
                                    required
                                    placeholder=" "
                                    prop:value=move || password.get()
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                />
                                <label for="password">"Digite sua senha"</label>
                                <span
                                    class="toggle-password-visibility"
                                    on:click=move |_| set_password_visible.update(|v| *v = !*v)
                                >
                                    {move || {
                                        if password_visible.get() {
                                            icon("eye-closed")
                                        } else {
                                            icon("eye-open")
                                        }
                                    }}
                                </span>
                            </div>
                        </div>
                        <button
                            type="submit"
                            class="login-btn"
                            disabled=move || is_loading.get()
                        >
                            {move || if is_loading.get() { "Entrando..." } else { "Entrar" }}
                        </button>
                        <div class="divider">
                            <span class="divider-line"></span>
                            <span class="divider-text">"ou"</span>
                            <span class="divider-line"></span>
                        </div>
                        // Visual affordance only; sign-up has no behavior.
                        <button type="button" class="ghost-button signup-btn">
                            "Criar nova conta"
                        </button>
                        <button
                            type="button"
                            class="admin-link"
                            on:click=move |_| modal.show()
                        >
                            "Acesso Administrativo"
                        </button>
                    </form>
                </div>
            </div>
            <Modal>
                <AdminLoginForm />
            </Modal>
        </div>
    }
}

/// Admin login form rendered inside the modal overlay. A failed login keeps
/// the modal open (view stays Login-level); nothing is written to the
/// session store until the response is approved and carries a name.
#[component]
fn AdminLoginForm() -> impl IntoView {
    let state = use_app_state();
    let modal = use_context::<ModalService>().expect("ModalService not provided in context");

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (password_visible, set_password_visible) = signal(false);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let password_val = password.get();

        set_is_loading.set(true);

        spawn_local(async move {
            match api::login_admin(email_val, password_val).await {
                Ok(response) if response.approved_name().is_some() => {
                    set_is_loading.set(false);
                    if state.view.get_untracked() == View::Login {
                        modal.hide();
                        state.enter_dashboard(&BrowserSessionStore, response.name);
                    }
                }
                Ok(_) => {
                    alert("Resposta inesperada do servidor.");
                    set_is_loading.set(false);
                }
                Err(e) => {
                    log::error!("admin login failed: {}", e);
                    alert(&e);
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <h2>"Acesso Administrativo"</h2>
        <form id="admin-login-form" on:submit=on_submit>
            <div class="input-group">
                <div class="input-container">
                    <input
                        type="email"
                        id="admin-email"
                        required
                        placeholder=" "
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <label for="admin-email">"E-mail do Administrador"</label>
                </div>
            </div>
            <div class="input-group">
                <div class="input-container">
                    <input
                        type=move || if password_visible.get() { "text" } else { "password" }
                        id="admin-password"
                        required
                        placeholder=" "
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    <label for="admin-password">"Senha do Administrador"</label>
                    <span
                        class="toggle-password-visibility"
                        on:click=move |_| set_password_visible.update(|v| *v = !*v)
                    >
                        {move || {
                            if password_visible.get() {
                                icon("eye-closed")
                            } else {
                                icon("eye-open")
                            }
                        }}
                    </span>
                </div>
            </div>
            <button type="submit" disabled=move || is_loading.get()>
                {move || if is_loading.get() { "Validando..." } else { "Entrar" }}
            </button>
        </form>
    }
}
