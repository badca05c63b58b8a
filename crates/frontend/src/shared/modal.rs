use leptos::prelude::*;

/// Centralized control of the single modal overlay (the admin login modal).
#[derive(Clone, Copy)]
pub struct ModalService {
    is_visible: RwSignal<bool>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            is_visible: RwSignal::new(false),
        }
    }

    pub fn show(&self) {
        self.is_visible.set(true);
    }

    pub fn hide(&self) {
        self.is_visible.set(false);
    }

    pub fn is_open(&self) -> bool {
        self.is_visible.get()
    }
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}

/// Modal overlay. Clicking outside the content (or the ×) closes it; the
/// content itself stops propagation. Stays dismissable while a request is
/// in flight.
#[component]
pub fn Modal(children: ChildrenFn) -> impl IntoView {
    let modal = use_context::<ModalService>().expect("ModalService not provided in context");

    view! {
        {move || {
            if modal.is_visible.get() {
                view! {
                    <div
                        class="modal-overlay"
                        on:click=move |_| modal.hide()
                    >
                        <div
                            class="admin-modal"
                            on:click=|e| e.stop_propagation()
                        >
                            <span class="close-modal" on:click=move |_| modal.hide()>
                                "×"
                            </span>
                            {children()}
                        </div>
                    </div>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }
        }}
    }
}
