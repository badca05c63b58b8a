use leptos::prelude::*;

/// DateInput component with native date picker
/// Browser displays dates in locale format; the value stays yyyy-mm-dd
#[component]
pub fn DateInput(
    /// The date value in yyyy-mm-dd format
    #[prop(into)]
    value: Signal<String>,
    /// Callback when the date changes (receives yyyy-mm-dd format)
    on_change: impl Fn(String) + 'static,
    #[prop(optional, into)] title: Option<String>,
) -> impl IntoView {
    view! {
        <input
            type="date"
            title=title.unwrap_or_default()
            prop:value=value
            on:input=move |ev| {
                on_change(event_target_value(&ev));
            }
        />
    }
}
