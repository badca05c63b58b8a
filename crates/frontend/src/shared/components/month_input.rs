use leptos::prelude::*;

/// MonthInput component with native month picker; the value stays yyyy-mm
#[component]
pub fn MonthInput(
    /// The month value in yyyy-mm format
    #[prop(into)]
    value: Signal<String>,
    /// Callback when the month changes (receives yyyy-mm format)
    on_change: impl Fn(String) + 'static,
    #[prop(optional, into)] title: Option<String>,
) -> impl IntoView {
    view! {
        <input
            type="month"
            title=title.unwrap_or_default()
            prop:value=value
            on:input=move |ev| {
                on_change(event_target_value(&ev));
            }
        />
    }
}
