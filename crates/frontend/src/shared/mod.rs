pub mod api_utils;
pub mod components;
pub mod icons;
pub mod modal;

/// Blocking alert, the project-wide surface for recoverable errors.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
