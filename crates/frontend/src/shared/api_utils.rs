//! Webhook endpoints and the per-request abort timeout.

use gloo_timers::callback::Timeout;
use web_sys::{AbortController, AbortSignal};

const WEBHOOK_BASE: &str = "https://webhook.triad3.io/webhook";

/// Caller-side timeout for every webhook exchange. Expiry surfaces as an
/// ordinary recoverable transport error.
pub const REQUEST_TIMEOUT_MS: u32 = 20_000;

pub fn webhook_url(path: &str) -> String {
    format!("{}/{}", WEBHOOK_BASE, path)
}

/// Aborts a fetch if it outlives the timeout. Hold it across the `await`;
/// dropping it (response arrived) cancels the timer.
pub struct RequestTimeout {
    controller: Option<AbortController>,
    _timeout: Option<Timeout>,
}

impl RequestTimeout {
    pub fn new(ms: u32) -> Self {
        let controller = AbortController::new().ok();
        let timeout = controller.clone().map(|c| {
            Timeout::new(ms, move || c.abort())
        });
        Self {
            controller,
            _timeout: timeout,
        }
    }

    pub fn signal(&self) -> Option<AbortSignal> {
        self.controller.as_ref().map(|c| c.signal())
    }
}
