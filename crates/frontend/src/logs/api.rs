use contracts::logs::LogEntry;
use gloo_net::http::Request;

use crate::shared::api_utils::{webhook_url, RequestTimeout, REQUEST_TIMEOUT_MS};

/// Fetch the full access-log set. The caller replaces its in-memory set
/// with the result (sorted most recent first) and re-runs filtering.
pub async fn fetch_logs() -> Result<Vec<LogEntry>, String> {
    let timeout = RequestTimeout::new(REQUEST_TIMEOUT_MS);
    let response = Request::get(&webhook_url("boaterra-getlogs"))
        .abort_signal(timeout.signal().as_ref())
        .send()
        .await
        .map_err(|e| format!("Falha ao buscar os logs do servidor: {}", e))?;

    if !response.ok() {
        return Err(format!("Falha ao buscar os logs do servidor: {}", response.status()));
    }

    response
        .json::<Vec<LogEntry>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
