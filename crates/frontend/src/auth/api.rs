use contracts::auth::{AdminLoginResponse, LoginRequest, UserLoginResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::{webhook_url, RequestTimeout, REQUEST_TIMEOUT_MS};

/// Login as a regular user; success carries the dashboard link to embed.
pub async fn login_user(email: String, password: String) -> Result<UserLoginResponse, String> {
    let request = LoginRequest { email, password };

    let timeout = RequestTimeout::new(REQUEST_TIMEOUT_MS);
    let response = Request::post(&webhook_url("login-dash-vendedores-grupoboaterra"))
        .abort_signal(timeout.signal().as_ref())
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Login failed: {}", response.status()));
    }

    let data = response
        .json::<UserLoginResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    if data.link.is_empty() {
        return Err("o link não foi retornado pelo servidor".to_string());
    }
    Ok(data)
}

/// Login as an administrator. Non-2xx means invalid credentials; the caller
/// additionally requires `approved` and a non-empty `name`.
pub async fn login_admin(email: String, password: String) -> Result<AdminLoginResponse, String> {
    let request = LoginRequest { email, password };

    let timeout = RequestTimeout::new(REQUEST_TIMEOUT_MS);
    let response = Request::post(&webhook_url("acesso-adm-boaterra"))
        .abort_signal(timeout.signal().as_ref())
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err("Credenciais de administrador inválidas.".to_string());
    }

    response
        .json::<AdminLoginResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
