use serde::{Deserialize, Serialize};

/// POST body for both the user and the admin login webhooks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful user login: the dashboard URL to embed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserLoginResponse {
    #[serde(rename = "Link")]
    pub link: String,
}

/// Admin login verdict. `approved` must be true and `name` non-empty
/// for the login to count as a success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminLoginResponse {
    #[serde(rename = "resposta")]
    pub approved: bool,
    #[serde(rename = "nome", default)]
    pub name: String,
}

impl AdminLoginResponse {
    /// The admin name, but only when the verdict counts as a success.
    /// Anything else (denied, or approved without a name) is treated as
    /// invalid credentials by the caller.
    pub fn approved_name(&self) -> Option<&str> {
        (self.approved && !self.name.is_empty()).then_some(self.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_response_requires_link_field() {
        let ok: UserLoginResponse = serde_json::from_str(r#"{"Link":"https://x"}"#).unwrap();
        assert_eq!(ok.link, "https://x");

        // Missing `Link` is a malformed response, not a silent default.
        assert!(serde_json::from_str::<UserLoginResponse>("{}").is_err());
    }

    #[test]
    fn admin_response_uses_wire_names() {
        let resp: AdminLoginResponse =
            serde_json::from_str(r#"{"resposta":true,"nome":"Carla"}"#).unwrap();
        assert!(resp.approved);
        assert_eq!(resp.name, "Carla");

        let denied: AdminLoginResponse = serde_json::from_str(r#"{"resposta":false}"#).unwrap();
        assert!(!denied.approved);
        assert!(denied.name.is_empty());
    }

    #[test]
    fn approved_name_requires_both_verdict_and_name() {
        let ok = AdminLoginResponse { approved: true, name: "Carla".into() };
        assert_eq!(ok.approved_name(), Some("Carla"));

        // Denied verdict never yields a name, even if one is present.
        let denied = AdminLoginResponse { approved: false, name: "X".into() };
        assert_eq!(denied.approved_name(), None);

        let nameless = AdminLoginResponse { approved: true, name: String::new() };
        assert_eq!(nameless.approved_name(), None);
    }
}
