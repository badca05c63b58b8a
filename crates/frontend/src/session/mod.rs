mod store;

pub use store::{BrowserSessionStore, MemorySessionStore, SessionStore};

/// The single active top-level UI mode, with the payload each mode needs.
///
/// `Iframe` without a URL and `Dashboard` without an admin name cannot be
/// represented; a stored snapshot missing its payload restores as `None`
/// and the app falls back to `Login`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Login,
    Dashboard {
        admin_name: String,
    },
    Iframe {
        url: String,
    },
}

impl View {
    pub fn is_dashboard(&self) -> bool {
        matches!(self, View::Dashboard { .. })
    }
}
