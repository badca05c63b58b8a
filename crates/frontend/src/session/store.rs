use std::cell::RefCell;
use std::collections::HashMap;

use web_sys::window;

use super::View;

const VIEW_KEY: &str = "view";
const IFRAME_URL_KEY: &str = "iframeUrl";
const ADMIN_NAME_KEY: &str = "adminName";

/// Persists the minimal session snapshot (view + its payload) so a reload
/// within the same browsing session restores the view without
/// re-authenticating.
pub trait SessionStore {
    fn save(&self, view: &View);
    /// Last saved view, or `None` if nothing usable is stored. A snapshot
    /// whose required payload is missing or empty counts as nothing stored;
    /// there is no partial restore.
    fn restore(&self) -> Option<View>;
    fn clear(&self);
}

fn restore_from(view: Option<String>, url: Option<String>, name: Option<String>) -> Option<View> {
    match view.as_deref() {
        Some("iframe") => {
            let url = url.filter(|u| !u.is_empty())?;
            Some(View::Iframe { url })
        }
        Some("dashboard") => {
            let admin_name = name.filter(|n| !n.is_empty())?;
            Some(View::Dashboard { admin_name })
        }
        _ => None,
    }
}

/// `sessionStorage`-backed store used in the browser.
#[derive(Clone, Copy, Default)]
pub struct BrowserSessionStore;

fn get_session_storage() -> Option<web_sys::Storage> {
    window()?.session_storage().ok()?
}

impl SessionStore for BrowserSessionStore {
    fn save(&self, view: &View) {
        let Some(storage) = get_session_storage() else {
            return;
        };
        match view {
            View::Login => {
                let _ = storage.remove_item(VIEW_KEY);
                let _ = storage.remove_item(IFRAME_URL_KEY);
                let _ = storage.remove_item(ADMIN_NAME_KEY);
            }
            View::Iframe { url } => {
                let _ = storage.set_item(VIEW_KEY, "iframe");
                let _ = storage.set_item(IFRAME_URL_KEY, url);
            }
            View::Dashboard { admin_name } => {
                let _ = storage.set_item(VIEW_KEY, "dashboard");
                let _ = storage.set_item(ADMIN_NAME_KEY, admin_name);
            }
        }
    }

    fn restore(&self) -> Option<View> {
        let storage = get_session_storage()?;
        let get = |key: &str| storage.get_item(key).ok().flatten();
        restore_from(get(VIEW_KEY), get(IFRAME_URL_KEY), get(ADMIN_NAME_KEY))
    }

    fn clear(&self) {
        if let Some(storage) = get_session_storage() {
            let _ = storage.remove_item(VIEW_KEY);
            let _ = storage.remove_item(IFRAME_URL_KEY);
            let _ = storage.remove_item(ADMIN_NAME_KEY);
        }
    }
}

/// In-memory store for tests.
#[derive(Default)]
pub struct MemorySessionStore {
    items: RefCell<HashMap<&'static str, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed raw fields to simulate a snapshot left by a previous session,
    /// including inconsistent ones.
    pub fn seed(&self, view: Option<&str>, iframe_url: Option<&str>, admin_name: Option<&str>) {
        let mut items = self.items.borrow_mut();
        items.clear();
        if let Some(v) = view {
            items.insert(VIEW_KEY, v.to_string());
        }
        if let Some(u) = iframe_url {
            items.insert(IFRAME_URL_KEY, u.to_string());
        }
        if let Some(n) = admin_name {
            items.insert(ADMIN_NAME_KEY, n.to_string());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, view: &View) {
        let mut items = self.items.borrow_mut();
        match view {
            View::Login => {
                items.clear();
            }
            View::Iframe { url } => {
                items.insert(VIEW_KEY, "iframe".to_string());
                items.insert(IFRAME_URL_KEY, url.clone());
            }
            View::Dashboard { admin_name } => {
                items.insert(VIEW_KEY, "dashboard".to_string());
                items.insert(ADMIN_NAME_KEY, admin_name.clone());
            }
        }
    }

    fn restore(&self) -> Option<View> {
        let items = self.items.borrow();
        restore_from(
            items.get(VIEW_KEY).cloned(),
            items.get(IFRAME_URL_KEY).cloned(),
            items.get(ADMIN_NAME_KEY).cloned(),
        )
    }

    fn clear(&self) {
        self.items.borrow_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_each_view() {
        let store = MemorySessionStore::new();

        store.save(&View::Iframe { url: "https://painel".into() });
        assert_eq!(
            store.restore(),
            Some(View::Iframe { url: "https://painel".into() })
        );

        store.save(&View::Dashboard { admin_name: "Carla".into() });
        assert_eq!(
            store.restore(),
            Some(View::Dashboard { admin_name: "Carla".into() })
        );

        store.save(&View::Login);
        assert_eq!(store.restore(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn iframe_snapshot_without_url_restores_nothing() {
        let store = MemorySessionStore::new();
        store.seed(Some("iframe"), None, Some("Carla"));
        assert_eq!(store.restore(), None);

        store.seed(Some("iframe"), Some(""), None);
        assert_eq!(store.restore(), None);
    }

    #[test]
    fn dashboard_snapshot_without_name_restores_nothing() {
        let store = MemorySessionStore::new();
        store.seed(Some("dashboard"), Some("https://sobra"), None);
        assert_eq!(store.restore(), None);
    }

    #[test]
    fn unknown_view_identifier_restores_nothing() {
        let store = MemorySessionStore::new();
        store.seed(Some("painel"), Some("https://x"), Some("Carla"));
        assert_eq!(store.restore(), None);
    }

    #[test]
    fn clear_removes_every_field() {
        let store = MemorySessionStore::new();
        store.save(&View::Dashboard { admin_name: "Carla".into() });
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.restore(), None);
    }
}
