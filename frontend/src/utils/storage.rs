use std::cell::RefCell;

use wasm_bindgen::JsCast;
use web_sys::{Storage, Window};

use crate::api::UserProfile;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
const COOKIE_MAX_AGE_SECS: u32 = 60 * 60 * 24;

/// Browser window; always absent off wasm so host builds never touch JS glue.
pub fn window() -> Result<Window, String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().ok_or_else(|| "No window object".to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Err("No window object".to_string())
    }
}

/// Full-page navigation; a no-op off the browser.
pub fn set_location(path: &str) {
    if let Ok(w) = window() {
        let _ = w.location().set_href(path);
    }
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

/// Client-held credentials: the bearer token and the cached user profile.
pub trait SessionStore {
    fn token(&self) -> Option<String>;
    fn set_token(&self, token: &str);
    fn user(&self) -> Option<UserProfile>;
    fn set_user(&self, user: Option<&UserProfile>);
    fn clear(&self);
}

/// `localStorage` backed store; the token is mirrored into a cookie so a
/// reload can recover it even when storage was wiped.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStore;

impl BrowserSessionStore {
    fn html_document() -> Option<web_sys::HtmlDocument> {
        window()
            .ok()?
            .document()?
            .dyn_into::<web_sys::HtmlDocument>()
            .ok()
    }

    fn cookie_token() -> Option<String> {
        let cookies = Self::html_document()?.cookie().ok()?;
        token_from_cookie_header(&cookies)
    }

    fn write_cookie(value: &str) {
        if let Some(doc) = Self::html_document() {
            let _ = doc.set_cookie(value);
        }
    }
}

impl SessionStore for BrowserSessionStore {
    fn token(&self) -> Option<String> {
        let stored = local_storage()
            .ok()
            .and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
            .filter(|t| !t.is_empty());
        stored.or_else(Self::cookie_token)
    }

    fn set_token(&self, token: &str) {
        match local_storage() {
            Ok(storage) => {
                if storage.set_item(TOKEN_KEY, token).is_err() {
                    log::warn!("failed to persist token to localStorage");
                }
            }
            Err(err) => log::warn!("token not persisted: {err}"),
        }
        Self::write_cookie(&format!(
            "{TOKEN_KEY}={token}; path=/; max-age={COOKIE_MAX_AGE_SECS}; secure; samesite=strict"
        ));
    }

    fn user(&self) -> Option<UserProfile> {
        let raw = local_storage().ok()?.get_item(USER_KEY).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                log::error!("stored user is not valid JSON: {err}");
                None
            }
        }
    }

    fn set_user(&self, user: Option<&UserProfile>) {
        let Ok(storage) = local_storage() else {
            return;
        };
        match user.map(serde_json::to_string) {
            Some(Ok(json)) => {
                let _ = storage.set_item(USER_KEY, &json);
            }
            Some(Err(err)) => log::error!("failed to serialize user: {err}"),
            None => {
                let _ = storage.remove_item(USER_KEY);
            }
        }
    }

    fn clear(&self) {
        if let Ok(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
        Self::write_cookie(&format!(
            "{TOKEN_KEY}=; path=/; expires=Thu, 01 Jan 1970 00:00:01 GMT;"
        ));
    }
}

/// In-memory store used off the browser (host tests, SSR).
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: RefCell<Option<String>>,
    user: RefCell<Option<UserProfile>>,
}

impl MemorySessionStore {
    pub fn with_session(token: &str, user: Option<UserProfile>) -> Self {
        Self {
            token: RefCell::new(Some(token.to_string())),
            user: RefCell::new(user),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set_token(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn user(&self) -> Option<UserProfile> {
        self.user.borrow().clone()
    }

    fn set_user(&self, user: Option<&UserProfile>) {
        *self.user.borrow_mut() = user.cloned();
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
        self.user.borrow_mut().take();
    }
}

pub fn token_from_cookie_header(header: &str) -> Option<String> {
    header
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix("token="))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserProfile {
        UserProfile {
            employee_id: "EMP-001".into(),
            name: "Budi Santoso".into(),
            addres: "Jl. Merdeka 1".into(),
            departement: "IT".into(),
            max_clock_in_time: Some("08:00".into()),
            max_clock_out_time: Some("17:00".into()),
        }
    }

    #[test]
    fn memory_store_round_trips_and_clears() {
        let store = MemorySessionStore::default();
        assert!(store.token().is_none());
        store.set_token("abc");
        store.set_user(Some(&user()));
        assert_eq!(store.token().as_deref(), Some("abc"));
        assert_eq!(store.user().map(|u| u.employee_id), Some("EMP-001".into()));

        store.set_user(None);
        assert!(store.user().is_none());

        store.set_user(Some(&user()));
        store.clear();
        assert!(store.token().is_none());
        assert!(store.user().is_none());
    }

    #[test]
    fn cookie_header_lookup_finds_token() {
        assert_eq!(
            token_from_cookie_header("theme=dark; token=abc.def.ghi; other=1"),
            Some("abc.def.ghi".into())
        );
        assert_eq!(token_from_cookie_header("token="), None);
        assert_eq!(token_from_cookie_header("mytoken=x"), None);
        assert_eq!(token_from_cookie_header(""), None);
    }

    #[test]
    fn browser_store_is_empty_without_window() {
        let store = BrowserSessionStore;
        assert!(store.token().is_none());
        assert!(store.user().is_none());
        store.clear();
    }
}
