//! Access-token persistence.
//!
//! The operator token issued at login lives in `localStorage` so a page
//! reload keeps the session. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR paths safely
//! no-op so server rendering never sees a token.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "closet_admin_token";

/// Read the stored access token, if any.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(token)) = storage.get_item(STORAGE_KEY) {
                if !token.is_empty() {
                    return Some(token);
                }
            }
        }
        None
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist a freshly issued access token.
pub fn write_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Drop the stored token, ending the persisted session.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}
