//! # Browser localStorage store for web persistence
//!
//! [`LocalStore`] is the [`KvStore`] used on the **web platform**. It reads and
//! writes `window.localStorage` through `web-sys`, so the session survives page
//! reloads and is shared by every tab on the same origin.
//!
//! ## Error handling
//!
//! `localStorage` can be missing (privacy modes) or full (quota). Reads degrade
//! to `None` and failed writes are logged; the authoritative data always lives
//! on the backend and can be fetched again.

use web_sys::Storage;

use crate::session::KvStore;

/// `window.localStorage`-backed KvStore for the web platform.
///
/// Zero-size and `Clone`: the storage handle is looked up on every call, which
/// is cheap and avoids holding a JS object across await points.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KvStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!(key, "localStorage unavailable");
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!(key, "localStorage rejected write");
        }
    }

    fn remove(&self, key: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!(key, "localStorage unavailable");
            return;
        };
        if storage.remove_item(key).is_err() {
            tracing::warn!(key, "localStorage rejected removal");
        }
    }
}
