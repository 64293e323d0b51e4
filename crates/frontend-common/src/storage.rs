//! Persisted mirror of the signed-in user.
//!
//! The profile returned by the OAuth backend is mirrored into localStorage
//! under a single fixed key so it survives reloads and propagates to other
//! tabs of the same origin. On non-wasm targets the mirror is backed by an
//! in-memory map, which keeps the session logic testable on the host.

use crate::config::SessionConfig;
use crate::session::UserProfile;

#[cfg(target_arch = "wasm32")]
use gloo::storage::{LocalStorage, Storage};

#[cfg(not(target_arch = "wasm32"))]
use std::{cell::RefCell, collections::HashMap};

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
}

#[cfg(target_arch = "wasm32")]
fn read_raw(key: &str) -> Option<String> {
    LocalStorage::raw().get_item(key).ok().flatten()
}

#[cfg(target_arch = "wasm32")]
fn write_raw(key: &str, value: &str) {
    if let Err(err) = LocalStorage::raw().set_item(key, value) {
        tracing::warn!(?err, key, "failed to write to localStorage");
    }
}

#[cfg(target_arch = "wasm32")]
fn remove_raw(key: &str) {
    let _ = LocalStorage::raw().remove_item(key);
}

#[cfg(not(target_arch = "wasm32"))]
fn read_raw(key: &str) -> Option<String> {
    STORE.with(|store| store.borrow().get(key).cloned())
}

#[cfg(not(target_arch = "wasm32"))]
fn write_raw(key: &str, value: &str) {
    STORE.with(|store| {
        store.borrow_mut().insert(key.to_owned(), value.to_owned());
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn remove_raw(key: &str) {
    STORE.with(|store| {
        store.borrow_mut().remove(key);
    });
}

/// Read the mirrored user record, if any.
///
/// A present but unparseable value is treated as absent; the next successful
/// profile load overwrites it.
pub fn load_user() -> Option<UserProfile> {
    let raw = read_raw(SessionConfig::USER_STORAGE_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(user) => Some(user),
        Err(err) => {
            tracing::warn!(%err, "mirrored user record did not parse as JSON");
            None
        }
    }
}

/// Overwrite the mirrored user record.
pub fn store_user(user: &UserProfile) {
    write_raw(SessionConfig::USER_STORAGE_KEY, &user.to_string());
}

/// Remove the mirrored user record.
pub fn clear_user() {
    remove_raw(SessionConfig::USER_STORAGE_KEY);
}

/// Raw serialized form of the mirror, as another tab would see it.
pub fn raw_user() -> Option<String> {
    read_raw(SessionConfig::USER_STORAGE_KEY)
}

/// Whether a `storage` event concerns the user mirror.
///
/// A `None` key means `storage.clear()` fired, which removes the mirror along
/// with everything else, so it must sync as well. Events for unrelated keys
/// are ignored.
pub fn is_user_key_change(key: Option<&str>) -> bool {
    key.is_none() || key == Some(SessionConfig::USER_STORAGE_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn store_then_load_round_trips() {
        let user = json!({"id": "u1", "name": "Ann"});
        store_user(&user);
        assert_eq!(load_user(), Some(user));
    }

    #[test]
    fn clear_removes_the_mirror() {
        store_user(&json!({"id": "u1"}));
        clear_user();
        assert_eq!(load_user(), None);
        assert_eq!(raw_user(), None);
    }

    #[test]
    fn unparseable_mirror_reads_as_absent() {
        write_raw(SessionConfig::USER_STORAGE_KEY, "not json");
        assert_eq!(load_user(), None);
    }

    #[test]
    fn key_filter_passes_user_key_and_clear_events() {
        assert!(is_user_key_change(Some("user")));
        assert!(is_user_key_change(None));
    }

    #[test]
    fn key_filter_ignores_unrelated_keys() {
        assert!(!is_user_key_change(Some("theme")));
        assert!(!is_user_key_change(Some("user_prefs")));
    }
}
