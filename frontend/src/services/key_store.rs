//! API key storage.
//!
//! The key lives in `window.localStorage` under [`CREDENTIAL_STORAGE_KEY`]:
//! synchronous, durable across reloads, local to the browser profile.
//! Nothing else in the app holds it; uploads read it fresh every time.

use crate::config::CREDENTIAL_STORAGE_KEY;
use crate::{AppError, AppResult};

/// Read/write access to the stored API key.
pub trait KeyStore {
    fn get(&self) -> AppResult<Option<String>>;
    fn set(&self, value: &str) -> AppResult<()>;
    fn clear(&self) -> AppResult<()>;
}

/// [`KeyStore`] backed by the browser's local storage.
#[derive(Clone, Copy, Debug)]
pub struct LocalStorageKeyStore {
    key: &'static str,
}

impl Default for LocalStorageKeyStore {
    fn default() -> Self {
        Self {
            key: CREDENTIAL_STORAGE_KEY,
        }
    }
}

impl LocalStorageKeyStore {
    fn storage(&self) -> AppResult<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| AppError::Storage("no global window".into()))?;
        window
            .local_storage()
            .map_err(|e| AppError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| AppError::Storage("local storage is disabled".into()))
    }
}

impl KeyStore for LocalStorageKeyStore {
    fn get(&self) -> AppResult<Option<String>> {
        self.storage()?
            .get_item(self.key)
            .map_err(|e| AppError::Storage(format!("{:?}", e)))
    }

    fn set(&self, value: &str) -> AppResult<()> {
        self.storage()?
            .set_item(self.key, value)
            .map_err(|e| AppError::Storage(format!("{:?}", e)))
    }

    fn clear(&self) -> AppResult<()> {
        self.storage()?
            .remove_item(self.key)
            .map_err(|e| AppError::Storage(format!("{:?}", e)))
    }
}

/// In-memory [`KeyStore`] for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemoryKeyStore {
    value: std::cell::RefCell<Option<String>>,
}

#[cfg(test)]
impl MemoryKeyStore {
    pub(crate) fn with_key(value: &str) -> Self {
        Self {
            value: std::cell::RefCell::new(Some(value.to_string())),
        }
    }
}

#[cfg(test)]
impl KeyStore for MemoryKeyStore {
    fn get(&self) -> AppResult<Option<String>> {
        Ok(self.value.borrow().clone())
    }

    fn set(&self, value: &str) -> AppResult<()> {
        *self.value.borrow_mut() = Some(value.to_string());
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        *self.value.borrow_mut() = None;
        Ok(())
    }
}

/// The stored key, or [`AppError::MissingCredential`] when there is none.
pub fn require_credential(store: &impl KeyStore) -> AppResult<String> {
    match store.get()? {
        Some(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(AppError::MissingCredential),
    }
}

/// Persist a key typed by the user. Surrounding whitespace is dropped.
pub fn save_credential(store: &impl KeyStore, input: &str) -> AppResult<String> {
    let key = input.trim();
    if key.is_empty() {
        return Err(AppError::EmptyCredential);
    }
    store.set(key)?;
    Ok(key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_reported() {
        let store = MemoryKeyStore::default();
        assert_eq!(require_credential(&store), Err(AppError::MissingCredential));
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        let store = MemoryKeyStore::with_key("   ");
        assert_eq!(require_credential(&store), Err(AppError::MissingCredential));
    }

    #[test]
    fn test_saved_key_is_visible_to_later_reads() {
        let store = MemoryKeyStore::default();
        let saved = save_credential(&store, "  RqgsQ_y6J123 \n").unwrap();
        assert_eq!(saved, "RqgsQ_y6J123");
        assert_eq!(store.get().unwrap().as_deref(), Some("RqgsQ_y6J123"));
        assert_eq!(require_credential(&store).unwrap(), "RqgsQ_y6J123");
    }

    #[test]
    fn test_empty_submission_keeps_previous_key() {
        let store = MemoryKeyStore::with_key("old-key");
        assert_eq!(save_credential(&store, "  "), Err(AppError::EmptyCredential));
        assert_eq!(store.get().unwrap().as_deref(), Some("old-key"));
    }

    #[test]
    fn test_clear_removes_key() {
        let store = MemoryKeyStore::with_key("abc");
        store.clear().unwrap();
        assert_eq!(store.get().unwrap(), None);
    }
}
