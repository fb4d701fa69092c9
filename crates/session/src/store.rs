//! Tab-scoped session persistence
//!
//! The token and its expiry live in two string slots (`token` and
//! `token_expiry` by default). In the browser these are `sessionStorage`
//! entries, which die with the tab: closing the tab ends the session even if
//! the token has not expired yet.

use crate::config::SessionConfig;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// What a store hands back: the raw token and its recorded expiry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSession {
    pub token: String,
    pub expires_at_millis: i64,
}

impl StoredSession {
    /// Rebuild from raw slot contents; `None` unless both slots are usable
    fn from_slots(token: Option<String>, expiry: Option<String>) -> Option<Self> {
        let token = token.filter(|t| !t.is_empty())?;
        let expires_at_millis = expiry?.trim().parse().ok()?;
        Some(Self {
            token,
            expires_at_millis,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("session storage is not available")]
    Unavailable,

    #[error("failed to write {key}: {message}")]
    Write { key: String, message: String },
}

pub trait SessionStore {
    /// Write token and expiry together; on error neither is left behind
    fn save(&self, token: &str, expires_at_millis: i64) -> Result<(), StoreError>;

    /// `None` if either slot is missing or unreadable
    fn load(&self) -> Option<StoredSession>;

    /// Remove both slots
    fn clear(&self);
}

/// In-memory store with the same two-slot layout as the browser store
///
/// Clones share their slots.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    slots: Rc<RefCell<HashMap<String, String>>>,
    config: Rc<SessionConfig>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            slots: Rc::default(),
            config: Rc::new(config),
        }
    }

    /// Raw slot access, for asserting on the persisted layout
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    /// Overwrite a single slot, bypassing `save`
    pub fn set_raw(&self, key: &str, value: &str) {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, token: &str, expires_at_millis: i64) -> Result<(), StoreError> {
        let mut slots = self.slots.borrow_mut();
        slots.insert(self.config.token_key.clone(), token.to_string());
        slots.insert(
            self.config.expiry_key.clone(),
            expires_at_millis.to_string(),
        );
        Ok(())
    }

    fn load(&self) -> Option<StoredSession> {
        let slots = self.slots.borrow();
        StoredSession::from_slots(
            slots.get(&self.config.token_key).cloned(),
            slots.get(&self.config.expiry_key).cloned(),
        )
    }

    fn clear(&self) {
        let mut slots = self.slots.borrow_mut();
        slots.remove(&self.config.token_key);
        slots.remove(&self.config.expiry_key);
    }
}

/// `window.sessionStorage` backed store
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Default)]
pub struct BrowserSessionStore {
    config: Rc<SessionConfig>,
}

#[cfg(target_arch = "wasm32")]
impl BrowserSessionStore {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config: Rc::new(config),
        }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.session_storage().ok().flatten())
    }

    fn write(storage: &web_sys::Storage, key: &str, value: &str) -> Result<(), StoreError> {
        storage.set_item(key, value).map_err(|e| StoreError::Write {
            key: key.to_string(),
            message: format!("{e:?}"),
        })
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStore for BrowserSessionStore {
    fn save(&self, token: &str, expires_at_millis: i64) -> Result<(), StoreError> {
        let storage = Self::storage().ok_or(StoreError::Unavailable)?;

        Self::write(&storage, &self.config.token_key, token)?;
        if let Err(err) = Self::write(
            &storage,
            &self.config.expiry_key,
            &expires_at_millis.to_string(),
        ) {
            // Never leave a token without its expiry
            let _ = storage.remove_item(&self.config.token_key);
            return Err(err);
        }
        Ok(())
    }

    fn load(&self) -> Option<StoredSession> {
        let storage = Self::storage()?;
        StoredSession::from_slots(
            storage.get_item(&self.config.token_key).ok().flatten(),
            storage.get_item(&self.config.expiry_key).ok().flatten(),
        )
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(&self.config.token_key);
            let _ = storage.remove_item(&self.config.expiry_key);
        }
    }
}
