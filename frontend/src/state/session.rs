use std::rc::Rc;

use crate::utils::storage::{default_store, KeyValueStore, MemoryStorage, StorageError};

pub const TOKEN_KEY: &str = "token";
pub const CHAT_SESSION_KEY: &str = "chat_session_id";

/// Typed access to the values that survive a page reload: the auth token and
/// the chat session identifier.
#[derive(Clone)]
pub struct SessionStore {
    store: Rc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn browser() -> Self {
        Self::new(default_store())
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStorage::new()))
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get_item(key) {
            Ok(value) => value.filter(|v| !v.trim().is_empty()),
            Err(err) => {
                log::warn!("{}", err);
                None
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Err(err) = self.store.remove_item(key) {
            log::warn!("{}", err);
        }
    }

    pub fn token(&self) -> Option<String> {
        self.read(TOKEN_KEY)
    }

    pub fn has_token(&self) -> bool {
        self.token().is_some()
    }

    pub fn set_token(&self, token: &str) -> Result<(), StorageError> {
        self.store.set_item(TOKEN_KEY, token)
    }

    pub fn clear_token(&self) {
        self.remove(TOKEN_KEY);
    }

    pub fn chat_session_id(&self) -> Option<String> {
        self.read(CHAT_SESSION_KEY)
    }

    pub fn set_chat_session_id(&self, session_id: &str) -> Result<(), StorageError> {
        self.store.set_item(CHAT_SESSION_KEY, session_id)
    }

    pub fn clear_chat_session_id(&self) {
        self.remove(CHAT_SESSION_KEY);
    }

    /// Drops everything tied to the signed-in user.
    pub fn clear(&self) {
        self.clear_token();
        self.clear_chat_session_id();
    }
}
