//! The session preference store
//!
//! A process-wide key-value store for session flags: popup dismissals,
//! newsletter-subscription markers, theme choice, auth material. Callers
//! receive it as an injected trait object, so the backend can be swapped
//! (memory, disk, browser storage bridge) without touching calling code.
//!
//! Lifecycle contract: values are set on user action, read when a session
//! starts, and auth material is cleared on logout.

use std::collections::HashMap;
use std::sync::RwLock;

/// Well-known preference keys
pub mod keys {
    /// UI theme choice ("light"/"dark")
    pub const THEME: &str = "theme";
    /// Bearer token for the agent portal
    pub const AUTH_TOKEN: &str = "authToken";
    /// Newsletter popup was dismissed this browser
    pub const POPUP_DISMISSED: &str = "popupDismissed";
    /// Visitor already subscribed to the newsletter
    pub const NEWSLETTER_SUBSCRIBED: &str = "newsletterSubscribed";
}

/// Key-value preference store with explicit lifecycle operations
pub trait PreferenceStore: Send + Sync {
    /// Returns the stored value for a key, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Stores a value, replacing any previous one
    fn set(&self, key: &str, value: &str);

    /// Removes a single key
    fn remove(&self, key: &str);

    /// Removes everything
    fn clear(&self);
}

/// In-memory preference store
///
/// The default backend for the server-rendered portal and for tests.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(key);
    }

    fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}
