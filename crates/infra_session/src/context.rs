//! The per-session context object
//!
//! Theme and auth state were previously ambient singleton providers; here
//! they live on an explicitly-constructed [`SessionContext`] that is
//! passed down to the components that need it. One context exists per
//! session, created at session start and torn down at logout.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use core_kernel::SessionId;

use crate::prefs::{keys, PreferenceStore};

/// UI theme choice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    fn from_pref(value: &str) -> Theme {
        match value {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

/// Dependency-injected session context
///
/// Carries the cross-cutting UI state (theme, auth token) plus a handle
/// to the preference store it hydrates from and writes through to.
pub struct SessionContext {
    id: SessionId,
    theme: Theme,
    auth_token: Option<String>,
    prefs: Arc<dyn PreferenceStore>,
}

impl SessionContext {
    /// Starts a session, hydrating theme and auth state from the store
    pub fn start(prefs: Arc<dyn PreferenceStore>) -> Self {
        let theme = prefs
            .get(keys::THEME)
            .map(|v| Theme::from_pref(&v))
            .unwrap_or_default();
        let auth_token = prefs.get(keys::AUTH_TOKEN);

        let id = SessionId::new_v7();
        info!(session = %id, ?theme, authenticated = auth_token.is_some(), "session started");

        Self {
            id,
            theme,
            auth_token,
            prefs,
        }
    }

    /// Returns the session identifier
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Returns the active theme
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switches the theme and persists the choice
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.prefs.set(keys::THEME, theme.as_str());
    }

    /// Returns true if an auth token is held
    pub fn is_authenticated(&self) -> bool {
        self.auth_token.is_some()
    }

    /// Returns the auth token, if present
    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    /// Records a successful portal login
    pub fn login(&mut self, token: impl Into<String>) {
        let token = token.into();
        self.prefs.set(keys::AUTH_TOKEN, &token);
        self.auth_token = Some(token);
    }

    /// Tears the session down: auth material is cleared from the store
    ///
    /// Display preferences (theme, dismissal flags) survive logout.
    pub fn logout(&mut self) {
        self.auth_token = None;
        self.prefs.remove(keys::AUTH_TOKEN);
        info!(session = %self.id, "session ended");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryPreferenceStore;

    fn store() -> Arc<dyn PreferenceStore> {
        Arc::new(MemoryPreferenceStore::new())
    }

    #[test]
    fn test_start_hydrates_from_store() {
        let prefs = store();
        prefs.set(keys::THEME, "dark");
        prefs.set(keys::AUTH_TOKEN, "tok-1");

        let ctx = SessionContext::start(Arc::clone(&prefs));
        assert_eq!(ctx.theme(), Theme::Dark);
        assert!(ctx.is_authenticated());
        assert_eq!(ctx.auth_token(), Some("tok-1"));
    }

    #[test]
    fn test_set_theme_writes_through() {
        let prefs = store();
        let mut ctx = SessionContext::start(Arc::clone(&prefs));

        ctx.set_theme(Theme::Dark);
        assert_eq!(prefs.get(keys::THEME), Some("dark".to_string()));
    }

    #[test]
    fn test_logout_clears_auth_but_not_display_prefs() {
        let prefs = store();
        prefs.set(keys::POPUP_DISMISSED, "true");

        let mut ctx = SessionContext::start(Arc::clone(&prefs));
        ctx.login("tok-2");
        assert_eq!(prefs.get(keys::AUTH_TOKEN), Some("tok-2".to_string()));

        ctx.logout();
        assert!(!ctx.is_authenticated());
        assert_eq!(prefs.get(keys::AUTH_TOKEN), None);
        assert_eq!(prefs.get(keys::POPUP_DISMISSED), Some("true".to_string()));
    }
}
