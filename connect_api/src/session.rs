//! Client-side session storage.
//!
//! The logged-in identity and bearer token live in a TOML file under
//! `~/.connect/`. Screens never read it directly; they go through the
//! injected [`SessionStore`] capability so tests stay deterministic.
//! Obtaining a token is the backend's auth flow and out of scope here;
//! `connect session login` just persists one.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Ambient credential lookup, read by every screen independently.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait SessionStore: Send + Sync {
    /// Username of the logged-in user, if any.
    fn current_username(&self) -> Option<String>;

    /// Bearer token for API requests, if any.
    fn token(&self) -> Option<String>;
}

/// Persisted session file contents.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Session {
    /// Load from disk, or return an empty session if the file doesn't exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// [`SessionStore`] over the session file loaded at startup.
pub struct FileSession(Session);

impl FileSession {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        Ok(Self(Session::load(path)?))
    }
}

impl<T: SessionStore + ?Sized> SessionStore for std::sync::Arc<T> {
    fn current_username(&self) -> Option<String> {
        (**self).current_username()
    }

    fn token(&self) -> Option<String> {
        (**self).token()
    }
}

impl SessionStore for FileSession {
    fn current_username(&self) -> Option<String> {
        self.0.username.clone()
    }

    fn token(&self) -> Option<String> {
        self.0.token.clone()
    }
}

/// Directory for all persisted client state: `~/.connect`.
pub fn state_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".connect")
}
