//! Locally cached avatar overrides, keyed by username.
//!
//! The directory screen prefers a locally stored avatar reference over the
//! server-provided one.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait AvatarCache: Send + Sync {
    /// Local avatar override for `username`, if one was stored.
    fn cached_avatar(&self, username: &str) -> Option<String>;
}

/// Avatar override map persisted as TOML (`~/.connect/avatars.toml`).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AvatarOverrides {
    #[serde(default)]
    overrides: BTreeMap<String, String>,
}

impl AvatarOverrides {
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

    pub fn set(&mut self, username: impl Into<String>, image: impl Into<String>) {
        self.overrides.insert(username.into(), image.into());
    }

    pub fn remove(&mut self, username: &str) -> Option<String> {
        self.overrides.remove(username)
    }
}

impl AvatarCache for AvatarOverrides {
    fn cached_avatar(&self, username: &str) -> Option<String> {
        self.overrides.get(username).cloned()
    }
}
