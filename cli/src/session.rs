// SPDX-FileCopyrightText: 2026 evman contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Persisted session token, one file under the user config dir:
//!   `$XDG_CONFIG_HOME/evman/session.toml`

use std::error::Error;
use std::path::PathBuf;

use evman_client::SessionToken;

use crate::config::{APP_NAME, get_config_dir};

/// On-disk store for the session token.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct SessionFile {
    token: String,
}

impl SessionStore {
    /// Opens the store at the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the user config dir cannot be determined.
    pub fn open() -> Result<Self, Box<dyn Error>> {
        let path = get_config_dir()?.join(APP_NAME).join("session.toml");
        Ok(Self { path })
    }

    /// Opens the store at an explicit path.
    #[must_use]
    pub const fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Reads the persisted token, if any. No network call.
    ///
    /// An unreadable or unparsable file counts as no session; startup
    /// must never fail on a stale file.
    #[must_use]
    pub fn load(&self) -> Option<SessionToken> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read session file");
                return None;
            }
        };

        match toml::from_str::<SessionFile>(&contents) {
            Ok(file) if !file.token.is_empty() => Some(SessionToken::new(file.token)),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to parse session file");
                None
            }
        }
    }

    /// Persists the token, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, token: &SessionToken) -> Result<(), Box<dyn Error>> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                format!("Failed to create session directory {}: {e}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(&SessionFile {
            token: token.as_str().to_string(),
        })?;
        std::fs::write(&self.path, contents)
            .map_err(|e| format!("Failed to write session to {}: {e}", self.path.display()))?;

        // Owner-only: the file holds a bearer credential.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600)).map_err(
                |e| format!("Failed to set permissions on {}: {e}", self.path.display()),
            )?;
        }

        Ok(())
    }

    /// Removes the persisted token. Succeeds if none exists.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be removed.
    pub fn clear(&self) -> Result<(), Box<dyn Error>> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => {
                Err(format!("Failed to remove session at {}: {e}", self.path.display()).into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> SessionStore {
        SessionStore::at(dir.path().join("evman").join("session.toml"))
    }

    #[test]
    fn session_save_then_load_roundtrips() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(&SessionToken::new("jwt-abc".into())).unwrap();
        let token = store.load().expect("token should be persisted");
        assert_eq!(token.as_str(), "jwt-abc");
    }

    #[test]
    fn session_load_missing_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(store_in(&dir).load().is_none());
    }

    #[test]
    fn session_clear_removes_token_and_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(&SessionToken::new("jwt-abc".into())).unwrap();
        store.clear().unwrap();
        assert!(store.load().is_none());

        // A second clear with nothing persisted still succeeds.
        store.clear().unwrap();
    }

    #[test]
    fn session_garbage_file_counts_as_no_session() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        std::fs::create_dir_all(dir.path().join("evman")).unwrap();
        std::fs::write(dir.path().join("evman/session.toml"), "not = [toml").unwrap();
        assert!(store.load().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn session_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&SessionToken::new("jwt-abc".into())).unwrap();

        let mode = std::fs::metadata(dir.path().join("evman/session.toml"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
