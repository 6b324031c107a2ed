//! Client session persistence
//!
//! Holds the bearer token and user profile between runs in a JSON file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Profile returned by the account service at login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// An authenticated client session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: SessionUser,
}

/// File-backed session store
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    current: Option<AuthSession>,
}

impl SessionStore {
    /// Open the store at `path` and rehydrate any saved session
    ///
    /// A missing file means signed out. A file that cannot be parsed is
    /// treated the same way and left for the next `establish` to overwrite.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if !path.exists() {
            return Ok(Self {
                path,
                current: None,
            });
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read session from {:?}", path))?;

        let current = match serde_json::from_str::<AuthSession>(&content) {
            Ok(session) => Some(session),
            Err(e) => {
                debug!("Ignoring unreadable session file {:?}: {}", path, e);
                None
            }
        };

        Ok(Self { path, current })
    }

    /// Persist a freshly obtained session
    pub fn establish(&mut self, session: AuthSession) -> Result<&AuthSession> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create session directory {:?}", parent)
                })?;
            }
        }

        let content =
            serde_json::to_string_pretty(&session).context("Failed to serialize session")?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write session to {:?}", self.path))?;

        Ok(self.current.insert(session))
    }

    /// Drop the session and remove the file
    pub fn logout(&mut self) -> Result<()> {
        self.current = None;
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove session file {:?}", self.path))?;
        }
        Ok(())
    }

    pub fn current(&self) -> Option<&AuthSession> {
        self.current.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.token.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn session() -> AuthSession {
        AuthSession {
            token: "jwt-token".to_string(),
            user: SessionUser {
                id: "u1".to_string(),
                name: "Fern".to_string(),
                email: "fern@example.com".to_string(),
            },
        }
    }

    #[test]
    fn test_load_without_file_is_signed_out() {
        let dir = tempdir().unwrap();
        let store = SessionStore::load(dir.path().join("session.json")).unwrap();
        assert!(!store.is_authenticated());
        assert!(store.token().is_none());
    }

    #[test]
    fn test_establish_survives_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let mut store = SessionStore::load(&path).unwrap();
        store.establish(session()).unwrap();
        assert_eq!(store.token(), Some("jwt-token"));

        let reloaded = SessionStore::load(&path).unwrap();
        assert_eq!(reloaded.current(), Some(&session()));
    }

    #[test]
    fn test_logout_removes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut store = SessionStore::load(&path).unwrap();
        store.establish(session()).unwrap();
        store.logout().unwrap();

        assert!(!store.is_authenticated());
        assert!(!path.exists());
        assert!(!SessionStore::load(&path).unwrap().is_authenticated());
        // 未登录时登出同样成功
        store.logout().unwrap();
    }

    #[test]
    fn test_corrupt_file_is_signed_out() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{ not json").unwrap();

        let store = SessionStore::load(&path).unwrap();
        assert!(!store.is_authenticated());
    }
}
