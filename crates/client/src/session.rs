//! Durable per-device storage for the storefront surface.
//!
//! The platform keeps two keys for an anonymous shopper: `sessionId`, the
//! opaque token correlating their cart with the backend, and `theme`,
//! their display preference. Browsers hold these in local storage; this
//! client holds the same two keys in a JSON file under the platform data
//! directory.

use std::fs;
use std::path::{Path, PathBuf};

use canopy_core::SessionId;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Errors reading or writing the storage file.
#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} does not contain valid storage JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode storage state: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("no data directory available on this platform")]
    NoDataDir,
}

/// The storage file's document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    session_id: Option<SessionId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<String>,
}

/// Reads and writes the per-device storage file.
///
/// A missing file reads as empty state; the file and its directory are
/// created on first write.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    const FILE_NAME: &'static str = "storage.json";

    /// Storage under the platform data directory, e.g.
    /// `~/.local/share/canopy/storage.json` on Linux.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NoDataDir`] when the platform has no data
    /// directory for this user.
    pub fn new() -> Result<Self, StorageError> {
        let base = dirs::data_dir().ok_or(StorageError::NoDataDir)?;
        Ok(Self::at(base.join("canopy")))
    }

    /// Storage rooted at a specific directory.
    #[must_use]
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(Self::FILE_NAME),
        }
    }

    /// Where the storage file lives.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The session ID for this device, minting and persisting one on
    /// first use.
    ///
    /// Stable across calls and across re-opening the same directory. Not
    /// a credential: an opaque correlation key for anonymous cart state.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage file cannot be read or written.
    pub fn session_id(&self) -> Result<SessionId, StorageError> {
        let mut state = self.load()?;
        if let Some(id) = state.session_id {
            return Ok(id);
        }

        let id = SessionId::generate();
        debug!(session = %id, "minted new session ID");
        state.session_id = Some(id.clone());
        self.save(&state)?;
        Ok(id)
    }

    /// Drop the persisted session so the next read mints a fresh one.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage file cannot be read or written.
    pub fn reset_session(&self) -> Result<(), StorageError> {
        let mut state = self.load()?;
        state.session_id = None;
        self.save(&state)
    }

    /// The persisted display theme, if one was ever chosen.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage file cannot be read.
    pub fn theme(&self) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.theme)
    }

    /// Persist the display theme.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage file cannot be read or written.
    pub fn set_theme(&self, theme: &str) -> Result<(), StorageError> {
        let mut state = self.load()?;
        state.theme = Some(theme.to_owned());
        self.save(&state)
    }

    fn load(&self) -> Result<StoredState, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(StoredState::default());
            }
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&contents).map_err(|source| StorageError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, state: &StoredState) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::Write {
                path: self.path.clone(),
                source,
            })?;
        }

        let contents = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, contents).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
