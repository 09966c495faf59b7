//! Session snapshot persistence
//!
//! The host lifecycle hook: the app restores the controller state on start
//! and saves it when the window is about to close.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Serialized transient state of the screen controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    #[serde(default = "default_true")]
    pub show_onboarding: bool,
    /// Indices of expanded items, ascending
    #[serde(default)]
    pub expanded: Vec<usize>,
}

fn default_true() -> bool {
    true
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            show_onboarding: true,
            expanded: Vec::new(),
        }
    }
}

/// Load/save collaborator for the session snapshot
pub trait SessionStore: Send + Sync {
    /// Returns `Ok(None)` when nothing has been saved yet
    fn load_state(&self) -> Result<Option<SessionSnapshot>>;
    fn save_state(&self, snapshot: &SessionSnapshot) -> Result<()>;
}

/// JSON file backed store
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the platform data directory, if one can be determined
    pub fn in_data_dir() -> Option<Self> {
        directories::ProjectDirs::from("com", "greetings", "Greetings")
            .map(|dirs| Self::new(dirs.data_dir().join("session.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load_state(&self) -> Result<Option<SessionSnapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let snapshot = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;
        Ok(Some(snapshot))
    }

    fn save_state(&self, snapshot: &SessionSnapshot) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(snapshot)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}

/// In-process store, also used when no data directory exists
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    saved: Mutex<Option<SessionSnapshot>>,
}

impl SessionStore for MemorySessionStore {
    fn load_state(&self) -> Result<Option<SessionSnapshot>> {
        let saved = self
            .saved
            .lock()
            .map_err(|_| anyhow::anyhow!("session store lock poisoned"))?;
        Ok(saved.clone())
    }

    fn save_state(&self, snapshot: &SessionSnapshot) -> Result<()> {
        let mut saved = self
            .saved
            .lock()
            .map_err(|_| anyhow::anyhow!("session store lock poisoned"))?;
        *saved = Some(snapshot.clone());
        Ok(())
    }
}
