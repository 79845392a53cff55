//! Durable state storage for the plan collection.
//!
//! The whole store is one JSON document on disk: the plan collection plus
//! the id of the active plan. Every mutation rewrites the document in full;
//! writes are synchronous and last-write-wins. A missing file means an empty
//! store, and a corrupt file is logged and treated the same way - saved data
//! is never a fatal error.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{FsResultExt, Result};
use crate::models::LearningPlan;

/// The serialized state document: all plans plus the active selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StoreState {
    /// ID of the currently active plan, if any
    #[serde(default)]
    pub active: Option<Uuid>,

    /// All stored plans, most recently created first
    #[serde(default)]
    pub plans: Vec<LearningPlan>,
}

impl StoreState {
    /// Returns the active plan, if one is selected and still present.
    pub fn active_plan(&self) -> Option<&LearningPlan> {
        let id = self.active?;
        self.plans.iter().find(|p| p.id == id)
    }

    /// Mutable access to the active plan.
    pub fn active_plan_mut(&mut self) -> Option<&mut LearningPlan> {
        let id = self.active?;
        self.plans.iter_mut().find(|p| p.id == id)
    }
}

/// Storage handler for the state document.
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    /// Creates a storage handler for the given file path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Loads the state document.
    ///
    /// A missing file yields an empty store. An unreadable or unparseable
    /// file is logged at warn level and also yields an empty store.
    pub fn load(&self) -> StoreState {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return StoreState::default(),
            Err(e) => {
                warn!(
                    "Could not read state file {}: {e}; starting empty",
                    self.path.display()
                );
                return StoreState::default();
            }
        };

        match serde_json::from_str(&text) {
            Ok(state) => state,
            Err(e) => {
                warn!(
                    "State file {} is corrupt ({e}); starting empty",
                    self.path.display()
                );
                StoreState::default()
            }
        }
    }

    /// Writes the state document, creating parent directories as needed.
    pub fn save(&self, state: &StoreState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).fs_context(parent)?;
        }
        let json = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, json).fs_context(&self.path)
    }

    /// Removes the state document.
    ///
    /// Called when a mutation empties the collection, so deleted data does
    /// not resurface on the next start. A file that is already gone is fine.
    pub fn remove(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).fs_context(&self.path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LearningPlan;

    fn sample_state() -> StoreState {
        let plan = LearningPlan::new("Chess".to_string(), "30 minutes".to_string(), vec![]);
        StoreState {
            active: Some(plan.id),
            plans: vec![plan],
        }
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let file = StateFile::new(dir.path().join("plans.json"));
        assert_eq!(file.load(), StoreState::default());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let file = StateFile::new(dir.path().join("plans.json"));

        let state = sample_state();
        file.save(&state).unwrap();
        assert_eq!(file.load(), state);
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plans.json");
        std::fs::write(&path, "{not json at all").unwrap();

        let file = StateFile::new(&path);
        assert_eq!(file.load(), StoreState::default());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let file = StateFile::new(dir.path().join("plans.json"));

        file.save(&sample_state()).unwrap();
        file.remove().unwrap();
        file.remove().unwrap();
        assert_eq!(file.load(), StoreState::default());
    }

    #[test]
    fn test_active_plan_lookup_survives_stale_selection() {
        let mut state = sample_state();
        assert!(state.active_plan().is_some());

        state.plans.clear();
        assert!(state.active_plan().is_none());
    }
}
