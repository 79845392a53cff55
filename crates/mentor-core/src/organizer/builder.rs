//! Builder for creating and configuring Organizer instances.

use std::path::{Path, PathBuf};

use super::Organizer;
use crate::error::{OrganizerError, Result};

/// Builder for creating and configuring Organizer instances.
#[derive(Debug, Clone)]
pub struct OrganizerBuilder {
    state_path: Option<PathBuf>,
}

impl OrganizerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self { state_path: None }
    }

    /// Sets a custom state file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/mentor/plans.json` or `~/.local/share/mentor/plans.json`
    pub fn with_state_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.state_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured organizer instance.
    ///
    /// # Errors
    ///
    /// Returns `OrganizerError::FileSystem` if the parent directory cannot
    /// be created, and `OrganizerError::XdgDirectory` if the default path
    /// cannot be resolved.
    pub fn build(self) -> Result<Organizer> {
        let state_path = if let Some(path) = self.state_path {
            path
        } else {
            Self::default_state_path()?
        };

        if let Some(parent) = state_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| OrganizerError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        Ok(Organizer::new(state_path))
    }

    /// Returns the default state file path following XDG Base Directory
    /// specification.
    fn default_state_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("mentor")
            .place_data_file("plans.json")
            .map_err(|e| OrganizerError::XdgDirectory(e.to_string()))
    }
}

impl Default for OrganizerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
