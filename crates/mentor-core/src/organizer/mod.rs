//! High-level organizer API for managing the plan collection.
//!
//! This module provides the main [`Organizer`] interface of the Mentor
//! study-plan system. The organizer coordinates between the application
//! layers and the state file, implementing all business logic for plan and
//! day mutations.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Interfaces   │    │   Operations    │    │   State File    │
//! │  (CLI handlers) │───▶│ (plan_ops,      │───▶│  (via store)    │
//! │                 │    │  day_ops)       │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Organizer`] instances with
//!   configuration
//! - [`plan_ops`]: Plan-level operations (create, list, delete, activate,
//!   full replacement)
//! - [`day_ops`]: Day-level operations (task toggle, notes, study sessions)
//!
//! ## Persistence Model
//!
//! Every mutation loads the state document, transforms it, and persists the
//! result: a non-empty collection is written in full, an emptied collection
//! removes the state file so deleted data does not resurface on the next
//! start. File I/O runs on the blocking thread pool. The process handles one
//! operation at a time, so writes are trivially last-write-wins.

use std::path::PathBuf;

use tokio::task;

use crate::{
    error::{OrganizerError, Result},
    store::{StateFile, StoreState},
};

// Module declarations
pub mod builder;
pub mod day_ops;
pub mod plan_ops;


// Re-export the main types
pub use builder::OrganizerBuilder;

/// Main organizer interface for managing plans and their days.
pub struct Organizer {
    pub(crate) state_path: PathBuf,
}

impl Organizer {
    /// Creates a new organizer with the specified state file path.
    pub(crate) fn new(state_path: PathBuf) -> Self {
        Self { state_path }
    }

    /// Runs a read-only closure against a freshly loaded state snapshot.
    pub(crate) async fn read_state<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&StoreState) -> Result<T> + Send + 'static,
    {
        let path = self.state_path.clone();

        task::spawn_blocking(move || {
            let state = StateFile::new(&path).load();
            f(&state)
        })
        .await
        .map_err(|e| OrganizerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Runs a mutation closure against the loaded state and persists the
    /// outcome.
    ///
    /// Nothing is written when the closure fails.
    pub(crate) async fn with_state<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut StoreState) -> Result<T> + Send + 'static,
    {
        let path = self.state_path.clone();

        task::spawn_blocking(move || {
            let file = StateFile::new(&path);
            let mut state = file.load();
            let out = f(&mut state)?;
            if state.plans.is_empty() {
                file.remove()?;
            } else {
                file.save(&state)?;
            }
            Ok(out)
        })
        .await
        .map_err(|e| OrganizerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
