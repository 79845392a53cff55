//! Day and study session model definitions.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Task;

/// Represents one unit of a learning plan, addressed by its day number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Day {
    /// 1-based day number, unique within a plan
    pub number: u32,

    /// Brief title for the day's theme
    pub title: String,

    /// Step-by-step description of the day's work (lightweight markdown)
    pub description: String,

    /// Ordered task sequence
    #[serde(default)]
    pub tasks: Vec<Task>,

    /// Free-text study notes for the day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Tracked study sessions; at most one is open and it is always last
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sessions: Vec<Session>,
}

impl Day {
    /// Returns the currently open session, if any.
    ///
    /// Only the last session can be open; earlier sessions are always
    /// closed.
    pub fn open_session(&self) -> Option<&Session> {
        self.sessions.last().filter(|s| s.ended_at.is_none())
    }
}

/// One contiguous interval of tracked study time.
///
/// A `None` end means the session is currently running.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    /// Timestamp when the session was started (UTC)
    pub started_at: Timestamp,

    /// Timestamp when the session was stopped (UTC), if it has been
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<Timestamp>,
}
