//! Task and resource model definitions.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents an individual completable task within a day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Unique identifier for the task
    pub id: Uuid,

    /// What to do
    pub text: String,

    /// Completion flag
    #[serde(default)]
    pub done: bool,

    /// External references supporting the task
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<Resource>,
}

impl Task {
    /// Creates a fresh, incomplete task with a collision-resistant id.
    pub fn new(text: String, resources: Vec<Resource>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            done: false,
            resources,
        }
    }
}

/// An external reference (link) supporting a task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resource {
    /// Human-readable title of the reference
    pub title: String,

    /// Link target
    pub url: String,

    /// Category tag for the reference
    #[serde(default)]
    pub kind: ResourceKind,
}

/// Type-safe enumeration of resource categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// Video content (courses, talks, tutorials)
    Video,

    /// Blog posts and articles
    Blog,

    /// Official documentation
    Documentation,

    /// Anything else
    #[default]
    Other,
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "video" => Ok(ResourceKind::Video),
            "blog" => Ok(ResourceKind::Blog),
            "documentation" | "docs" => Ok(ResourceKind::Documentation),
            "other" => Ok(ResourceKind::Other),
            _ => Err(format!("Invalid resource kind: {s}")),
        }
    }
}

impl ResourceKind {
    /// Convert to the canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Video => "video",
            ResourceKind::Blog => "blog",
            ResourceKind::Documentation => "documentation",
            ResourceKind::Other => "other",
        }
    }

    /// Parses a model-supplied category tag, mapping anything unknown to
    /// [`ResourceKind::Other`].
    pub fn from_tag(tag: &str) -> Self {
        Self::from_str(tag).unwrap_or_default()
    }
}
