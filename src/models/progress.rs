//! Progress View Models
//!
//! Ephemeral records derived from the research state for display. These are
//! recomputed from the state on every update and never cached across updates.

use serde::{Deserialize, Serialize};

use crate::models::research::ResearchPhase;

/// One workflow step with its derived progress status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedStep {
    /// Phase this step represents
    pub id: ResearchPhase,
    /// Humanized phase name, e.g. "Gathering Information"
    pub label: String,
    /// Human-readable description of what the phase is doing right now
    pub description: String,
    /// Whether the workflow has moved past this step
    pub completed: bool,
    /// Whether this is the step the workflow is currently in
    pub current: bool,
}

/// A single renderable progress log line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Whether the step this line represents is done
    pub done: bool,
    /// Display message, "{label}: {description}"
    pub message: String,
}

impl LogEntry {
    /// Create a log entry
    pub fn new(done: bool, message: impl Into<String>) -> Self {
        Self {
            done,
            message: message.into(),
        }
    }
}
