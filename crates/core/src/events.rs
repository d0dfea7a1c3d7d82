//! Agent Event Vocabulary
//!
//! Runtime-agnostic events that an agent run pushes at the front end. This is
//! the single contract both sides of the state-synchronization boundary speak:
//! the workflow emits these, the replica and run controller consume them.
//!
//! Transport framing (SSE, IPC, websockets) is owned by the host shell; here
//! the events are plain values moved over channels.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sentinel node name signaling that the workflow graph has finished.
///
/// Matches the END marker of the upstream graph runtime. A node-transition
/// event carrying this name is the only signal that terminates a run.
pub const TERMINAL_NODE: &str = "__end__";

/// Coarse run status reported by the agent runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatusSignal {
    /// No run has been submitted yet
    NotStarted,
    /// A run is executing
    InProgress,
    /// The run finished (successfully or not)
    Complete,
}

impl RunStatusSignal {
    /// Whether this signal indicates an active or finished run (as opposed
    /// to "nothing submitted"). Both flip the controller into its
    /// in-progress lifecycle state.
    pub fn is_active(&self) -> bool {
        matches!(self, RunStatusSignal::InProgress | RunStatusSignal::Complete)
    }
}

/// Kind of a state patch operation (RFC 6902 subset).
///
/// The agent only ever replaces or adds values at known paths; move/remove/
/// test are not part of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOpKind {
    Replace,
    Add,
}

/// A single state patch operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchOp {
    /// Operation kind
    pub op: PatchOpKind,
    /// Slash-separated state path, e.g. `/status/phase`
    pub path: String,
    /// New value at the path
    pub value: Value,
}

impl PatchOp {
    /// Create a replace operation
    pub fn replace(path: impl Into<String>, value: Value) -> Self {
        Self {
            op: PatchOpKind::Replace,
            path: path.into(),
            value,
        }
    }

    /// Create an add operation
    pub fn add(path: impl Into<String>, value: Value) -> Self {
        Self {
            op: PatchOpKind::Add,
            path: path.into(),
            value,
        }
    }
}

/// Unified agent event that the front end consumes.
///
/// One serde-tagged enum so a host shell can forward the stream verbatim to
/// its rendering layer regardless of which agent runtime produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AgentEvent {
    /// Complete state replacement, used for initial setup or a full refresh
    StateSnapshot { snapshot: Value },

    /// Partial state update carrying only the changed paths
    StateDelta { ops: Vec<PatchOp> },

    /// The workflow moved to a named node; `__end__` is terminal
    NodeTransition { node: String },

    /// Coarse run status change
    RunStatus { signal: RunStatusSignal },
}

impl AgentEvent {
    /// Whether this event is a node transition into the terminal sentinel.
    pub fn is_terminal_transition(&self) -> bool {
        matches!(self, AgentEvent::NodeTransition { node } if node == TERMINAL_NODE)
    }
}
