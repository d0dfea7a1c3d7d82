//! State Replica
//!
//! The front end's read copy of the research state. The replica applies
//! incoming agent events in arrival order and publishes each new state over a
//! watch channel so consumers re-render reactively. Application is total:
//! malformed values and unknown paths are logged and skipped, never an error.

use serde_json::Value;
use tokio::sync::watch;
use tracing::{debug, warn};

use deep_research_core::{AgentEvent, PatchOp, PatchOpKind};

use crate::models::research::{ResearchPhase, ResearchState, Source};

/// Read replica of the research state for one UI session.
#[derive(Debug)]
pub struct StateReplica {
    state: ResearchState,
    tx: watch::Sender<ResearchState>,
}

impl Default for StateReplica {
    fn default() -> Self {
        Self::new()
    }
}

impl StateReplica {
    /// Create a replica holding the idle initial state.
    pub fn new() -> Self {
        let state = ResearchState::default();
        let (tx, _) = watch::channel(state.clone());
        Self { state, tx }
    }

    /// Current state.
    pub fn state(&self) -> &ResearchState {
        &self.state
    }

    /// Subscribe to state changes. The receiver always starts with the
    /// current value.
    pub fn subscribe(&self) -> watch::Receiver<ResearchState> {
        self.tx.subscribe()
    }

    /// Reset to the idle initial state for a new run.
    pub fn reset(&mut self) {
        self.state = ResearchState::default();
        self.publish();
    }

    /// Apply one agent event. Node transitions and run-status signals are
    /// not state events and are ignored here; the run controller consumes
    /// them separately.
    pub fn apply(&mut self, event: &AgentEvent) {
        match event {
            AgentEvent::StateSnapshot { snapshot } => self.apply_snapshot(snapshot),
            AgentEvent::StateDelta { ops } => self.apply_delta(ops),
            AgentEvent::NodeTransition { .. } | AgentEvent::RunStatus { .. } => {}
        }
    }

    fn apply_snapshot(&mut self, snapshot: &Value) {
        match serde_json::from_value::<ResearchState>(snapshot.clone()) {
            Ok(state) => {
                debug!(phase = %state.status.phase, "applied state snapshot");
                self.state = state;
                self.publish();
            }
            Err(err) => warn!(%err, "ignoring malformed state snapshot"),
        }
    }

    fn apply_delta(&mut self, ops: &[PatchOp]) {
        for op in ops {
            self.apply_op(op);
        }
        self.publish();
    }

    fn apply_op(&mut self, op: &PatchOp) {
        let value = &op.value;
        match op.path.as_str() {
            "/status/phase" => {
                match value.as_str().and_then(ResearchPhase::parse) {
                    Some(phase) => self.state.status.phase = phase,
                    None => warn!(value = %value, "ignoring unknown phase value"),
                }
            }
            "/status/error" => self.state.status.error = as_opt_string(value),
            "/status/timestamp" => self.state.status.timestamp = as_opt_string(value),
            "/research/query" => {
                self.state.research.query = value.as_str().unwrap_or_default().to_string()
            }
            "/research/stage" => {
                self.state.research.stage = value.as_str().unwrap_or_default().to_string()
            }
            "/research/sources_found" => {
                self.state.research.sources_found = value.as_u64().unwrap_or(0) as u32
            }
            "/research/sources" => match op.op {
                PatchOpKind::Replace => match serde_json::from_value::<Vec<Source>>(value.clone()) {
                    Ok(sources) => self.state.research.sources = sources,
                    Err(err) => warn!(%err, "ignoring malformed sources value"),
                },
                PatchOpKind::Add => match serde_json::from_value::<Vec<Source>>(value.clone()) {
                    Ok(sources) => self.state.research.sources.extend(sources),
                    Err(err) => warn!(%err, "ignoring malformed sources value"),
                },
            },
            "/research/completed" => {
                self.state.research.completed = value.as_bool().unwrap_or(false)
            }
            "/processing/progress" => {
                self.state.processing.progress = value.as_f64().unwrap_or(0.0) as f32
            }
            "/processing/report" => self.state.processing.report = as_opt_string(value),
            "/processing/completed" => {
                self.state.processing.completed = value.as_bool().unwrap_or(false)
            }
            "/processing/inProgress" => {
                self.state.processing.in_progress = value.as_bool().unwrap_or(false)
            }
            "/ui/showSources" => self.state.ui.show_sources = value.as_bool().unwrap_or(false),
            "/ui/showProgress" => self.state.ui.show_progress = value.as_bool().unwrap_or(false),
            "/ui/activeTab" => {
                self.state.ui.active_tab = value.as_str().unwrap_or_default().to_string()
            }
            other => warn!(path = other, "ignoring patch op for unknown path"),
        }
    }

    fn publish(&self) {
        // send_replace never fails even with no subscribers.
        self.tx.send_replace(self.state.clone());
    }
}

fn as_opt_string(value: &Value) -> Option<String> {
    value.as_str().map(|s| s.to_string())
}
