//! Research Session
//!
//! Agent-side owner of the authoritative research state for one run. Every
//! mutation updates the local state and emits the matching event so the
//! front-end replica stays in sync: a full snapshot on creation, deltas for
//! everything after.

use serde_json::{json, Value};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use deep_research_core::{AgentEvent, PatchOp, Source};

use crate::models::research::{ResearchPhase, ResearchState};

/// State manager for one research run.
#[derive(Debug)]
pub struct ResearchSession {
    state: ResearchState,
    event_tx: mpsc::Sender<AgentEvent>,
}

impl ResearchSession {
    /// Create a session for the query in the initialized phase.
    pub fn new(query: impl Into<String>, event_tx: mpsc::Sender<AgentEvent>) -> Self {
        Self {
            state: ResearchState::for_query(query),
            event_tx,
        }
    }

    /// Current state.
    pub fn state(&self) -> &ResearchState {
        &self.state
    }

    /// Consume the session and return the final state.
    pub fn into_state(self) -> ResearchState {
        self.state
    }

    /// Emit a complete state snapshot.
    pub async fn emit_snapshot(&self) {
        match serde_json::to_value(&self.state) {
            Ok(snapshot) => {
                let _ = self
                    .event_tx
                    .send(AgentEvent::StateSnapshot { snapshot })
                    .await;
            }
            Err(err) => warn!(%err, "failed to encode state snapshot"),
        }
    }

    /// Update the current phase and stage, with an optional progress value.
    pub async fn update_phase(
        &mut self,
        phase: ResearchPhase,
        stage: &str,
        progress: Option<f32>,
    ) {
        let timestamp = chrono::Utc::now().to_rfc3339();
        debug!(%phase, stage, "phase update");

        let mut ops = vec![
            PatchOp::replace("/status/phase", Value::String(phase.to_string())),
            PatchOp::replace("/research/stage", json!(stage)),
            PatchOp::replace("/status/timestamp", json!(timestamp)),
        ];
        if let Some(progress) = progress {
            ops.push(PatchOp::replace("/processing/progress", json!(progress)));
        }

        self.state.status.phase = phase;
        self.state.research.stage = stage.to_string();
        self.state.status.timestamp = Some(timestamp);
        if let Some(progress) = progress {
            self.state.processing.progress = progress;
        }

        self.emit_delta(ops).await;
    }

    /// Set whether processing is currently active.
    pub async fn set_in_progress(&mut self, in_progress: bool) {
        self.state.processing.in_progress = in_progress;
        self.emit_delta(vec![PatchOp::replace(
            "/processing/inProgress",
            json!(in_progress),
        )])
        .await;
    }

    /// Append discovered sources and update the source count.
    pub async fn add_sources(&mut self, sources: Vec<Source>) {
        self.state.research.sources.extend(sources);
        self.state.research.sources_found = self.state.research.sources.len() as u32;

        let sources_value =
            serde_json::to_value(&self.state.research.sources).unwrap_or_else(|_| json!([]));
        self.emit_delta(vec![
            PatchOp::replace("/research/sources", sources_value),
            PatchOp::replace(
                "/research/sources_found",
                json!(self.state.research.sources_found),
            ),
        ])
        .await;
    }

    /// Mark research as complete and set the final report.
    pub async fn complete_research(&mut self, report: String) {
        let ops = vec![
            PatchOp::replace("/status/phase", json!("completed")),
            PatchOp::replace("/research/stage", json!("report_complete")),
            PatchOp::replace("/research/completed", json!(true)),
            PatchOp::replace("/processing/completed", json!(true)),
            PatchOp::replace("/processing/inProgress", json!(false)),
            PatchOp::replace("/processing/report", json!(report.clone())),
            PatchOp::replace("/processing/progress", json!(1.0)),
        ];

        self.state.status.phase = ResearchPhase::Completed;
        self.state.research.stage = "report_complete".to_string();
        self.state.research.completed = true;
        self.state.processing.completed = true;
        self.state.processing.in_progress = false;
        self.state.processing.report = Some(report);
        self.state.processing.progress = 1.0;

        self.emit_delta(ops).await;
    }

    /// Record a run error. The error surfaces to the user through the state;
    /// it does not terminate the run, which stays governed by the terminal
    /// node signal.
    pub async fn fail(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!(error = %message, "research run failed");

        self.state.status.error = Some(message.clone());
        self.state.processing.in_progress = false;

        self.emit_delta(vec![
            PatchOp::replace("/status/error", json!(message)),
            PatchOp::replace("/processing/inProgress", json!(false)),
        ])
        .await;
    }

    async fn emit_delta(&self, ops: Vec<PatchOp>) {
        let _ = self.event_tx.send(AgentEvent::StateDelta { ops }).await;
    }
}
