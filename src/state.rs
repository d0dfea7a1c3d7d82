//! Application State
//!
//! Glue object a host shell owns for one UI session: the progress settings,
//! the state replica, and the run controller, with a single entry point that
//! routes incoming agent events to the right consumer.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, RwLock};

use deep_research_core::{AgentEvent, RunHandle};

use crate::models::progress::LogEntry;
use crate::models::report::ReportView;
use crate::models::research::ResearchState;
use crate::models::settings::ProgressSettings;
use crate::services::presenter::present;
use crate::services::progress::ProgressLog;
use crate::services::replica::StateReplica;
use crate::services::run_controller::AgentRunController;

/// Per-session application state.
#[derive(Debug)]
pub struct AppState {
    replica: Arc<RwLock<StateReplica>>,
    controller: AgentRunController,
    progress_log: ProgressLog,
}

impl AppState {
    /// Create a session with default settings, stopping runs through the
    /// given handle.
    pub fn new(handle: Arc<dyn RunHandle>) -> Self {
        Self::with_settings(ProgressSettings::default(), handle)
    }

    /// Create a session with explicit settings.
    pub fn with_settings(settings: ProgressSettings, handle: Arc<dyn RunHandle>) -> Self {
        let controller = AgentRunController::new(handle)
            .with_stop_delay(Duration::from_millis(settings.stop_delay_ms));
        Self {
            replica: Arc::new(RwLock::new(StateReplica::new())),
            controller,
            progress_log: ProgressLog::from_settings(&settings),
        }
    }

    /// Apply one incoming agent event.
    ///
    /// State events update the replica; node transitions and run-status
    /// signals drive the controller. Events must arrive in order; step
    /// derivation depends on monotonic phase progression.
    pub async fn handle_event(&self, event: AgentEvent) {
        match &event {
            AgentEvent::StateSnapshot { .. } | AgentEvent::StateDelta { .. } => {
                self.replica.write().await.apply(&event);
            }
            AgentEvent::NodeTransition { .. } | AgentEvent::RunStatus { .. } => {
                self.controller.on_event(&event).await;
            }
        }
    }

    /// Current research state (a clone of the replica).
    pub async fn research_state(&self) -> ResearchState {
        self.replica.read().await.state().clone()
    }

    /// Subscribe to state changes.
    pub async fn subscribe(&self) -> watch::Receiver<ResearchState> {
        self.replica.read().await.subscribe()
    }

    /// Reset the replica for a new UI session.
    pub async fn reset(&self) {
        self.replica.write().await.reset();
    }

    /// Render the progress log for the current state under the configured
    /// visibility policy.
    pub async fn progress_entries(&self) -> Vec<LogEntry> {
        let running = self.controller.is_in_progress().await;
        let state = self.replica.read().await;
        self.progress_log.render(state.state(), running)
    }

    /// Build the report view for the current state.
    pub async fn report_view(&self) -> ReportView {
        let running = self.controller.is_in_progress().await;
        let state = self.replica.read().await;
        present(state.state(), running)
    }

    /// The run controller for this session.
    pub fn controller(&self) -> &AgentRunController {
        &self.controller
    }
}
