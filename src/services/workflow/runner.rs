//! Workflow Runner
//!
//! Drives one research run through its single research node: search, source
//! collection, analysis, report composition. Node-transition and run-status
//! events bracket the run so the controller can manage its lifecycle; state
//! changes flow through the session as deltas.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info};

use deep_research_core::{
    AgentEvent, ReportComposer, RunStatusSignal, SearchProvider, TERMINAL_NODE,
};

use crate::models::research::{ResearchPhase, ResearchState};
use crate::services::workflow::session::ResearchSession;

/// Name of the single workflow node that performs the research.
pub const RESEARCH_NODE: &str = "research";

/// Report substages walked while the report is being generated.
const REPORT_STAGES: [&str; 7] = [
    "creating_outline",
    "drafting_executive_summary",
    "writing_introduction",
    "compiling_key_findings",
    "writing_detailed_analysis",
    "drawing_conclusions",
    "finalizing_report",
];

/// Runs research workflows against the configured providers.
pub struct WorkflowRunner {
    search: Arc<dyn SearchProvider>,
    composer: Arc<dyn ReportComposer>,
}

impl WorkflowRunner {
    /// Create a runner with the given providers.
    pub fn new(search: Arc<dyn SearchProvider>, composer: Arc<dyn ReportComposer>) -> Self {
        Self { search, composer }
    }

    /// Execute one run for the query, emitting events as it progresses.
    ///
    /// Provider failures land in `status.error`; the terminal transition and
    /// the completion status fire regardless, since termination is governed
    /// by the terminal node alone. Returns the final state.
    pub async fn run(&self, query: &str, event_tx: mpsc::Sender<AgentEvent>) -> ResearchState {
        info!(query, "research run started");

        let _ = event_tx
            .send(AgentEvent::RunStatus {
                signal: RunStatusSignal::InProgress,
            })
            .await;

        let mut session = ResearchSession::new(query, event_tx.clone());
        session.emit_snapshot().await;

        let _ = event_tx
            .send(AgentEvent::NodeTransition {
                node: RESEARCH_NODE.to_string(),
            })
            .await;

        session.set_in_progress(true).await;
        self.research(query, &mut session).await;

        let _ = event_tx
            .send(AgentEvent::NodeTransition {
                node: TERMINAL_NODE.to_string(),
            })
            .await;
        let _ = event_tx
            .send(AgentEvent::RunStatus {
                signal: RunStatusSignal::Complete,
            })
            .await;

        session.into_state()
    }

    async fn research(&self, query: &str, session: &mut ResearchSession) {
        session
            .update_phase(ResearchPhase::GatheringInformation, "searching", Some(0.2))
            .await;

        let sources = match self.search.search(query).await {
            Ok(sources) => sources,
            Err(err) => {
                session.fail(err.to_string()).await;
                return;
            }
        };

        if sources.is_empty() {
            session
                .fail("No relevant research results were found on the topic.")
                .await;
            return;
        }

        debug!(count = sources.len(), "sources found");
        session.add_sources(sources).await;
        session
            .update_phase(
                ResearchPhase::AnalyzingInformation,
                "organizing_data",
                Some(0.5),
            )
            .await;

        let mut progress = Some(0.8);
        for stage in REPORT_STAGES {
            session
                .update_phase(ResearchPhase::GeneratingReport, stage, progress.take())
                .await;
        }

        let report = {
            let sources = session.state().research.sources.clone();
            self.composer.compose(query, &sources).await
        };
        match report {
            Ok(report) => session.complete_research(report).await,
            Err(err) => session.fail(err.to_string()).await,
        }
    }
}

impl std::fmt::Debug for WorkflowRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkflowRunner").finish()
    }
}
