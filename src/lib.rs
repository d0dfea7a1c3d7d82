//! Deep Research Agent - Research Progress Core
//!
//! The state-synchronization and rendering core behind a conversational
//! research assistant: the shared research state, the progress derivation
//! pipeline (describer, step deriver, log renderer), the run controller
//! with its debounced stop, the report/sources presenter, and the
//! agent-side workflow that produces the event stream.
//!
//! Transport framing, page scaffolding, and the actual search/LLM calls are
//! external collaborators; they connect through [`deep_research_core`]'s
//! event vocabulary and provider traits.

pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export the core crate's vocabulary at the root for convenience
pub use deep_research_core::{
    AgentEvent, PatchOp, PatchOpKind, ReportComposer, RunHandle, RunStatusSignal, SearchProvider,
    Source, TERMINAL_NODE,
};

pub use models::progress::{DerivedStep, LogEntry};
pub use models::report::{ReportBlock, ReportView, SourceEntry};
pub use models::research::{ResearchPhase, ResearchState};
pub use models::settings::{ProgressSettings, ProgressVisibility};
pub use services::presenter::present;
pub use services::progress::{derive_steps, describe, ProgressLog};
pub use services::replica::StateReplica;
pub use services::run_controller::{AgentRunController, RunLifecycle, STOP_DELAY};
pub use services::workflow::{ResearchSession, WorkflowRunner, RESEARCH_NODE};
pub use state::AppState;
pub use utils::error::{AppError, AppResult};
