//! Research Workflow
//!
//! The agent-side run: the session that owns the authoritative state and
//! emits synchronization events, and the runner that drives a run through
//! the research node behind the provider seams.

pub mod runner;
pub mod session;

pub use runner::{WorkflowRunner, RESEARCH_NODE};
pub use session::ResearchSession;
