//! Services
//!
//! Business logic services for the research-progress core: progress
//! derivation and rendering, the state replica, the run controller, the
//! report presenter, and the agent-side workflow.

pub mod presenter;
pub mod progress;
pub mod replica;
pub mod run_controller;
pub mod workflow;

pub use presenter::present;
pub use progress::{derive_steps, describe, ProgressLog};
pub use replica::StateReplica;
pub use run_controller::{AgentRunController, RunLifecycle, STOP_DELAY};
pub use workflow::{ResearchSession, WorkflowRunner, RESEARCH_NODE};
