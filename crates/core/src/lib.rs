//! Deep Research Core
//!
//! Foundational error types, the agent event vocabulary, and provider traits
//! for the Deep Research Agent workspace. This crate has zero dependencies on
//! application-level code (state models, rendering, controllers).
//!
//! ## Module Organization
//!
//! - `error` - Core error types (`CoreError`, `CoreResult`)
//! - `events` - Agent event vocabulary (`AgentEvent`, `PatchOp`, `RunStatusSignal`)
//! - `provider` - Capability seams (`SearchProvider`, `ReportComposer`, `RunHandle`)
//!
//! ## Design Principles
//!
//! 1. **Zero external dependencies beyond serde/async-trait/thiserror** - keeps build times minimal
//! 2. **Trait-based abstractions** - search and report composition are external collaborators
//! 3. **Unidirectional dependency** - this crate depends on nothing else in the workspace

pub mod error;
pub mod events;
pub mod provider;

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{CoreError, CoreResult};

// ── Agent Events ───────────────────────────────────────────────────────
pub use events::{AgentEvent, PatchOp, PatchOpKind, RunStatusSignal, TERMINAL_NODE};

// ── Provider Seams ─────────────────────────────────────────────────────
pub use provider::{ReportComposer, RunHandle, SearchProvider, Source};
