//! Data Models
//!
//! Shared data structures for the research-progress core.

pub mod progress;
pub mod report;
pub mod research;
pub mod settings;

pub use progress::{DerivedStep, LogEntry};
pub use report::{ReportBlock, ReportView, SourceEntry};
pub use research::{
    ProcessingInfo, ResearchInfo, ResearchPhase, ResearchState, Source, StatusInfo, UiState,
};
pub use settings::{ProgressSettings, ProgressVisibility};
