//! Research State Models
//!
//! The canonical research-run state shared between the agent workflow and the
//! front end. The agent owns the authoritative copy; the front end holds a
//! read replica updated through agent events.
//!
//! Field names follow the wire state of the agent runtime: nested sections are
//! snake_case except for the camelCase flags (`inProgress`, `showSources`,
//! `showProgress`, `activeTab`) that the original state object carries.

use serde::{Deserialize, Serialize};

pub use deep_research_core::Source;

/// Top-level phase of the research workflow.
///
/// `Idle` precedes the fixed five-phase step sequence and has no step entry.
/// Unknown phase strings decode to `Idle` rather than failing, so a replica
/// never rejects a state update over an unrecognized phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResearchPhase {
    Initialized,
    GatheringInformation,
    AnalyzingInformation,
    GeneratingReport,
    Completed,
    #[default]
    #[serde(other)]
    Idle,
}

impl ResearchPhase {
    /// The fixed ordered phase sequence that defines step ordering.
    pub const STEP_SEQUENCE: [ResearchPhase; 5] = [
        ResearchPhase::Initialized,
        ResearchPhase::GatheringInformation,
        ResearchPhase::AnalyzingInformation,
        ResearchPhase::GeneratingReport,
        ResearchPhase::Completed,
    ];

    /// Index of this phase within the step sequence, or `None` for `Idle`.
    pub fn step_index(&self) -> Option<usize> {
        Self::STEP_SEQUENCE.iter().position(|p| p == self)
    }

    /// Human-readable step label ("gathering_information" -> "Gathering Information").
    pub fn label(&self) -> &'static str {
        match self {
            ResearchPhase::Idle => "Idle",
            ResearchPhase::Initialized => "Initialized",
            ResearchPhase::GatheringInformation => "Gathering Information",
            ResearchPhase::AnalyzingInformation => "Analyzing Information",
            ResearchPhase::GeneratingReport => "Generating Report",
            ResearchPhase::Completed => "Completed",
        }
    }

    /// Parse a phase from its snake_case identifier.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "idle" => Some(ResearchPhase::Idle),
            "initialized" => Some(ResearchPhase::Initialized),
            "gathering_information" => Some(ResearchPhase::GatheringInformation),
            "analyzing_information" => Some(ResearchPhase::AnalyzingInformation),
            "generating_report" => Some(ResearchPhase::GeneratingReport),
            "completed" => Some(ResearchPhase::Completed),
            _ => None,
        }
    }
}

impl std::fmt::Display for ResearchPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResearchPhase::Idle => write!(f, "idle"),
            ResearchPhase::Initialized => write!(f, "initialized"),
            ResearchPhase::GatheringInformation => write!(f, "gathering_information"),
            ResearchPhase::AnalyzingInformation => write!(f, "analyzing_information"),
            ResearchPhase::GeneratingReport => write!(f, "generating_report"),
            ResearchPhase::Completed => write!(f, "completed"),
        }
    }
}

/// Overall status section of the research state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StatusInfo {
    /// Current major phase
    pub phase: ResearchPhase,
    /// Error reported by the agent, if any. Surfaced to the user but does
    /// not terminate the run; termination is the terminal node's job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// ISO 8601 timestamp of the last phase change
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

fn default_stage() -> String {
    "not_started".to_string()
}

/// Research-specific data and progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResearchInfo {
    /// Original user query
    pub query: String,
    /// Freeform substage name within the current phase
    pub stage: String,
    /// Count of sources discovered. Independently settable from
    /// `sources.len()`; authoritative for count display only.
    pub sources_found: u32,
    /// Discovered sources, append-only during a run
    pub sources: Vec<Source>,
    /// Whether research gathering is done
    pub completed: bool,
}

impl Default for ResearchInfo {
    fn default() -> Self {
        Self {
            query: String::new(),
            stage: default_stage(),
            sources_found: 0,
            sources: Vec::new(),
            completed: false,
        }
    }
}

impl ResearchInfo {
    /// The current stage, falling back to "not_started" when unset.
    pub fn stage_or_default(&self) -> &str {
        if self.stage.is_empty() {
            "not_started"
        } else {
            &self.stage
        }
    }
}

/// Processing and report generation tracking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProcessingInfo {
    /// Numerical progress from 0.0 to 1.0
    pub progress: f32,
    /// Final generated report content (markdown), once available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,
    /// Whether processing is completely done
    pub completed: bool,
    /// Whether processing is currently active
    #[serde(rename = "inProgress")]
    pub in_progress: bool,
}

fn default_show_progress() -> bool {
    true
}

fn default_active_tab() -> String {
    "chat".to_string()
}

/// UI state for frontend display. Presentation-only, not invariant-bearing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiState {
    /// Whether to display the sources panel
    #[serde(rename = "showSources")]
    pub show_sources: bool,
    /// Whether to show progress indicators
    #[serde(rename = "showProgress")]
    pub show_progress: bool,
    /// Which UI tab should be active
    #[serde(rename = "activeTab")]
    pub active_tab: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            show_sources: false,
            show_progress: default_show_progress(),
            active_tab: default_active_tab(),
        }
    }
}

/// Canonical research-run state.
///
/// `ResearchState::default()` is the idle state a UI session starts from;
/// [`ResearchState::for_query`] is the initialized state the agent creates
/// when a run begins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResearchState {
    pub status: StatusInfo,
    pub research: ResearchInfo,
    pub processing: ProcessingInfo,
    pub ui: UiState,
}

impl ResearchState {
    /// Initial state for a new run with the given query.
    pub fn for_query(query: impl Into<String>) -> Self {
        Self {
            status: StatusInfo {
                phase: ResearchPhase::Initialized,
                error: None,
                timestamp: Some(chrono::Utc::now().to_rfc3339()),
            },
            research: ResearchInfo {
                query: query.into(),
                ..ResearchInfo::default()
            },
            processing: ProcessingInfo::default(),
            ui: UiState::default(),
        }
    }

    /// Whether a report is available for rendering.
    pub fn has_report(&self) -> bool {
        self.processing.report.is_some()
    }
}
