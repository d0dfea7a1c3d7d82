//! Phase/Stage Describer
//!
//! Maps (phase, stage) to the human-readable description shown next to each
//! workflow step. All phase-transition labels live here so the log renderer
//! and any other consumer stay in agreement.

use crate::models::research::ResearchPhase;

/// Describe what the workflow is doing for the given phase and stage.
///
/// Pure and total: unknown phases degrade to a generic "Processing..." label
/// and unknown stages degrade to the phase's default description. Never
/// fails, never performs I/O.
pub fn describe(phase: ResearchPhase, stage: &str) -> &'static str {
    match phase {
        ResearchPhase::Initialized => "Setting up research parameters",
        ResearchPhase::GatheringInformation => match stage {
            "searching" => "Searching the web for information",
            _ => "Gathering information from sources",
        },
        ResearchPhase::AnalyzingInformation => match stage {
            "organizing_data" => "Organizing research data",
            _ => "Analyzing gathered information",
        },
        ResearchPhase::GeneratingReport => match stage {
            "creating_outline" => "Creating report outline",
            "drafting_executive_summary" => "Writing executive summary",
            "writing_introduction" => "Writing introduction",
            "compiling_key_findings" => "Compiling key findings",
            "writing_detailed_analysis" => "Writing detailed analysis",
            "drawing_conclusions" => "Drawing conclusions",
            "finalizing_report" => "Finalizing report",
            _ => "Generating detailed report",
        },
        ResearchPhase::Completed => match stage {
            "report_complete" => "Research report complete",
            _ => "Completing research",
        },
        ResearchPhase::Idle => "Processing...",
    }
}
