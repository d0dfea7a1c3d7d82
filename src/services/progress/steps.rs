//! Step Deriver
//!
//! Computes the ordered list of workflow steps with completed/current flags
//! from the current research state. The derivation is pure: identical
//! (phase, stage) inputs always yield identical output.

use crate::models::progress::DerivedStep;
use crate::models::research::{ResearchPhase, ResearchState};
use crate::services::progress::describer::describe;

/// Derive the five workflow steps from the current state.
///
/// A step is `completed` iff the current phase's index in the fixed sequence
/// is strictly greater than the step's index, and `current` iff they are
/// equal. `idle` has no index, so nothing is completed or current before the
/// run starts.
pub fn derive_steps(state: &ResearchState) -> Vec<DerivedStep> {
    let current_index = state.status.phase.step_index();
    let stage = state.research.stage_or_default();

    ResearchPhase::STEP_SEQUENCE
        .iter()
        .enumerate()
        .map(|(index, phase)| DerivedStep {
            id: *phase,
            label: phase.label().to_string(),
            description: describe(*phase, stage).to_string(),
            completed: current_index.map_or(false, |c| c > index),
            current: current_index == Some(index),
        })
        .collect()
}
