//! Progress Derivation and Rendering
//!
//! The pipeline from research state to displayable progress: the describer
//! labels each (phase, stage), the step deriver computes completed/current
//! flags, and the log renderer turns steps into display entries.

pub mod describer;
pub mod log;
pub mod steps;

pub use describer::describe;
pub use log::{shorten_urls, source_count_label, ProgressLog};
pub use steps::derive_steps;
