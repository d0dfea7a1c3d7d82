//! Progress Log Renderer
//!
//! Converts derived steps into ordered log entries with done-flags, shortens
//! embedded URLs, and surfaces the source count. One renderer parameterized
//! by a visibility policy replaces the two page variants that used to carry
//! duplicate copies of this logic.

use regex::Regex;
use std::sync::OnceLock;

use crate::models::progress::{DerivedStep, LogEntry};
use crate::models::research::ResearchState;
use crate::models::settings::{ProgressSettings, ProgressVisibility};
use crate::services::progress::steps::derive_steps;

/// Maximum rendered length of a URL inside a log message.
const URL_MAX_LEN: usize = 50;

/// Kept prefix when a URL exceeds [`URL_MAX_LEN`]; the "..." marker brings
/// the total back to exactly [`URL_MAX_LEN`].
const URL_KEEP_LEN: usize = 47;

/// Matches an http(s) URL: scheme followed by any non-whitespace run.
fn url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"https?://\S+").expect("url pattern is valid"))
}

/// Shorten every URL in the message that exceeds the display limit.
///
/// Purely presentational: the underlying state keeps the full URL.
pub fn shorten_urls(message: &str) -> String {
    url_pattern()
        .replace_all(message, |caps: &regex::Captures<'_>| {
            let url = &caps[0];
            if url.chars().count() > URL_MAX_LEN {
                let kept: String = url.chars().take(URL_KEEP_LEN).collect();
                format!("{}...", kept)
            } else {
                url.to_string()
            }
        })
        .into_owned()
}

/// Pluralized source count, shown only once sources have been found.
pub fn source_count_label(sources_found: u32) -> Option<String> {
    match sources_found {
        0 => None,
        1 => Some("Found 1 source".to_string()),
        n => Some(format!("Found {} sources", n)),
    }
}

/// Renders the progress log for a research state.
#[derive(Debug, Clone, Default)]
pub struct ProgressLog {
    visibility: ProgressVisibility,
}

impl ProgressLog {
    /// Create a renderer with the given visibility policy
    pub fn new(visibility: ProgressVisibility) -> Self {
        Self { visibility }
    }

    /// Create a renderer from progress settings
    pub fn from_settings(settings: &ProgressSettings) -> Self {
        Self::new(settings.visibility)
    }

    /// Convert derived steps into ordered log entries.
    ///
    /// An entry is done when its step is completed, or when it sits strictly
    /// before the current step. The second clause covers the transient window
    /// where the phase pointer has advanced but the prior step's completed
    /// flag has not flipped yet.
    pub fn to_log_entries(steps: &[DerivedStep]) -> Vec<LogEntry> {
        let current_index = steps.iter().position(|s| s.current);

        steps
            .iter()
            .enumerate()
            .map(|(index, step)| {
                let done = step.completed || current_index.map_or(false, |c| index < c);
                let message = shorten_urls(&format!("{}: {}", step.label, step.description));
                LogEntry::new(done, message)
            })
            .collect()
    }

    /// Index of the first entry that is not done: the single "active" line
    /// the display leaves undimmed. Everything after it is de-emphasized.
    pub fn first_not_done_index(entries: &[LogEntry]) -> Option<usize> {
        entries.iter().position(|e| !e.done)
    }

    /// Render the log for the state under this renderer's visibility policy.
    pub fn render(&self, state: &ResearchState, running: bool) -> Vec<LogEntry> {
        match self.visibility {
            ProgressVisibility::Always => {}
            ProgressVisibility::GatedByStatus => {
                if !running {
                    return Vec::new();
                }
            }
        }
        Self::to_log_entries(&derive_steps(state))
    }
}
