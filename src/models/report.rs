//! Report View Models
//!
//! Structured view of the final report and its sources, produced by the
//! presenter once the state carries a report. The host shell maps these
//! blocks onto whatever visual hierarchy it renders with.

use serde::{Deserialize, Serialize};

/// One structural block of the rendered report body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReportBlock {
    /// Section heading with its level (1-6)
    Heading { level: u8, text: String },
    /// Plain paragraph
    Paragraph { text: String },
    /// Single list item
    ListItem { text: String },
}

/// One entry in the enumerated source list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceEntry {
    /// 1-based display index
    pub index: usize,
    /// Source title, rendered as the link text
    pub title: String,
    /// Link target and displayed URL
    pub url: String,
    /// Optional preview paragraph
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

/// Complete presenter output for one render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ReportView {
    /// The research question, when one has been asked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// True while a run is active and no report exists yet; the host shows
    /// a "Generating Report" indicator for it
    pub generating: bool,
    /// Structured report body; empty until a report exists
    pub blocks: Vec<ReportBlock>,
    /// Empty-state message shown when there is no report
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Enumerated sources, 1-indexed
    pub sources: Vec<SourceEntry>,
    /// Pluralized source count, e.g. "Found 3 sources"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_count_label: Option<String>,
}
