//! Report/Sources Presenter
//!
//! Maps the research state onto a structured view once a report exists:
//! report body blocks, enumerated sources, and the placeholder wording for
//! the states before the report arrives. Rendering to pixels is the host
//! shell's job; this module only decides what there is to render.

use pulldown_cmark::{Event, Parser, Tag, TagEnd};

use crate::models::report::{ReportBlock, ReportView, SourceEntry};
use crate::models::research::ResearchState;
use crate::services::progress::log::source_count_label;

/// Empty-state wording while a run is active.
const PLACEHOLDER_RUNNING: &str = "The report will appear here as the research progresses.";

/// Empty-state wording when no run is active.
const PLACEHOLDER_IDLE: &str = "No report yet. Ask a research question to get started.";

/// Build the report view for the state.
///
/// Total over partially-populated state: an empty query, a missing report,
/// and zero sources all map to their defaults rather than failing.
pub fn present(state: &ResearchState, running: bool) -> ReportView {
    let query = if state.research.query.is_empty() {
        None
    } else {
        Some(state.research.query.clone())
    };

    let blocks = state
        .processing
        .report
        .as_deref()
        .map(report_blocks)
        .unwrap_or_default();

    let placeholder = if state.has_report() {
        None
    } else if running {
        Some(PLACEHOLDER_RUNNING.to_string())
    } else {
        Some(PLACEHOLDER_IDLE.to_string())
    };

    let sources = state
        .research
        .sources
        .iter()
        .enumerate()
        .map(|(i, source)| SourceEntry {
            index: i + 1,
            title: source.title.clone(),
            url: source.url.clone(),
            snippet: source.snippet.clone(),
        })
        .collect();

    ReportView {
        query,
        generating: running && !state.has_report(),
        blocks,
        placeholder,
        sources,
        source_count_label: source_count_label(state.research.sources_found),
    }
}

/// Parse a markdown report body into displayable blocks.
///
/// Headings, paragraphs, and list items become distinct block kinds; inline
/// markup is flattened to its text. A paragraph nested inside a list item
/// stays part of that item.
fn report_blocks(markdown: &str) -> Vec<ReportBlock> {
    enum Pending {
        Heading(u8),
        Paragraph,
        Item,
    }

    let mut blocks = Vec::new();
    let mut pending: Vec<(Pending, String)> = Vec::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                pending.push((Pending::Heading(level as u8), String::new()));
            }
            Event::Start(Tag::Paragraph) => {
                if pending.is_empty() {
                    pending.push((Pending::Paragraph, String::new()));
                }
            }
            Event::Start(Tag::Item) => {
                pending.push((Pending::Item, String::new()));
            }
            Event::Text(text) => {
                if let Some((_, buf)) = pending.last_mut() {
                    buf.push_str(&text);
                }
            }
            Event::Code(code) => {
                if let Some((_, buf)) = pending.last_mut() {
                    buf.push_str(&code);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some((_, buf)) = pending.last_mut() {
                    buf.push(' ');
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if matches!(pending.last(), Some((Pending::Heading(_), _))) {
                    if let Some((Pending::Heading(level), text)) = pending.pop() {
                        blocks.push(ReportBlock::Heading { level, text });
                    }
                }
            }
            Event::End(TagEnd::Paragraph) => {
                if matches!(pending.last(), Some((Pending::Paragraph, _))) {
                    if let Some((_, text)) = pending.pop() {
                        blocks.push(ReportBlock::Paragraph { text });
                    }
                }
            }
            Event::End(TagEnd::Item) => {
                if matches!(pending.last(), Some((Pending::Item, _))) {
                    if let Some((_, text)) = pending.pop() {
                        blocks.push(ReportBlock::ListItem { text });
                    }
                }
            }
            _ => {}
        }
    }

    blocks
}
