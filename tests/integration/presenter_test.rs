//! Presenter Integration Tests
//!
//! Report and source rendering once the state indicates a report exists,
//! and the placeholder wording before that.

use deep_research_agent::models::report::ReportBlock;
use deep_research_agent::models::research::{ResearchState, Source};
use deep_research_agent::services::presenter::present;

#[test]
fn test_running_without_report_shows_generating_indicator() {
    let mut state = ResearchState::default();
    state.research.query = "history of the transistor".to_string();

    let view = present(&state, true);
    assert!(view.generating);
    assert!(view.blocks.is_empty());
    assert!(view.placeholder.is_some());
    assert_eq!(view.query.as_deref(), Some("history of the transistor"));
}

#[test]
fn test_placeholder_wording_depends_on_running() {
    let state = ResearchState::default();

    let running = present(&state, true);
    let idle = present(&state, false);
    assert_ne!(running.placeholder, idle.placeholder);
    assert!(!idle.generating);
}

#[test]
fn test_report_maps_to_structured_blocks() {
    let mut state = ResearchState::default();
    state.processing.report = Some("# Title\n\nBody".to_string());

    let view = present(&state, true);
    assert!(!view.generating);
    assert!(view.placeholder.is_none());
    assert_eq!(
        view.blocks,
        vec![
            ReportBlock::Heading {
                level: 1,
                text: "Title".to_string()
            },
            ReportBlock::Paragraph {
                text: "Body".to_string()
            },
        ]
    );
}

#[test]
fn test_full_report_shape_renders_headings_paragraphs_and_lists() {
    let mut state = ResearchState::default();
    state.processing.report = Some(
        "# Report\n\n## Executive Summary\n\nShort overview.\n\n## Key Findings\n\n- finding one\n- finding two\n"
            .to_string(),
    );

    let view = present(&state, false);
    let headings = view
        .blocks
        .iter()
        .filter(|b| matches!(b, ReportBlock::Heading { .. }))
        .count();
    let items = view
        .blocks
        .iter()
        .filter(|b| matches!(b, ReportBlock::ListItem { .. }))
        .count();
    assert_eq!(headings, 3);
    assert_eq!(items, 2);
    assert!(view
        .blocks
        .contains(&ReportBlock::Paragraph {
            text: "Short overview.".to_string()
        }));
}

#[test]
fn test_single_source_renders_one_indexed_entry() {
    let mut state = ResearchState::default();
    state.research.sources = vec![Source::new("A", "http://x.com", None)];
    state.research.sources_found = 1;

    let view = present(&state, false);
    assert_eq!(view.sources.len(), 1);
    let entry = &view.sources[0];
    assert_eq!(entry.index, 1);
    assert_eq!(entry.title, "A");
    assert_eq!(entry.url, "http://x.com");
    assert!(entry.snippet.is_none());
    assert_eq!(view.source_count_label.as_deref(), Some("Found 1 source"));
}

#[test]
fn test_empty_fields_never_fail() {
    // Fully defaulted state renders without panicking anywhere.
    let view = present(&ResearchState::default(), false);
    assert!(view.query.is_none());
    assert!(view.sources.is_empty());
    assert!(view.source_count_label.is_none());
}
