//! State Replica Integration Tests
//!
//! Event application in arrival order, tolerance of unknown paths and
//! malformed values, and the documented independence of `sources_found`
//! from the sources list.

use deep_research_agent::models::research::ResearchPhase;
use deep_research_agent::services::replica::StateReplica;
use deep_research_core::{AgentEvent, PatchOp};
use serde_json::json;

#[test]
fn test_snapshot_then_deltas_track_a_full_run() {
    let mut replica = StateReplica::new();

    replica.apply(&AgentEvent::StateSnapshot {
        snapshot: json!({
            "status": {"phase": "initialized"},
            "research": {"query": "rust ownership", "stage": "not_started"},
            "processing": {"progress": 0, "inProgress": false},
            "ui": {"showProgress": true, "activeTab": "chat"},
        }),
    });
    assert_eq!(replica.state().status.phase, ResearchPhase::Initialized);

    replica.apply(&AgentEvent::StateDelta {
        ops: vec![
            PatchOp::replace("/status/phase", json!("gathering_information")),
            PatchOp::replace("/research/stage", json!("searching")),
            PatchOp::replace("/processing/progress", json!(0.2)),
        ],
    });
    replica.apply(&AgentEvent::StateDelta {
        ops: vec![
            PatchOp::replace(
                "/research/sources",
                json!([{"title": "A", "url": "http://a.com", "snippet": "alpha"}]),
            ),
            PatchOp::replace("/research/sources_found", json!(1)),
        ],
    });
    replica.apply(&AgentEvent::StateDelta {
        ops: vec![
            PatchOp::replace("/status/phase", json!("completed")),
            PatchOp::replace("/research/stage", json!("report_complete")),
            PatchOp::replace("/research/completed", json!(true)),
            PatchOp::replace("/processing/completed", json!(true)),
            PatchOp::replace("/processing/inProgress", json!(false)),
            PatchOp::replace("/processing/report", json!("# Done")),
            PatchOp::replace("/processing/progress", json!(1.0)),
        ],
    });

    let state = replica.state();
    assert_eq!(state.status.phase, ResearchPhase::Completed);
    assert_eq!(state.research.stage, "report_complete");
    assert_eq!(state.research.sources.len(), 1);
    assert_eq!(state.research.sources_found, 1);
    assert_eq!(state.processing.report.as_deref(), Some("# Done"));
    assert!(state.processing.completed);
}

#[test]
fn test_unknown_paths_and_values_do_not_derail_application() {
    let mut replica = StateReplica::new();
    replica.apply(&AgentEvent::StateDelta {
        ops: vec![
            PatchOp::replace("/status/phase", json!("not_a_phase")),
            PatchOp::replace("/nowhere/at/all", json!(42)),
            PatchOp::replace("/research/sources", json!("not an array")),
            PatchOp::replace("/research/stage", json!("searching")),
        ],
    });

    // The one valid op landed; everything else was skipped.
    let state = replica.state();
    assert_eq!(state.status.phase, ResearchPhase::Idle);
    assert!(state.research.sources.is_empty());
    assert_eq!(state.research.stage, "searching");
}

#[test]
fn test_sources_found_disagreeing_with_list_is_preserved() {
    // The producer may report a count without (or before) the list; neither
    // side is reconciled against the other.
    let mut replica = StateReplica::new();
    replica.apply(&AgentEvent::StateDelta {
        ops: vec![PatchOp::replace("/research/sources_found", json!(5))],
    });

    assert_eq!(replica.state().research.sources_found, 5);
    assert!(replica.state().research.sources.is_empty());
}

#[test]
fn test_malformed_snapshot_keeps_previous_state() {
    let mut replica = StateReplica::new();
    replica.apply(&AgentEvent::StateDelta {
        ops: vec![PatchOp::replace("/research/query", json!("kept"))],
    });

    replica.apply(&AgentEvent::StateSnapshot {
        snapshot: json!("definitely not an object"),
    });
    assert_eq!(replica.state().research.query, "kept");
}

#[tokio::test]
async fn test_watch_subscribers_see_each_update() {
    let mut replica = StateReplica::new();
    let mut rx = replica.subscribe();

    replica.apply(&AgentEvent::StateDelta {
        ops: vec![PatchOp::replace("/status/phase", json!("analyzing_information"))],
    });
    rx.changed().await.unwrap();
    assert_eq!(
        rx.borrow_and_update().status.phase,
        ResearchPhase::AnalyzingInformation
    );

    replica.apply(&AgentEvent::StateDelta {
        ops: vec![PatchOp::replace("/status/phase", json!("completed"))],
    });
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow().status.phase, ResearchPhase::Completed);
}
