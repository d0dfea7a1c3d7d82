//! Run Controller Integration Tests
//!
//! Debounced stop semantics under a paused clock:
//! - One stop per run, ~1000ms after the first terminal signal
//! - Duplicate terminal signals are harmless
//! - A new run started inside the debounce window survives

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use deep_research_agent::services::run_controller::{AgentRunController, RunLifecycle};
use deep_research_core::{RunHandle, RunStatusSignal, TERMINAL_NODE};

#[derive(Default)]
struct CountingHandle {
    stops: AtomicUsize,
}

impl CountingHandle {
    fn count(&self) -> usize {
        self.stops.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RunHandle for CountingHandle {
    async fn stop(&self) {
        self.stops.fetch_add(1, Ordering::SeqCst);
    }
}

#[tokio::test(start_paused = true)]
async fn test_duplicate_terminal_signals_yield_one_stop_after_delay() {
    let handle = Arc::new(CountingHandle::default());
    let controller = AgentRunController::new(handle.clone());

    controller.on_run_status(RunStatusSignal::InProgress).await;
    controller.on_node_transition(TERMINAL_NODE).await;

    // Second terminal signal 200ms later, inside the debounce window.
    tokio::time::sleep(Duration::from_millis(200)).await;
    controller.on_node_transition(TERMINAL_NODE).await;
    assert_eq!(handle.count(), 0);

    // Just before the 1000ms mark nothing has fired yet.
    tokio::time::sleep(Duration::from_millis(750)).await;
    assert_eq!(handle.count(), 0);
    assert_eq!(controller.lifecycle().await, RunLifecycle::Stopping);

    // Crossing the 1000ms mark fires exactly one stop.
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(handle.count(), 1);
    assert_eq!(controller.lifecycle().await, RunLifecycle::Stopped);
    assert!(!controller.is_in_progress().await);

    // Nothing else fires later.
    tokio::time::sleep(Duration::from_millis(2000)).await;
    assert_eq!(handle.count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_new_run_inside_debounce_window_is_not_stopped() {
    let handle = Arc::new(CountingHandle::default());
    let controller = AgentRunController::new(handle.clone());

    controller.on_run_status(RunStatusSignal::InProgress).await;
    let first_run = controller.run_id().await;
    controller.on_node_transition(TERMINAL_NODE).await;

    tokio::time::sleep(Duration::from_millis(400)).await;
    controller.on_run_status(RunStatusSignal::InProgress).await;
    let second_run = controller.run_id().await;
    assert_ne!(first_run, second_run);

    tokio::time::sleep(Duration::from_millis(3000)).await;
    assert_eq!(handle.count(), 0);
    assert_eq!(controller.lifecycle().await, RunLifecycle::InProgress);
    assert!(controller.is_in_progress().await);
}

#[tokio::test(start_paused = true)]
async fn test_lifecycle_walks_all_four_states() {
    let handle = Arc::new(CountingHandle::default());
    let controller = AgentRunController::new(handle.clone());
    assert_eq!(controller.lifecycle().await, RunLifecycle::NotStarted);

    controller.on_run_status(RunStatusSignal::InProgress).await;
    assert_eq!(controller.lifecycle().await, RunLifecycle::InProgress);

    controller.on_node_transition(TERMINAL_NODE).await;
    assert_eq!(controller.lifecycle().await, RunLifecycle::Stopping);

    tokio::time::sleep(Duration::from_millis(1100)).await;
    assert_eq!(controller.lifecycle().await, RunLifecycle::Stopped);
    assert_eq!(handle.count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_shortened_delay_is_honored() {
    let handle = Arc::new(CountingHandle::default());
    let controller =
        AgentRunController::new(handle.clone()).with_stop_delay(Duration::from_millis(50));

    controller.on_run_status(RunStatusSignal::InProgress).await;
    controller.on_node_transition(TERMINAL_NODE).await;

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(handle.count(), 1);
}
