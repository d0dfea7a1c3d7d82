//! Agent Run Controller
//!
//! Watches node-transition and run-status signals for one agent session and
//! issues a single delayed stop once the terminal workflow node fires. The
//! delay gives the final state flush time to arrive after the terminal-node
//! signal; the run-identity check keeps a stale timer from stopping a run
//! that started while the stop was pending.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use uuid::Uuid;

use deep_research_core::{AgentEvent, RunHandle, RunStatusSignal, TERMINAL_NODE};

/// Delay between the terminal-node signal and the issued stop.
pub const STOP_DELAY: Duration = Duration::from_millis(1000);

/// Lifecycle of one agent run as the controller sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RunLifecycle {
    /// No run has been observed yet
    #[default]
    NotStarted,
    /// A run is executing
    InProgress,
    /// The terminal node fired; a stop is scheduled
    Stopping,
    /// The stop has been issued
    Stopped,
}

impl std::fmt::Display for RunLifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunLifecycle::NotStarted => write!(f, "not_started"),
            RunLifecycle::InProgress => write!(f, "in_progress"),
            RunLifecycle::Stopping => write!(f, "stopping"),
            RunLifecycle::Stopped => write!(f, "stopped"),
        }
    }
}

#[derive(Debug)]
struct ControllerInner {
    lifecycle: RunLifecycle,
    /// Identity of the run the controller is currently tracking
    run_id: Option<Uuid>,
    /// Token for the pending stop task, if one is scheduled
    pending_stop: Option<CancellationToken>,
    /// Whether the stop has been issued for the current run
    stop_issued: bool,
    /// The in-progress flag cleared when the stop fires
    in_progress: bool,
}

impl ControllerInner {
    fn start_new_run(&mut self) -> Uuid {
        if let Some(token) = self.pending_stop.take() {
            token.cancel();
        }
        let run_id = Uuid::new_v4();
        self.lifecycle = RunLifecycle::InProgress;
        self.run_id = Some(run_id);
        self.stop_issued = false;
        self.in_progress = true;
        run_id
    }
}

/// Controller for the run lifecycle of one agent session.
#[derive(Clone)]
pub struct AgentRunController {
    inner: Arc<Mutex<ControllerInner>>,
    handle: Arc<dyn RunHandle>,
    stop_delay: Duration,
}

impl AgentRunController {
    /// Create a controller stopping runs through the given handle.
    pub fn new(handle: Arc<dyn RunHandle>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ControllerInner {
                lifecycle: RunLifecycle::NotStarted,
                run_id: None,
                pending_stop: None,
                stop_issued: false,
                in_progress: false,
            })),
            handle,
            stop_delay: STOP_DELAY,
        }
    }

    /// Override the stop delay. The contract value is one second; tests
    /// shorten it.
    pub fn with_stop_delay(mut self, delay: Duration) -> Self {
        self.stop_delay = delay;
        self
    }

    /// Route an agent event to the matching handler. State events are not
    /// the controller's concern and are ignored.
    pub async fn on_event(&self, event: &AgentEvent) {
        match event {
            AgentEvent::NodeTransition { node } => self.on_node_transition(node).await,
            AgentEvent::RunStatus { signal } => self.on_run_status(*signal).await,
            AgentEvent::StateSnapshot { .. } | AgentEvent::StateDelta { .. } => {}
        }
    }

    /// Handle a run-status signal.
    ///
    /// An active signal from an idle controller starts a new run. While a
    /// stop is pending, only `InProgress` counts as a new run: the old run
    /// keeps reporting `Complete` until it is torn down, and treating that
    /// tail as a new start would cancel every debounced stop.
    pub async fn on_run_status(&self, signal: RunStatusSignal) {
        let mut inner = self.inner.lock().await;
        let start = match inner.lifecycle {
            RunLifecycle::NotStarted | RunLifecycle::Stopped => signal.is_active(),
            RunLifecycle::Stopping => signal == RunStatusSignal::InProgress,
            RunLifecycle::InProgress => false,
        };
        if start {
            let run_id = inner.start_new_run();
            info!(%run_id, "run started");
        }
    }

    /// Handle a node-transition event. Only the terminal sentinel matters;
    /// it schedules the delayed stop. Duplicate terminal signals while the
    /// stop is pending are ignored.
    pub async fn on_node_transition(&self, node: &str) {
        if node != TERMINAL_NODE {
            debug!(node, "node transition");
            return;
        }

        let mut inner = self.inner.lock().await;
        match inner.lifecycle {
            RunLifecycle::InProgress => {}
            RunLifecycle::Stopping => {
                debug!("duplicate terminal signal ignored, stop already pending");
                return;
            }
            RunLifecycle::NotStarted | RunLifecycle::Stopped => {
                debug!("terminal signal without an active run ignored");
                return;
            }
        }

        let token = CancellationToken::new();
        inner.lifecycle = RunLifecycle::Stopping;
        inner.pending_stop = Some(token.clone());
        let run_id = inner.run_id;
        drop(inner);

        debug!(delay_ms = self.stop_delay.as_millis() as u64, "stop scheduled");

        let inner = Arc::clone(&self.inner);
        let handle = Arc::clone(&self.handle);
        let delay = self.stop_delay;
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    debug!("pending stop cancelled");
                }
                _ = tokio::time::sleep(delay) => {
                    let fire = {
                        let mut inner = inner.lock().await;
                        // The run the timer was armed for must still be the
                        // tracked run, and the stop must not have fired yet.
                        if inner.run_id != run_id || inner.stop_issued {
                            false
                        } else {
                            inner.stop_issued = true;
                            inner.in_progress = false;
                            inner.lifecycle = RunLifecycle::Stopped;
                            inner.pending_stop = None;
                            true
                        }
                    };
                    if fire {
                        info!("issuing stop");
                        handle.stop().await;
                    }
                }
            }
        });
    }

    /// Current lifecycle state.
    pub async fn lifecycle(&self) -> RunLifecycle {
        self.inner.lock().await.lifecycle
    }

    /// Whether a run is currently considered in progress.
    pub async fn is_in_progress(&self) -> bool {
        self.inner.lock().await.in_progress
    }

    /// Identity of the tracked run, if any.
    pub async fn run_id(&self) -> Option<Uuid> {
        self.inner.lock().await.run_id
    }
}

impl std::fmt::Debug for AgentRunController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentRunController")
            .field("stop_delay", &self.stop_delay)
            .finish()
    }
}
