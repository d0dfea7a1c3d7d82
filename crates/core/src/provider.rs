//! Provider Traits
//!
//! Object-safe seams for the capabilities the research workflow consumes but
//! does not implement: web search, report composition, and the handle used to
//! stop a running agent. Concrete implementations live with the host
//! application; tests use in-memory fakes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CoreResult;

/// A single cited source discovered during research.
///
/// Sources are append-only within a run. Uniqueness is not enforced; the
/// producer may report the same URL twice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    /// Page or document title
    pub title: String,
    /// Source URL
    pub url: String,
    /// Short preview text, when the search backend provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

impl Source {
    /// Create a source with a snippet
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        snippet: Option<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            snippet,
        }
    }
}

/// Web search capability.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Search the web for the query and return discovered sources, best first.
    async fn search(&self, query: &str) -> CoreResult<Vec<Source>>;
}

/// Report composition capability.
#[async_trait]
pub trait ReportComposer: Send + Sync {
    /// Compose a markdown research report for the query from the sources.
    async fn compose(&self, query: &str, sources: &[Source]) -> CoreResult<String>;
}

/// Handle to a running agent execution.
///
/// `stop` must be idempotent: callers may issue it more than once per run and
/// every call after the first is a harmless no-op.
#[async_trait]
pub trait RunHandle: Send + Sync {
    /// Request that the run halt.
    async fn stop(&self);
}
