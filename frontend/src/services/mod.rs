//! Data access and task services.
//!
//! This module isolates everything that talks to the outside world:
//!
//! # Services
//!
//! - [`mock`] - Built-in analysis data with simulated latency (default)
//! - [`http`] - Analysis backend over HTTP (`/api/analyze`, `/api/history`)
//! - [`task`] - Component-scoped, cancellable async tasks
//!
//! Components never pick a data source themselves: they ask the Leptos
//! context for an [`AnalysisClient`] and go through [`AnalysisService`].

use std::ops::Deref;
use std::rc::Rc;

use async_trait::async_trait;
use leptos::{provide_context, use_context};

use crate::config::BACKEND_URL;
use crate::{AnalysisRecord, AppResult, HistoryEntry, UploadedFile};

pub mod mock;
pub mod http;
pub mod task;

pub use mock::*;
pub use http::*;
pub use task::*;

/// Source of resume analyses.
///
/// Futures are `?Send`: everything runs on the browser's event loop.
#[async_trait(?Send)]
pub trait AnalysisService {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Analyzes an uploaded resume.
    async fn analyze(&self, file: &UploadedFile) -> AppResult<AnalysisRecord>;

    /// Past analyses, newest first.
    async fn history(&self) -> AppResult<Vec<HistoryEntry>>;
}

/// Shared handle to the configured [`AnalysisService`].
#[derive(Clone)]
pub struct AnalysisClient(Rc<dyn AnalysisService>);

impl AnalysisClient {
    pub fn new(service: impl AnalysisService + 'static) -> Self {
        Self(Rc::new(service))
    }

    /// HTTP backend when a URL was configured at build time, mock data otherwise.
    pub fn from_config() -> Self {
        match BACKEND_URL {
            Some(url) => {
                log::info!("🌐 Using analysis backend at {}", url);
                Self::new(HttpAnalysisService::new(url))
            }
            None => {
                log::info!("🧪 No backend configured, using mock analysis data");
                Self::new(MockAnalysisService::new())
            }
        }
    }

    /// Makes this client available to every component below the caller.
    pub fn provide(self) {
        provide_context(self);
    }

    /// Client from context, falling back to the configured one.
    pub fn use_client() -> Self {
        use_context::<Self>().unwrap_or_else(|| {
            log::warn!("⚠️ No AnalysisClient in context, creating one");
            Self::from_config()
        })
    }
}

impl Deref for AnalysisClient {
    type Target = dyn AnalysisService;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_client_delegates_to_service() {
        let client = AnalysisClient::new(MockAnalysisService::instant());
        assert_eq!(client.name(), "mock");

        let history = block_on(client.history()).unwrap();
        assert_eq!(history.len(), 3);
    }
}
