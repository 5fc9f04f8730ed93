use std::sync::Arc;

use crate::config::Config;
use crate::editor::session::SessionRegistry;
use crate::export::{PdfRenderer, SitePublisher};
use crate::persistence::DocumentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Owner-scoped document storage. Default: PgDocumentStore.
    pub store: Arc<dyn DocumentStore>,
    pub sessions: Arc<SessionRegistry>,
    /// Default: WkhtmltopdfRenderer, binary from PDF_RENDERER_BIN.
    pub pdf: Arc<dyn PdfRenderer>,
    /// Default: S3SitePublisher writing into S3_BUCKET.
    pub publisher: Arc<dyn SitePublisher>,
    pub config: Config,
}

#[cfg(test)]
pub mod test_support {
    use std::time::Duration;

    use super::*;
    use crate::export::fakes::{FakePdfRenderer, FakeSitePublisher};
    use crate::persistence::memory::MemoryDocumentStore;

    /// State wired to in-memory fakes, with handles kept for assertions.
    pub struct TestState {
        pub state: AppState,
        pub store: Arc<MemoryDocumentStore>,
        pub pdf: Arc<FakePdfRenderer>,
        pub publisher: Arc<FakeSitePublisher>,
    }

    pub fn test_state() -> TestState {
        let config = Config::for_tests();
        let store = Arc::new(MemoryDocumentStore::new());
        let pdf = Arc::new(FakePdfRenderer::default());
        let publisher = Arc::new(FakeSitePublisher::default());
        let state = AppState {
            store: store.clone(),
            sessions: Arc::new(SessionRegistry::new(Duration::from_secs(
                config.session_idle_secs,
            ))),
            pdf: pdf.clone(),
            publisher: publisher.clone(),
            config,
        };
        TestState {
            state,
            store,
            pdf,
            publisher,
        }
    }
}
