use std::sync::Arc;

use crate::config::Config;
use crate::curriculum::storage::ObjectStore;
use crate::knowledge::KnowledgeBase;
use crate::llm_client::Completer;
use crate::store::RecordStore;

/// Shared application state injected into all route handlers via Axum extractors.
/// Every external collaborator is constructed in `main` and passed in here.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    /// Curriculum file bucket (S3 / MinIO in production).
    pub objects: Arc<dyn ObjectStore>,
    pub llm: Arc<dyn Completer>,
    pub knowledge: KnowledgeBase,
    pub config: Config,
}
