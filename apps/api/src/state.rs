use std::sync::Arc;

use crate::store::{LayoutService, MetadataService};

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Collaborators are trait objects wired up once in `main`; handlers hold no
/// state of their own between requests.
#[derive(Clone)]
pub struct AppState {
    pub layouts: Arc<dyn LayoutService>,
    pub metadata: Arc<dyn MetadataService>,
}
