use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

/// Descriptive fields a client supplies for create/update.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseMetadata {
    pub name: String,
    pub group: String,
    pub screenshot: Option<String>,
    pub user: String,
}

/// Metadata as persisted: the client-supplied base fields plus the
/// server-assigned layout identity and creation timestamp.
#[derive(Debug, Clone)]
pub struct Metadata {
    pub layout_id: Uuid,
    pub base: BaseMetadata,
    pub created: DateTime<Utc>,
}

/// The persisted layout resource. The definition is an opaque JSON document;
/// this service never interprets its contents.
#[derive(Debug, Clone)]
pub struct Layout {
    pub id: Uuid,
    pub definition: Value,
    pub metadata: Metadata,
}

/// A layout as submitted by a client. Deliberately carries no identifier and
/// no creation timestamp: the store assigns both, so a client-chosen id cannot
/// exist by construction.
#[derive(Debug, Clone)]
pub struct NewLayout {
    pub definition: Value,
    pub metadata: BaseMetadata,
}
