//! In-memory store used by router-level tests. Mirrors the semantics of
//! `PgLayoutStore`: server-assigned identity, NotFound on missing ids,
//! metadata ordered by creation time.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::layout::{Layout, Metadata, NewLayout};
use crate::store::{LayoutService, MetadataService};

#[derive(Default)]
pub struct InMemoryLayoutStore {
    layouts: RwLock<HashMap<Uuid, Layout>>,
}

impl InMemoryLayoutStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LayoutService for InMemoryLayoutStore {
    async fn get_layout(&self, id: Uuid) -> Result<Layout, AppError> {
        self.layouts
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Layout {id} not found")))
    }

    async fn create_layout(&self, layout: NewLayout) -> Result<Layout, AppError> {
        let id = Uuid::new_v4();
        let created = Utc::now();
        let layout = Layout {
            id,
            definition: layout.definition,
            metadata: Metadata {
                layout_id: id,
                base: layout.metadata,
                created,
            },
        };
        self.layouts.write().await.insert(id, layout.clone());
        Ok(layout)
    }

    async fn update_layout(&self, id: Uuid, layout: NewLayout) -> Result<(), AppError> {
        let mut layouts = self.layouts.write().await;
        let existing = layouts
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Layout {id} not found")))?;
        existing.definition = layout.definition;
        existing.metadata.base = layout.metadata;
        Ok(())
    }

    async fn delete_layout(&self, id: Uuid) -> Result<(), AppError> {
        self.layouts
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Layout {id} not found")))
    }
}

#[async_trait]
impl MetadataService for InMemoryLayoutStore {
    async fn get_metadata(&self) -> Result<Vec<Metadata>, AppError> {
        let mut metadata: Vec<Metadata> = self
            .layouts
            .read()
            .await
            .values()
            .map(|layout| layout.metadata.clone())
            .collect();
        metadata.sort_by(|a, b| a.created.cmp(&b.created).then(a.layout_id.cmp(&b.layout_id)));
        Ok(metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::layout::BaseMetadata;
    use serde_json::json;

    fn draft(name: &str) -> NewLayout {
        NewLayout {
            definition: json!({"type": "Stack", "children": []}),
            metadata: BaseMetadata {
                name: name.to_string(),
                group: "Group 1".to_string(),
                screenshot: None,
                user: "steve".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_create_assigns_distinct_ids() {
        let store = InMemoryLayoutStore::new();
        let a = store.create_layout(draft("A")).await.unwrap();
        let b = store.create_layout(draft("B")).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.id, a.metadata.layout_id);
    }

    #[tokio::test]
    async fn test_update_preserves_id_and_created() {
        let store = InMemoryLayoutStore::new();
        let created = store.create_layout(draft("Before")).await.unwrap();

        store.update_layout(created.id, draft("After")).await.unwrap();

        let fetched = store.get_layout(created.id).await.unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.metadata.created, created.metadata.created);
        assert_eq!(fetched.metadata.base.name, "After");
    }

    #[tokio::test]
    async fn test_update_missing_layout_is_not_found() {
        let store = InMemoryLayoutStore::new();
        let err = store.update_layout(Uuid::new_v4(), draft("X")).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let store = InMemoryLayoutStore::new();
        let layout = store.create_layout(draft("Gone")).await.unwrap();

        store.delete_layout(layout.id).await.unwrap();

        let err = store.get_layout(layout.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_metadata_listing_tracks_creates() {
        let store = InMemoryLayoutStore::new();
        assert!(store.get_metadata().await.unwrap().is_empty());

        for i in 0..3 {
            store.create_layout(draft(&format!("Layout {i}"))).await.unwrap();
        }

        assert_eq!(store.get_metadata().await.unwrap().len(), 3);
    }
}
