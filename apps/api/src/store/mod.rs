//! Collaborator interfaces for layout persistence.
//!
//! Handlers only ever see these traits; the concrete store is chosen in
//! `main` (Postgres) or in tests (in-memory).

#[cfg(test)]
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::layout::{Layout, Metadata, NewLayout};

/// Full-layout access. `get_layout`, `update_layout` and `delete_layout`
/// return `AppError::NotFound` when no layout exists for the id.
#[async_trait]
pub trait LayoutService: Send + Sync {
    async fn get_layout(&self, id: Uuid) -> Result<Layout, AppError>;

    /// Assigns a fresh identifier and creation timestamp, persists the draft,
    /// and returns the fully populated layout.
    async fn create_layout(&self, layout: NewLayout) -> Result<Layout, AppError>;

    /// Replaces the definition and base metadata of an existing layout.
    /// Identifier and creation timestamp are untouched.
    async fn update_layout(&self, id: Uuid, layout: NewLayout) -> Result<(), AppError>;

    async fn delete_layout(&self, id: Uuid) -> Result<(), AppError>;
}

/// Bulk metadata listing, kept separate from full-layout access so listing
/// never has to load layout definitions.
#[async_trait]
pub trait MetadataService: Send + Sync {
    async fn get_metadata(&self) -> Result<Vec<Metadata>, AppError>;
}
