use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{FromRow, PgPool};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::layout::{BaseMetadata, Layout, Metadata, NewLayout};
use crate::store::{LayoutService, MetadataService};

/// Postgres-backed layout store. One row per layout in the `layouts` table
/// (see `schema.sql`).
pub struct PgLayoutStore {
    pool: PgPool,
}

impl PgLayoutStore {
    pub fn new(pool: PgPool) -> Self {
        PgLayoutStore { pool }
    }
}

#[derive(Debug, FromRow)]
struct LayoutRow {
    id: Uuid,
    definition: Value,
    name: String,
    group_name: String,
    screenshot: Option<String>,
    user_name: String,
    created: DateTime<Utc>,
}

impl From<LayoutRow> for Metadata {
    fn from(row: LayoutRow) -> Self {
        Metadata {
            layout_id: row.id,
            base: BaseMetadata {
                name: row.name,
                group: row.group_name,
                screenshot: row.screenshot,
                user: row.user_name,
            },
            created: row.created,
        }
    }
}

impl From<LayoutRow> for Layout {
    fn from(row: LayoutRow) -> Self {
        let LayoutRow {
            id,
            definition,
            name,
            group_name,
            screenshot,
            user_name,
            created,
        } = row;
        Layout {
            id,
            definition,
            metadata: Metadata {
                layout_id: id,
                base: BaseMetadata {
                    name,
                    group: group_name,
                    screenshot,
                    user: user_name,
                },
                created,
            },
        }
    }
}

const LAYOUT_COLUMNS: &str = "id, definition, name, group_name, screenshot, user_name, created";

#[async_trait]
impl LayoutService for PgLayoutStore {
    async fn get_layout(&self, id: Uuid) -> Result<Layout, AppError> {
        let row: Option<LayoutRow> = sqlx::query_as(&format!(
            "SELECT {LAYOUT_COLUMNS} FROM layouts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Layout::from)
            .ok_or_else(|| AppError::NotFound(format!("Layout {id} not found")))
    }

    async fn create_layout(&self, layout: NewLayout) -> Result<Layout, AppError> {
        let id = Uuid::new_v4();
        let created = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO layouts (id, definition, name, group_name, screenshot, user_name, created)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(id)
        .bind(&layout.definition)
        .bind(&layout.metadata.name)
        .bind(&layout.metadata.group)
        .bind(&layout.metadata.screenshot)
        .bind(&layout.metadata.user)
        .bind(created)
        .execute(&self.pool)
        .await?;

        info!("Created layout {id}");

        Ok(Layout {
            id,
            definition: layout.definition,
            metadata: Metadata {
                layout_id: id,
                base: layout.metadata,
                created,
            },
        })
    }

    async fn update_layout(&self, id: Uuid, layout: NewLayout) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE layouts
            SET definition = $1, name = $2, group_name = $3, screenshot = $4, user_name = $5
            WHERE id = $6
            "#,
        )
        .bind(&layout.definition)
        .bind(&layout.metadata.name)
        .bind(&layout.metadata.group)
        .bind(&layout.metadata.screenshot)
        .bind(&layout.metadata.user)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Layout {id} not found")));
        }

        info!("Updated layout {id}");
        Ok(())
    }

    async fn delete_layout(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM layouts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Layout {id} not found")));
        }

        info!("Deleted layout {id}");
        Ok(())
    }
}

#[async_trait]
impl MetadataService for PgLayoutStore {
    async fn get_metadata(&self) -> Result<Vec<Metadata>, AppError> {
        let rows: Vec<LayoutRow> = sqlx::query_as(&format!(
            "SELECT {LAYOUT_COLUMNS} FROM layouts ORDER BY created, id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Metadata::from).collect())
    }
}
