//! Wire-level request/response shapes for the layout API, with explicit
//! per-direction conversions to and from the domain model. Every field
//! assignment is spelled out so a schema change shows up as a compile error
//! instead of a silently dropped field.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::models::layout::{BaseMetadata, Layout, Metadata, NewLayout};

/// Client-supplied body for create/update. All fields default so that
/// missing-field violations surface through `validation` as structured 400s
/// rather than as deserialization rejections.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutRequestDto {
    #[serde(default)]
    pub definition: Value,
    #[serde(default)]
    pub metadata: BaseMetadataDto,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseMetadataDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub screenshot: Option<String>,
    #[serde(default)]
    pub user: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataResponseDto {
    pub id: Uuid,
    pub name: String,
    pub group: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<String>,
    pub user: String,
    pub created: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResponseDto {
    pub id: Uuid,
    pub definition: Value,
    pub metadata: MetadataResponseDto,
}

impl LayoutRequestDto {
    /// Converts into a draft entity. The draft has no identifier and no
    /// creation timestamp; the store assigns both.
    pub fn into_new_layout(self) -> NewLayout {
        NewLayout {
            definition: self.definition,
            metadata: BaseMetadata {
                name: self.metadata.name,
                group: self.metadata.group,
                screenshot: self.metadata.screenshot,
                user: self.metadata.user,
            },
        }
    }
}

impl From<Metadata> for MetadataResponseDto {
    fn from(metadata: Metadata) -> Self {
        MetadataResponseDto {
            id: metadata.layout_id,
            name: metadata.base.name,
            group: metadata.base.group,
            screenshot: metadata.base.screenshot,
            user: metadata.base.user,
            created: metadata.created,
        }
    }
}

impl From<Layout> for LayoutResponseDto {
    fn from(layout: Layout) -> Self {
        LayoutResponseDto {
            id: layout.id,
            definition: layout.definition,
            metadata: layout.metadata.into(),
        }
    }
}
