//! Category model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Entity, ImageVariants, ListKey};

/// Category entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub image: ImageVariants,
    pub creator_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Category {
    const KIND: &'static str = "Category";

    fn id(&self) -> &str {
        &self.id
    }

    fn list_key(&self) -> ListKey {
        ListKey::All
    }

    fn label(&self) -> &str {
        &self.name
    }
}

/// New category creation payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateCategoryRequest {
    pub name: String,
    /// Bare base64 image content
    pub image: String,
}

/// Category update payload
///
/// `image` is left out of the body entirely when no new file was chosen so
/// that the server keeps the stored one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateCategoryRequest {
    #[serde(skip)]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
