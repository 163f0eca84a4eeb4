//! Sub-category model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Category, Entity, ImageVariants, ListKey};

/// Sub-category entity
///
/// The service either reports the parent as `categoryId` or embeds the
/// whole parent `category`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubCategory {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(rename = "type")]
    pub sub_category_type: String,
    pub min_range: f64,
    pub max_range: f64,
    #[serde(default)]
    pub image: Option<ImageVariants>,
    pub creator_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SubCategory {
    /// Id of the owning category, whichever way the service reported it
    pub fn parent_id(&self) -> &str {
        self.category_id
            .as_deref()
            .or(self.category.as_ref().map(|c| c.id.as_str()))
            .unwrap_or_default()
    }
}

impl Entity for SubCategory {
    const KIND: &'static str = "Sub-category";

    fn id(&self) -> &str {
        &self.id
    }

    fn list_key(&self) -> ListKey {
        ListKey::parent(self.parent_id())
    }

    fn label(&self) -> &str {
        &self.sub_category_type
    }
}

/// New sub-category creation payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubCategoryRequest {
    pub category_id: String,
    #[serde(rename = "type")]
    pub sub_category_type: String,
    pub min_range: f64,
    pub max_range: f64,
    /// Bare base64 image content
    pub image: String,
}

/// Sub-category update payload; see [`super::UpdateCategoryRequest`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubCategoryRequest {
    #[serde(skip)]
    pub id: String,
    #[serde(rename = "type")]
    pub sub_category_type: String,
    pub min_range: f64,
    pub max_range: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
