//! Equipment model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Entity, ListKey};

/// Equipment entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: String,
    pub name: String,
    pub description: String,
    pub sub_category_id: String,
    pub price_per_day: f64,
    pub available: bool,
    pub location_id: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, alias = "ownerId")]
    pub owner: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Equipment {
    const KIND: &'static str = "Equipment";

    fn id(&self) -> &str {
        &self.id
    }

    fn list_key(&self) -> ListKey {
        ListKey::parent(self.sub_category_id.clone())
    }

    fn label(&self) -> &str {
        &self.name
    }
}

/// Equipment create/update payload
///
/// Each image is a full `data:` URL for new uploads, or the stored
/// reference for images kept from a previous save.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentRequest {
    pub name: String,
    pub description: String,
    pub sub_category_id: String,
    pub price_per_day: f64,
    pub available: bool,
    pub location_id: String,
    pub images: Vec<String>,
}
