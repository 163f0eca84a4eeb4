//! Catalog models mirrored from the remote service

pub mod category;
pub mod equipment;
pub mod image;
pub mod role;
pub mod sub_category;
pub mod user;

// Re-export for convenience
pub use category::{Category, CreateCategoryRequest, UpdateCategoryRequest};
pub use equipment::{Equipment, EquipmentRequest};
pub use image::ImageVariants;
pub use role::Role;
pub use sub_category::{CreateSubCategoryRequest, SubCategory, UpdateSubCategoryRequest};
pub use user::{AuthUser, LoginCredentials, RegisterRequest};

use serde::Deserialize;

/// Which cached list an entity belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ListKey {
    /// The single top-level list (categories)
    All,
    /// A list scoped to a parent entity id
    Parent(String),
}

impl ListKey {
    /// Key for a list scoped to `parent_id`
    pub fn parent(parent_id: impl Into<String>) -> Self {
        ListKey::Parent(parent_id.into())
    }
}

impl std::fmt::Display for ListKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListKey::All => write!(f, "*"),
            ListKey::Parent(id) => write!(f, "{}", id),
        }
    }
}

/// An entity that can be held in an entity slice
pub trait Entity: Clone + std::fmt::Debug + Send + Sync + 'static {
    /// Human-readable entity kind, used in messages and logs
    const KIND: &'static str;

    fn id(&self) -> &str;

    /// The list this entity lives in, derived from its own foreign key
    fn list_key(&self) -> ListKey;

    /// Short label for success messages
    fn label(&self) -> &str;
}

/// Body returned by delete endpoints
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DeleteResponse {
    pub message: String,
}
