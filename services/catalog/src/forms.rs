//! Form controllers
//!
//! Each form validates its input for the current [`FormMode`], assembles the
//! request payload (encoding images on the way) and submits it through the
//! store. Validation failures are returned before any request is made.

pub mod auth;
pub mod category;
pub mod equipment;
pub mod image;
pub mod sub_category;

pub use auth::AuthForm;
pub use category::CategoryForm;
pub use equipment::EquipmentForm;
pub use image::ImageInput;
pub use sub_category::SubCategoryForm;

use common::error::{ClientError, ClientResult};

/// Whether a form creates a new entity or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit,
}

/// Id of the entity being edited; required in edit mode
fn require_id<'a>(field: &'static str, label: &str, id: Option<&'a str>) -> ClientResult<&'a str> {
    id.map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ClientError::validation(field, format!("{} id is missing", label)))
}
