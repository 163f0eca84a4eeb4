//! Category form controller

use common::error::{ClientError, ClientResult};

use super::{FormMode, ImageInput, require_id};
use crate::{
    models::{Category, CreateCategoryRequest, UpdateCategoryRequest},
    store::{Completed, Store},
    validation::validate_required,
};

const NAME_MAX_LEN: usize = 100;

/// Category create/edit form
#[derive(Debug, Clone, Default)]
pub struct CategoryForm {
    pub mode: FormMode,
    /// Id of the category being edited
    pub id: Option<String>,
    pub name: String,
    pub image: Option<ImageInput>,
}

impl CategoryForm {
    pub fn create(name: impl Into<String>, image: Option<ImageInput>) -> Self {
        Self {
            mode: FormMode::Create,
            id: None,
            name: name.into(),
            image,
        }
    }

    /// Edit form prefilled from a stored category
    pub fn edit(category: &Category) -> Self {
        Self {
            mode: FormMode::Edit,
            id: Some(category.id.clone()),
            name: category.name.clone(),
            image: Some(ImageInput::Existing(category.image.original.clone())),
        }
    }

    pub fn create_payload(&self) -> ClientResult<CreateCategoryRequest> {
        let name = validate_required("name", "Name", &self.name, NAME_MAX_LEN)?;
        let image = match &self.image {
            Some(image) => image.to_base64("image")?,
            None => None,
        }
        .ok_or_else(|| ClientError::validation("image", "Image is required"))?;

        Ok(CreateCategoryRequest { name, image })
    }

    /// Only a newly picked file is sent; otherwise the server keeps the
    /// stored image.
    pub fn update_payload(&self) -> ClientResult<UpdateCategoryRequest> {
        let id = require_id("id", "Category", self.id.as_deref())?;
        let name = validate_required("name", "Name", &self.name, NAME_MAX_LEN)?;
        let image = match &self.image {
            Some(image) if image.is_new_file() => image.to_base64("image")?,
            _ => None,
        };

        Ok(UpdateCategoryRequest {
            id: id.to_string(),
            name,
            image,
        })
    }

    pub async fn submit(&self, store: &Store) -> ClientResult<Completed<Category>> {
        match self.mode {
            FormMode::Create => store.create_category(&self.create_payload()?).await,
            FormMode::Edit => store.edit_category(&self.update_payload()?).await,
        }
    }
}
