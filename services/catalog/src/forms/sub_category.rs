//! Sub-category form controller

use common::error::{ClientError, ClientResult};

use super::{FormMode, ImageInput, require_id};
use crate::{
    models::{CreateSubCategoryRequest, SubCategory, UpdateSubCategoryRequest},
    store::{Completed, Store},
    validation::{validate_non_negative, validate_required},
};

const TYPE_MAX_LEN: usize = 100;

/// Sub-category create/edit form
#[derive(Debug, Clone, Default)]
pub struct SubCategoryForm {
    pub mode: FormMode,
    /// Id of the sub-category being edited
    pub id: Option<String>,
    /// Parent category, required when creating
    pub category_id: Option<String>,
    pub sub_category_type: String,
    pub min_range: f64,
    pub max_range: f64,
    pub image: Option<ImageInput>,
}

impl SubCategoryForm {
    /// Empty create form under `category_id`
    pub fn create(category_id: impl Into<String>) -> Self {
        Self {
            mode: FormMode::Create,
            category_id: Some(category_id.into()),
            ..Self::default()
        }
    }

    /// Edit form prefilled from a stored sub-category
    pub fn edit(sub_category: &SubCategory) -> Self {
        Self {
            mode: FormMode::Edit,
            id: Some(sub_category.id.clone()),
            category_id: Some(sub_category.parent_id().to_string()),
            sub_category_type: sub_category.sub_category_type.clone(),
            min_range: sub_category.min_range,
            max_range: sub_category.max_range,
            image: sub_category
                .image
                .as_ref()
                .map(|image| ImageInput::Existing(image.original.clone())),
        }
    }

    fn validate_fields(&self) -> ClientResult<String> {
        let sub_category_type =
            validate_required("type", "Type", &self.sub_category_type, TYPE_MAX_LEN)?;
        validate_non_negative("minRange", "Minimum range", self.min_range)?;
        validate_non_negative("maxRange", "Maximum range", self.max_range)?;

        if self.max_range < self.min_range {
            return Err(ClientError::validation(
                "maxRange",
                "Maximum range must not be lower than the minimum range",
            ));
        }

        Ok(sub_category_type)
    }

    pub fn create_payload(&self) -> ClientResult<CreateSubCategoryRequest> {
        let category_id = require_id("categoryId", "Category", self.category_id.as_deref())?;
        let sub_category_type = self.validate_fields()?;
        let image = match &self.image {
            Some(image) => image.to_base64("image")?,
            None => None,
        }
        .ok_or_else(|| ClientError::validation("image", "Image is required"))?;

        Ok(CreateSubCategoryRequest {
            category_id: category_id.to_string(),
            sub_category_type,
            min_range: self.min_range,
            max_range: self.max_range,
            image,
        })
    }

    /// Only a newly picked file is sent; otherwise the server keeps the
    /// stored image.
    pub fn update_payload(&self) -> ClientResult<UpdateSubCategoryRequest> {
        let id = require_id("id", "Sub-category", self.id.as_deref())?;
        let sub_category_type = self.validate_fields()?;
        let image = match &self.image {
            Some(image) if image.is_new_file() => image.to_base64("image")?,
            _ => None,
        };

        Ok(UpdateSubCategoryRequest {
            id: id.to_string(),
            sub_category_type,
            min_range: self.min_range,
            max_range: self.max_range,
            image,
        })
    }

    pub async fn submit(&self, store: &Store) -> ClientResult<Completed<SubCategory>> {
        match self.mode {
            FormMode::Create => store.create_sub_category(&self.create_payload()?).await,
            FormMode::Edit => store.edit_sub_category(&self.update_payload()?).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> SubCategoryForm {
        SubCategoryForm {
            sub_category_type: "Excavator".to_string(),
            min_range: 1.0,
            max_range: 20.0,
            image: Some(ImageInput::file(b"jpg".to_vec(), "image/jpeg")),
            ..SubCategoryForm::create("cat-1")
        }
    }

    #[test]
    fn test_create_payload() {
        let payload = valid_create().create_payload().unwrap();
        assert_eq!(payload.category_id, "cat-1");
        assert_eq!(payload.image, "anBn");

        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(body["categoryId"], "cat-1");
        assert_eq!(body["type"], "Excavator");
        assert_eq!(body["minRange"], 1.0);
    }

    #[test]
    fn test_range_order_is_enforced() {
        let form = SubCategoryForm {
            min_range: 10.0,
            max_range: 2.0,
            ..valid_create()
        };
        assert!(matches!(
            form.create_payload(),
            Err(ClientError::Validation { field: "maxRange", .. })
        ));
    }

    #[test]
    fn test_create_requires_parent_category() {
        let form = SubCategoryForm {
            category_id: None,
            ..valid_create()
        };
        assert!(matches!(
            form.create_payload(),
            Err(ClientError::Validation { field: "categoryId", .. })
        ));
    }

    #[test]
    fn test_edit_with_new_file_sends_image() {
        let form = SubCategoryForm {
            mode: FormMode::Edit,
            id: Some("sub-1".to_string()),
            ..valid_create()
        };
        let payload = form.update_payload().unwrap();
        assert_eq!(payload.image.as_deref(), Some("anBn"));
    }
}
