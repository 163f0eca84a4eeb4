//! Equipment form controller

use common::error::{ClientError, ClientResult};

use super::{FormMode, ImageInput, require_id};
use crate::{
    models::{Equipment, EquipmentRequest},
    store::{Completed, Store},
    validation::validate_required,
};

const NAME_MAX_LEN: usize = 150;
const DESCRIPTION_MAX_LEN: usize = 5000;

/// Equipment create/edit form
///
/// Unlike categories, equipment carries a list of images and both modes
/// send the full list: kept images as their stored reference, new files as
/// `data:` URLs.
#[derive(Debug, Clone)]
pub struct EquipmentForm {
    pub mode: FormMode,
    /// Id of the equipment being edited
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub sub_category_id: String,
    pub price_per_day: f64,
    pub available: bool,
    pub location_id: String,
    pub images: Vec<ImageInput>,
}

impl Default for EquipmentForm {
    fn default() -> Self {
        Self {
            mode: FormMode::Create,
            id: None,
            name: String::new(),
            description: String::new(),
            sub_category_id: String::new(),
            price_per_day: 0.0,
            available: true,
            location_id: String::new(),
            images: Vec::new(),
        }
    }
}

impl EquipmentForm {
    /// Empty create form under `sub_category_id`
    pub fn create(sub_category_id: impl Into<String>) -> Self {
        Self {
            sub_category_id: sub_category_id.into(),
            ..Self::default()
        }
    }

    /// Edit form prefilled from stored equipment
    pub fn edit(equipment: &Equipment) -> Self {
        Self {
            mode: FormMode::Edit,
            id: Some(equipment.id.clone()),
            name: equipment.name.clone(),
            description: equipment.description.clone(),
            sub_category_id: equipment.sub_category_id.clone(),
            price_per_day: equipment.price_per_day,
            available: equipment.available,
            location_id: equipment.location_id.clone(),
            images: equipment
                .images
                .iter()
                .cloned()
                .map(ImageInput::Existing)
                .collect(),
        }
    }

    /// Drop the image at `index` (preview "remove" button)
    pub fn remove_image(&mut self, index: usize) {
        if index < self.images.len() {
            self.images.remove(index);
        }
    }

    pub fn payload(&self) -> ClientResult<EquipmentRequest> {
        let name = validate_required("name", "Name", &self.name, NAME_MAX_LEN)?;
        let description = validate_required(
            "description",
            "Description",
            &self.description,
            DESCRIPTION_MAX_LEN,
        )?;
        let sub_category_id =
            validate_required("subCategoryId", "Sub-category", &self.sub_category_id, 64)?;
        let location_id = validate_required("locationId", "Location", &self.location_id, 64)?;

        if !self.price_per_day.is_finite() || self.price_per_day <= 0.0 {
            return Err(ClientError::validation(
                "pricePerDay",
                "Price per day must be greater than zero",
            ));
        }

        let mut images = Vec::with_capacity(self.images.len());
        for image in &self.images {
            if let Some(encoded) = image.to_data_url("images")? {
                images.push(encoded);
            }
        }
        if images.is_empty() {
            return Err(ClientError::validation(
                "images",
                "At least one image is required",
            ));
        }

        Ok(EquipmentRequest {
            name,
            description,
            sub_category_id,
            price_per_day: self.price_per_day,
            available: self.available,
            location_id,
            images,
        })
    }

    pub async fn submit(&self, store: &Store) -> ClientResult<Completed<Equipment>> {
        match self.mode {
            FormMode::Create => store.create_equipment(&self.payload()?).await,
            FormMode::Edit => {
                let id = require_id("id", "Equipment", self.id.as_deref())?;
                let payload = self.payload()?;
                store.update_equipment(id, &payload).await
            }
        }
    }
}
