//! Equipment operations, scoped by parent sub-category

use common::error::ClientResult;

use crate::{
    models::{Equipment, EquipmentRequest, ListKey},
    store::{Completed, Store},
};

impl Store {
    pub async fn fetch_equipments_by_sub_category(
        &self,
        sub_category_id: &str,
    ) -> ClientResult<Completed<Vec<Equipment>>> {
        self.fetch_list(
            ListKey::parent(sub_category_id),
            self.api.list_equipments(sub_category_id),
        )
        .await
    }

    /// Fetch a sub-category's equipment unless already loaded this session
    pub async fn fetch_equipments_if_needed(
        &self,
        sub_category_id: &str,
    ) -> ClientResult<Completed<Vec<Equipment>>> {
        match self.cached_list(&ListKey::parent(sub_category_id)).await {
            Some(cached) => Ok(cached),
            None => self.fetch_equipments_by_sub_category(sub_category_id).await,
        }
    }

    pub async fn find_equipment_by_id(&self, id: &str) -> ClientResult<Completed<Equipment>> {
        self.find_one(id, self.api.find_equipment(id)).await
    }

    pub async fn create_equipment(
        &self,
        payload: &EquipmentRequest,
    ) -> ClientResult<Completed<Equipment>> {
        self.create_one(self.api.create_equipment(payload)).await
    }

    pub async fn update_equipment(
        &self,
        id: &str,
        payload: &EquipmentRequest,
    ) -> ClientResult<Completed<Equipment>> {
        self.edit_one(id, self.api.update_equipment(id, payload))
            .await
    }

    pub async fn delete_equipment(&self, id: &str) -> ClientResult<Completed<String>> {
        self.delete_one::<Equipment, _>(id, self.api.delete_equipment(id))
            .await
    }
}
