//! Category operations

use common::error::ClientResult;

use crate::{
    models::{Category, CreateCategoryRequest, ListKey, UpdateCategoryRequest},
    store::{Completed, Store},
};

impl Store {
    pub async fn fetch_categories(&self) -> ClientResult<Completed<Vec<Category>>> {
        self.fetch_list(ListKey::All, self.api.list_categories())
            .await
    }

    /// Fetch categories unless they were already loaded this session
    pub async fn fetch_categories_if_needed(&self) -> ClientResult<Completed<Vec<Category>>> {
        match self.cached_list(&ListKey::All).await {
            Some(cached) => Ok(cached),
            None => self.fetch_categories().await,
        }
    }

    pub async fn find_category_by_id(&self, id: &str) -> ClientResult<Completed<Category>> {
        self.find_one(id, self.api.find_category(id)).await
    }

    pub async fn create_category(
        &self,
        payload: &CreateCategoryRequest,
    ) -> ClientResult<Completed<Category>> {
        self.create_one(self.api.create_category(payload)).await
    }

    pub async fn edit_category(
        &self,
        payload: &UpdateCategoryRequest,
    ) -> ClientResult<Completed<Category>> {
        self.edit_one(&payload.id, self.api.update_category(payload))
            .await
    }

    pub async fn delete_category(&self, id: &str) -> ClientResult<Completed<String>> {
        self.delete_one::<Category, _>(id, self.api.delete_category(id))
            .await
    }
}
