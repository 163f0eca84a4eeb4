//! Sub-category operations, scoped by parent category

use common::error::ClientResult;

use crate::{
    models::{CreateSubCategoryRequest, ListKey, SubCategory, UpdateSubCategoryRequest},
    store::{Completed, Store},
};

impl Store {
    pub async fn fetch_sub_categories(
        &self,
        category_id: &str,
    ) -> ClientResult<Completed<Vec<SubCategory>>> {
        self.fetch_list(
            ListKey::parent(category_id),
            self.api.list_sub_categories(category_id),
        )
        .await
    }

    /// Fetch a category's sub-categories unless already loaded this session
    pub async fn fetch_sub_categories_if_needed(
        &self,
        category_id: &str,
    ) -> ClientResult<Completed<Vec<SubCategory>>> {
        match self.cached_list(&ListKey::parent(category_id)).await {
            Some(cached) => Ok(cached),
            None => self.fetch_sub_categories(category_id).await,
        }
    }

    pub async fn find_sub_category_by_id(
        &self,
        id: &str,
    ) -> ClientResult<Completed<SubCategory>> {
        self.find_one(id, self.api.find_sub_category(id)).await
    }

    pub async fn create_sub_category(
        &self,
        payload: &CreateSubCategoryRequest,
    ) -> ClientResult<Completed<SubCategory>> {
        self.create_one(self.api.create_sub_category(payload)).await
    }

    pub async fn edit_sub_category(
        &self,
        payload: &UpdateSubCategoryRequest,
    ) -> ClientResult<Completed<SubCategory>> {
        self.edit_one(&payload.id, self.api.update_sub_category(payload))
            .await
    }

    pub async fn delete_sub_category(&self, id: &str) -> ClientResult<Completed<String>> {
        self.delete_one::<SubCategory, _>(id, self.api.delete_sub_category(id))
            .await
    }
}
