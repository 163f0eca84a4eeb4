//! `reqwest`-backed implementation of the catalog service interface

use async_trait::async_trait;
use common::{
    config::ClientConfig,
    error::{ClientError, ClientResult},
};
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::{debug, warn};

use super::{CatalogApi, api_error};
use crate::models::{
    AuthUser, Category, CreateCategoryRequest, CreateSubCategoryRequest, DeleteResponse,
    Equipment, EquipmentRequest, LoginCredentials, RegisterRequest, SubCategory,
    UpdateCategoryRequest, UpdateSubCategoryRequest,
};

/// Auth endpoints answer either `{ "user": {...} }` or the bare user
#[derive(Deserialize)]
#[serde(untagged)]
enum UserEnvelope {
    Wrapped { user: AuthUser },
    Bare(AuthUser),
}

impl From<UserEnvelope> for AuthUser {
    fn from(envelope: UserEnvelope) -> Self {
        match envelope {
            UserEnvelope::Wrapped { user } | UserEnvelope::Bare(user) => user,
        }
    }
}

/// HTTP client for the remote catalog service
///
/// The session lives in a cookie kept by the client's cookie store.
#[derive(Clone)]
pub struct HttpCatalogApi {
    client: Client,
    base_url: String,
}

impl HttpCatalogApi {
    /// Create a new client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ClientError::Configuration(format!("Invalid HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and return the raw body of a successful response
    async fn execute(&self, request: RequestBuilder) -> ClientResult<String> {
        let response = request.send().await.map_err(|e| {
            warn!("Catalog request failed: {}", e);
            ClientError::Network(e.to_string())
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !status.is_success() {
            debug!("Catalog service answered {}", status);
            return Err(api_error(status.as_u16(), status.canonical_reason(), &body));
        }

        Ok(body)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let body = self.execute(request).await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        self.send(self.client.get(self.url("/categories"))).await
    }

    async fn find_category(&self, id: &str) -> ClientResult<Category> {
        self.send(self.client.get(self.url(&format!("/categories/{}", id))))
            .await
    }

    async fn create_category(&self, payload: &CreateCategoryRequest) -> ClientResult<Category> {
        self.send(self.client.post(self.url("/categories")).json(payload))
            .await
    }

    async fn update_category(&self, payload: &UpdateCategoryRequest) -> ClientResult<Category> {
        let url = self.url(&format!("/categories/{}", payload.id));
        self.send(self.client.patch(url).json(payload)).await
    }

    async fn delete_category(&self, id: &str) -> ClientResult<DeleteResponse> {
        self.send(self.client.delete(self.url(&format!("/categories/{}", id))))
            .await
    }

    async fn list_sub_categories(&self, category_id: &str) -> ClientResult<Vec<SubCategory>> {
        let url = self.url(&format!("/categories/{}/sub-categories", category_id));
        self.send(self.client.get(url)).await
    }

    async fn find_sub_category(&self, id: &str) -> ClientResult<SubCategory> {
        self.send(self.client.get(self.url(&format!("/sub-categories/{}", id))))
            .await
    }

    async fn create_sub_category(
        &self,
        payload: &CreateSubCategoryRequest,
    ) -> ClientResult<SubCategory> {
        self.send(self.client.post(self.url("/sub-categories")).json(payload))
            .await
    }

    async fn update_sub_category(
        &self,
        payload: &UpdateSubCategoryRequest,
    ) -> ClientResult<SubCategory> {
        let url = self.url(&format!("/sub-categories/{}", payload.id));
        self.send(self.client.patch(url).json(payload)).await
    }

    async fn delete_sub_category(&self, id: &str) -> ClientResult<DeleteResponse> {
        self.send(self.client.delete(self.url(&format!("/sub-categories/{}", id))))
            .await
    }

    async fn list_equipments(&self, sub_category_id: &str) -> ClientResult<Vec<Equipment>> {
        let url = self.url(&format!("/sub-categories/{}/equipments", sub_category_id));
        self.send(self.client.get(url)).await
    }

    async fn find_equipment(&self, id: &str) -> ClientResult<Equipment> {
        self.send(self.client.get(self.url(&format!("/equipments/{}", id))))
            .await
    }

    async fn create_equipment(&self, payload: &EquipmentRequest) -> ClientResult<Equipment> {
        self.send(self.client.post(self.url("/equipments")).json(payload))
            .await
    }

    async fn update_equipment(
        &self,
        id: &str,
        payload: &EquipmentRequest,
    ) -> ClientResult<Equipment> {
        let url = self.url(&format!("/equipments/{}", id));
        self.send(self.client.patch(url).json(payload)).await
    }

    async fn delete_equipment(&self, id: &str) -> ClientResult<DeleteResponse> {
        self.send(self.client.delete(self.url(&format!("/equipments/{}", id))))
            .await
    }

    async fn login(&self, credentials: &LoginCredentials) -> ClientResult<AuthUser> {
        let envelope: UserEnvelope = self
            .send(self.client.post(self.url("/auth/login")).json(credentials))
            .await?;
        Ok(envelope.into())
    }

    async fn register(&self, payload: &RegisterRequest) -> ClientResult<AuthUser> {
        let envelope: UserEnvelope = self
            .send(self.client.post(self.url("/auth/register")).json(payload))
            .await?;
        Ok(envelope.into())
    }

    async fn logout(&self) -> ClientResult<()> {
        self.execute(self.client.post(self.url("/auth/logout")))
            .await
            .map(|_| ())
    }

    async fn current_user(&self) -> ClientResult<Option<AuthUser>> {
        match self
            .send::<UserEnvelope>(self.client.get(self.url("/auth/me")))
            .await
        {
            Ok(envelope) => Ok(Some(envelope.into())),
            Err(e) if e.is_unauthorized() => Ok(None),
            Err(e) => Err(e),
        }
    }
}
