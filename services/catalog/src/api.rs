//! Remote catalog service interface
//!
//! Operations talk to the service only through [`CatalogApi`], so the store
//! can run against [`http::HttpCatalogApi`] in production and an in-memory
//! fake in tests.

use async_trait::async_trait;
use common::error::{ClientError, ClientResult};
use serde_json::Value;

use crate::models::{
    AuthUser, Category, CreateCategoryRequest, CreateSubCategoryRequest, DeleteResponse,
    Equipment, EquipmentRequest, LoginCredentials, RegisterRequest, SubCategory,
    UpdateCategoryRequest, UpdateSubCategoryRequest,
};

pub mod http;

/// Endpoints of the remote catalog service
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn list_categories(&self) -> ClientResult<Vec<Category>>;
    async fn find_category(&self, id: &str) -> ClientResult<Category>;
    async fn create_category(&self, payload: &CreateCategoryRequest) -> ClientResult<Category>;
    async fn update_category(&self, payload: &UpdateCategoryRequest) -> ClientResult<Category>;
    async fn delete_category(&self, id: &str) -> ClientResult<DeleteResponse>;

    async fn list_sub_categories(&self, category_id: &str) -> ClientResult<Vec<SubCategory>>;
    async fn find_sub_category(&self, id: &str) -> ClientResult<SubCategory>;
    async fn create_sub_category(
        &self,
        payload: &CreateSubCategoryRequest,
    ) -> ClientResult<SubCategory>;
    async fn update_sub_category(
        &self,
        payload: &UpdateSubCategoryRequest,
    ) -> ClientResult<SubCategory>;
    async fn delete_sub_category(&self, id: &str) -> ClientResult<DeleteResponse>;

    async fn list_equipments(&self, sub_category_id: &str) -> ClientResult<Vec<Equipment>>;
    async fn find_equipment(&self, id: &str) -> ClientResult<Equipment>;
    async fn create_equipment(&self, payload: &EquipmentRequest) -> ClientResult<Equipment>;
    async fn update_equipment(
        &self,
        id: &str,
        payload: &EquipmentRequest,
    ) -> ClientResult<Equipment>;
    async fn delete_equipment(&self, id: &str) -> ClientResult<DeleteResponse>;

    async fn login(&self, credentials: &LoginCredentials) -> ClientResult<AuthUser>;
    async fn register(&self, payload: &RegisterRequest) -> ClientResult<AuthUser>;
    async fn logout(&self) -> ClientResult<()>;
    /// The user owning the current session, `None` when there is no session
    async fn current_user(&self) -> ClientResult<Option<AuthUser>>;
}

/// Turn a non-success response into a [`ClientError::Api`].
///
/// Structured bodies carry `message` (a string, or a list of validation
/// messages) or `error`; anything else falls back to the status reason.
pub fn api_error(status: u16, reason: Option<&str>, body: &str) -> ClientError {
    let parsed = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| message_from_body(&value));

    let message = parsed.unwrap_or_else(|| match reason {
        Some(reason) => format!("Request failed: {}", reason),
        None => format!("Request failed with status {}", status),
    });

    ClientError::Api { status, message }
}

fn message_from_body(value: &Value) -> Option<String> {
    let field = value.get("message").or_else(|| value.get("error"))?;
    match field {
        Value::String(message) if !message.trim().is_empty() => Some(message.clone()),
        Value::Array(messages) => {
            let joined = messages
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            (!joined.is_empty()).then_some(joined)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_uses_message_field() {
        let err = api_error(
            401,
            Some("Unauthorized"),
            r#"{"statusCode":401,"message":"Invalid email or password"}"#,
        );
        assert_eq!(
            err,
            ClientError::Api {
                status: 401,
                message: "Invalid email or password".to_string()
            }
        );
    }

    #[test]
    fn test_api_error_joins_message_list() {
        let err = api_error(
            400,
            Some("Bad Request"),
            r#"{"message":["name must not be empty","image must be base64"]}"#,
        );
        assert_eq!(
            err.user_message(),
            "name must not be empty, image must be base64"
        );
    }

    #[test]
    fn test_api_error_reads_error_field() {
        let err = api_error(500, None, r#"{"error":"Database error"}"#);
        assert_eq!(err.user_message(), "Database error");
    }

    #[test]
    fn test_api_error_without_structured_body() {
        let err = api_error(502, Some("Bad Gateway"), "<html>upstream down</html>");
        assert_eq!(err.user_message(), "Request failed: Bad Gateway");

        let err = api_error(599, None, "");
        assert_eq!(err.user_message(), "Request failed with status 599");
    }
}
