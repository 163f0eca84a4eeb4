//! In-memory catalog service used by the scenario tests

#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use catalog::{
    CatalogApi, Store,
    models::{
        AuthUser, Category, CreateCategoryRequest, CreateSubCategoryRequest, DeleteResponse,
        Equipment, EquipmentRequest, ImageVariants, LoginCredentials, RegisterRequest, Role,
        SubCategory, UpdateCategoryRequest, UpdateSubCategoryRequest,
    },
};
use chrono::Utc;
use common::error::{ClientError, ClientResult};
use tokio::sync::Notify;

#[derive(Default)]
struct Data {
    categories: Vec<Category>,
    sub_categories: Vec<SubCategory>,
    equipments: Vec<Equipment>,
    users: Vec<(AuthUser, String)>,
    session: Option<AuthUser>,
    next_id: usize,
}

impl Data {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{}-{}", prefix, self.next_id)
    }
}

/// Fake service holding its data in memory
#[derive(Default)]
pub struct FakeCatalogApi {
    data: Mutex<Data>,
    calls: AtomicUsize,
    fail_next: Mutex<Option<ClientError>>,
    delete_gate: Mutex<Option<Arc<Notify>>>,
}

pub fn not_found(kind: &str) -> ClientError {
    ClientError::Api {
        status: 404,
        message: format!("{} not found", kind),
    }
}

pub fn category(id: &str, name: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        image: ImageVariants {
            original: format!("uploads/{}.png", id),
            small: Some(format!("uploads/{}-small.png", id)),
        },
        creator_id: "admin-1".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn sub_category(id: &str, category_id: &str, kind: &str) -> SubCategory {
    SubCategory {
        id: id.to_string(),
        category_id: Some(category_id.to_string()),
        category: None,
        sub_category_type: kind.to_string(),
        min_range: 1.0,
        max_range: 12.0,
        image: Some(ImageVariants {
            original: format!("uploads/{}.png", id),
            small: None,
        }),
        creator_id: "admin-1".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn equipment(id: &str, sub_category_id: &str, name: &str) -> Equipment {
    Equipment {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{} for rent", name),
        sub_category_id: sub_category_id.to_string(),
        price_per_day: 80.0,
        available: true,
        location_id: "plovdiv-2".to_string(),
        images: vec![format!("uploads/{}.jpg", id)],
        owner: Some("owner-1".to_string()),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn admin() -> AuthUser {
    AuthUser {
        id: "admin-1".to_string(),
        email: "admin@rent.example.com".to_string(),
        username: Some("admin".to_string()),
        role: Role::Admin,
    }
}

impl FakeCatalogApi {
    pub fn with_categories(self, categories: Vec<Category>) -> Self {
        self.data.lock().unwrap().categories = categories;
        self
    }

    pub fn with_sub_categories(self, sub_categories: Vec<SubCategory>) -> Self {
        self.data.lock().unwrap().sub_categories = sub_categories;
        self
    }

    pub fn with_equipments(self, equipments: Vec<Equipment>) -> Self {
        self.data.lock().unwrap().equipments = equipments;
        self
    }

    pub fn with_user(self, user: AuthUser, password: &str) -> Self {
        self.data
            .lock()
            .unwrap()
            .users
            .push((user, password.to_string()));
        self
    }

    pub fn with_session(self, user: AuthUser) -> Self {
        self.data.lock().unwrap().session = Some(user);
        self
    }

    /// Make the next request fail with `err`
    pub fn fail_next(&self, err: ClientError) {
        *self.fail_next.lock().unwrap() = Some(err);
    }

    /// Hold delete requests until the returned handle is notified
    pub fn gate_deletes(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.delete_gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    /// Number of requests received so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn stored_sub_category(&self, id: &str) -> Option<SubCategory> {
        let data = self.data.lock().unwrap();
        data.sub_categories.iter().find(|s| s.id == id).cloned()
    }

    fn begin(&self) -> ClientResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.fail_next.lock().unwrap().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn wait_delete_gate(&self) {
        let gate = self.delete_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
    }
}

/// Store wired to a shared fake
pub fn store_with(api: FakeCatalogApi) -> (Store, Arc<FakeCatalogApi>) {
    let api = Arc::new(api);
    (Store::new(api.clone()), api)
}

#[async_trait]
impl CatalogApi for FakeCatalogApi {
    async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        self.begin()?;
        Ok(self.data.lock().unwrap().categories.clone())
    }

    async fn find_category(&self, id: &str) -> ClientResult<Category> {
        self.begin()?;
        let data = self.data.lock().unwrap();
        data.categories
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| not_found("Category"))
    }

    async fn create_category(&self, payload: &CreateCategoryRequest) -> ClientResult<Category> {
        self.begin()?;
        let mut data = self.data.lock().unwrap();
        let id = data.next_id("cat");
        let created = category(&id, &payload.name);
        data.categories.push(created.clone());
        Ok(created)
    }

    async fn update_category(&self, payload: &UpdateCategoryRequest) -> ClientResult<Category> {
        self.begin()?;
        let mut data = self.data.lock().unwrap();
        let stored = data
            .categories
            .iter_mut()
            .find(|c| c.id == payload.id)
            .ok_or_else(|| not_found("Category"))?;
        stored.name = payload.name.clone();
        if payload.image.is_some() {
            stored.image.original = format!("uploads/{}-v2.png", stored.id);
        }
        stored.updated_at = Utc::now();
        Ok(stored.clone())
    }

    async fn delete_category(&self, id: &str) -> ClientResult<DeleteResponse> {
        self.begin()?;
        self.wait_delete_gate().await;
        let mut data = self.data.lock().unwrap();
        let before = data.categories.len();
        data.categories.retain(|c| c.id != id);
        if data.categories.len() == before {
            return Err(not_found("Category"));
        }
        Ok(DeleteResponse {
            message: "Category deleted successfully".to_string(),
        })
    }

    async fn list_sub_categories(&self, category_id: &str) -> ClientResult<Vec<SubCategory>> {
        self.begin()?;
        let data = self.data.lock().unwrap();
        Ok(data
            .sub_categories
            .iter()
            .filter(|s| s.parent_id() == category_id)
            .cloned()
            .collect())
    }

    async fn find_sub_category(&self, id: &str) -> ClientResult<SubCategory> {
        self.begin()?;
        self.stored_sub_category(id)
            .ok_or_else(|| not_found("Sub-category"))
    }

    async fn create_sub_category(
        &self,
        payload: &CreateSubCategoryRequest,
    ) -> ClientResult<SubCategory> {
        self.begin()?;
        let mut data = self.data.lock().unwrap();
        let id = data.next_id("sub");
        let mut created = sub_category(&id, &payload.category_id, &payload.sub_category_type);
        created.min_range = payload.min_range;
        created.max_range = payload.max_range;
        data.sub_categories.push(created.clone());
        Ok(created)
    }

    async fn update_sub_category(
        &self,
        payload: &UpdateSubCategoryRequest,
    ) -> ClientResult<SubCategory> {
        self.begin()?;
        let mut data = self.data.lock().unwrap();
        let stored = data
            .sub_categories
            .iter_mut()
            .find(|s| s.id == payload.id)
            .ok_or_else(|| not_found("Sub-category"))?;
        stored.sub_category_type = payload.sub_category_type.clone();
        stored.min_range = payload.min_range;
        stored.max_range = payload.max_range;
        if payload.image.is_some() {
            stored.image = Some(ImageVariants {
                original: format!("uploads/{}-v2.png", stored.id),
                small: None,
            });
        }
        Ok(stored.clone())
    }

    async fn delete_sub_category(&self, id: &str) -> ClientResult<DeleteResponse> {
        self.begin()?;
        self.wait_delete_gate().await;
        let mut data = self.data.lock().unwrap();
        data.sub_categories.retain(|s| s.id != id);
        Ok(DeleteResponse {
            message: String::new(),
        })
    }

    async fn list_equipments(&self, sub_category_id: &str) -> ClientResult<Vec<Equipment>> {
        self.begin()?;
        let data = self.data.lock().unwrap();
        Ok(data
            .equipments
            .iter()
            .filter(|e| e.sub_category_id == sub_category_id)
            .cloned()
            .collect())
    }

    async fn find_equipment(&self, id: &str) -> ClientResult<Equipment> {
        self.begin()?;
        let data = self.data.lock().unwrap();
        data.equipments
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| not_found("Equipment"))
    }

    async fn create_equipment(&self, payload: &EquipmentRequest) -> ClientResult<Equipment> {
        self.begin()?;
        let mut data = self.data.lock().unwrap();
        let id = data.next_id("eq");
        let mut created = equipment(&id, &payload.sub_category_id, &payload.name);
        created.images = payload.images.clone();
        created.price_per_day = payload.price_per_day;
        data.equipments.push(created.clone());
        Ok(created)
    }

    async fn update_equipment(
        &self,
        id: &str,
        payload: &EquipmentRequest,
    ) -> ClientResult<Equipment> {
        self.begin()?;
        let mut data = self.data.lock().unwrap();
        let stored = data
            .equipments
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| not_found("Equipment"))?;
        stored.name = payload.name.clone();
        stored.description = payload.description.clone();
        stored.price_per_day = payload.price_per_day;
        stored.available = payload.available;
        stored.images = payload.images.clone();
        Ok(stored.clone())
    }

    async fn delete_equipment(&self, id: &str) -> ClientResult<DeleteResponse> {
        self.begin()?;
        self.wait_delete_gate().await;
        let mut data = self.data.lock().unwrap();
        data.equipments.retain(|e| e.id != id);
        Ok(DeleteResponse {
            message: "Equipment removed".to_string(),
        })
    }

    async fn login(&self, credentials: &LoginCredentials) -> ClientResult<AuthUser> {
        self.begin()?;
        let mut data = self.data.lock().unwrap();
        let user = data
            .users
            .iter()
            .find(|(user, password)| {
                user.email == credentials.email && *password == credentials.password
            })
            .map(|(user, _)| user.clone())
            .ok_or(ClientError::Api {
                status: 401,
                message: "Invalid email or password".to_string(),
            })?;
        data.session = Some(user.clone());
        Ok(user)
    }

    async fn register(&self, payload: &RegisterRequest) -> ClientResult<AuthUser> {
        self.begin()?;
        let mut data = self.data.lock().unwrap();
        if data.users.iter().any(|(user, _)| user.email == payload.email) {
            return Err(ClientError::Api {
                status: 409,
                message: "Email is already registered".to_string(),
            });
        }
        let user = AuthUser {
            id: data.next_id("user"),
            email: payload.email.clone(),
            username: Some(payload.username.clone()),
            role: Role::User,
        };
        data.users.push((user.clone(), payload.password.clone()));
        data.session = Some(user.clone());
        Ok(user)
    }

    async fn logout(&self) -> ClientResult<()> {
        self.begin()?;
        self.data.lock().unwrap().session = None;
        Ok(())
    }

    async fn current_user(&self) -> ClientResult<Option<AuthUser>> {
        self.begin()?;
        Ok(self.data.lock().unwrap().session.clone())
    }
}
