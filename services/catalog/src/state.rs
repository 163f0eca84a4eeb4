//! Application state owned by the store

pub mod auth;
pub mod slice;

pub use auth::{AuthAction, AuthState};
pub use slice::{EntitySlice, SliceAction};

use crate::models::{Category, Entity, Equipment, SubCategory};

/// Root state: one shard per concern
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub auth: AuthState,
    pub categories: EntitySlice<Category>,
    pub sub_categories: EntitySlice<SubCategory>,
    pub equipments: EntitySlice<Equipment>,
}

/// Any transition the store can reduce
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Auth(AuthAction),
    Categories(SliceAction<Category>),
    SubCategories(SliceAction<SubCategory>),
    Equipments(SliceAction<Equipment>),
}

impl AppState {
    /// Route an action to the shard that owns it
    pub fn reduce(&mut self, action: Action) {
        match action {
            Action::Auth(action) => self.auth.apply(action),
            Action::Categories(action) => self.categories.apply(action),
            Action::SubCategories(action) => self.sub_categories.apply(action),
            Action::Equipments(action) => self.equipments.apply(action),
        }
    }
}

/// Ties an entity kind to its shard and action variant
pub trait SliceEntity: Entity {
    fn slice(state: &AppState) -> &EntitySlice<Self>;

    fn action(action: SliceAction<Self>) -> Action;
}

impl SliceEntity for Category {
    fn slice(state: &AppState) -> &EntitySlice<Self> {
        &state.categories
    }

    fn action(action: SliceAction<Self>) -> Action {
        Action::Categories(action)
    }
}

impl SliceEntity for SubCategory {
    fn slice(state: &AppState) -> &EntitySlice<Self> {
        &state.sub_categories
    }

    fn action(action: SliceAction<Self>) -> Action {
        Action::SubCategories(action)
    }
}

impl SliceEntity for Equipment {
    fn slice(state: &AppState) -> &EntitySlice<Self> {
        &state.equipments
    }

    fn action(action: SliceAction<Self>) -> Action {
        Action::Equipments(action)
    }
}
