//! Generic entity slice shared by categories, sub-categories and equipment
//!
//! A slice holds the authoritative in-memory copy of fetched entities, keyed
//! by the list they belong to, plus the transient state of the requests
//! touching them. Every request reduces a `*Pending` action followed by
//! exactly one `*Fulfilled` or `*Rejected` action.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::models::{Entity, ListKey};

/// Transitions accepted by an [`EntitySlice`]
#[derive(Debug, Clone, PartialEq)]
pub enum SliceAction<E> {
    FetchPending { key: ListKey },
    FetchFulfilled { key: ListKey, items: Vec<E> },
    FetchRejected { key: ListKey, error: String },

    FindPending { id: String },
    FindFulfilled(E),
    FindRejected { id: String, error: String },

    CreatePending,
    CreateFulfilled(E),
    CreateRejected { error: String },

    EditPending { id: String },
    EditFulfilled(E),
    EditRejected { id: String, error: String },

    DeletePending { id: String },
    DeleteFulfilled { id: String, message: String },
    DeleteRejected { id: String, error: String },

    /// Drop the selected entity (detail view teardown)
    ResetSelected,
    /// Forget fetched lists so the next `fetch_*_if_needed` hits the server.
    /// `None` invalidates every key.
    Invalidate(Option<ListKey>),
}

/// State shard for one entity kind
#[derive(Debug, Clone)]
pub struct EntitySlice<E: Entity> {
    lists: HashMap<ListKey, Vec<E>>,
    fetched: HashSet<ListKey>,
    in_flight: u32,
    /// In-flight fetches per list key
    loading: HashMap<ListKey, u32>,
    selected: Option<E>,
    deleting_id: Option<String>,
    error: Option<String>,
    message: String,
}

impl<E: Entity> Default for EntitySlice<E> {
    fn default() -> Self {
        Self {
            lists: HashMap::new(),
            fetched: HashSet::new(),
            in_flight: 0,
            loading: HashMap::new(),
            selected: None,
            deleting_id: None,
            error: None,
            message: String::new(),
        }
    }
}

impl<E: Entity> EntitySlice<E> {
    /// Apply one transition
    pub fn apply(&mut self, action: SliceAction<E>) {
        match action {
            SliceAction::FetchPending { key } => {
                self.begin();
                *self.loading.entry(key).or_default() += 1;
            }
            SliceAction::FetchFulfilled { key, items } => {
                self.finish(Some(&key));
                debug!("{} list {} replaced with {} items", E::KIND, key, items.len());
                self.fetched.insert(key.clone());
                self.lists.insert(key, items);
                self.error = None;
            }
            SliceAction::FetchRejected { key, error } => {
                self.finish(Some(&key));
                self.error = Some(error);
            }

            SliceAction::FindPending { id } => {
                self.begin();
                // A detail view for `id` must not keep showing another entity
                if self.selected.as_ref().is_some_and(|s| s.id() != id) {
                    self.selected = None;
                }
            }
            SliceAction::FindFulfilled(entity) => {
                self.finish(None);
                self.selected = Some(entity);
                self.error = None;
            }
            SliceAction::FindRejected { error, .. } => {
                self.finish(None);
                self.error = Some(error);
            }

            SliceAction::CreatePending => self.begin(),
            SliceAction::CreateFulfilled(entity) => {
                self.finish(None);
                self.insert_created(entity);
                self.error = None;
            }
            SliceAction::CreateRejected { error } => {
                self.finish(None);
                self.error = Some(error);
            }

            SliceAction::EditPending { .. } => self.begin(),
            SliceAction::EditFulfilled(entity) => {
                self.finish(None);
                self.replace_edited(entity);
                self.error = None;
            }
            SliceAction::EditRejected { error, .. } => {
                self.finish(None);
                self.error = Some(error);
            }

            SliceAction::DeletePending { id } => {
                self.deleting_id = Some(id);
                self.error = None;
                self.message.clear();
            }
            SliceAction::DeleteFulfilled { id, message } => {
                self.clear_deleting(&id);
                self.remove_everywhere(&id);
                self.message = message;
                self.error = None;
            }
            SliceAction::DeleteRejected { id, error } => {
                self.clear_deleting(&id);
                self.error = Some(error);
            }

            SliceAction::ResetSelected => self.selected = None,
            SliceAction::Invalidate(Some(key)) => {
                self.fetched.remove(&key);
            }
            SliceAction::Invalidate(None) => self.fetched.clear(),
        }
    }

    fn begin(&mut self) {
        self.in_flight += 1;
        self.error = None;
        self.message.clear();
    }

    fn finish(&mut self, key: Option<&ListKey>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        let Some(key) = key else { return };
        if let Some(count) = self.loading.get_mut(key) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                self.loading.remove(key);
            }
        }
    }

    fn clear_deleting(&mut self, id: &str) {
        if self.deleting_id.as_deref() == Some(id) {
            self.deleting_id = None;
        }
    }

    fn insert_created(&mut self, entity: E) {
        let key = entity.list_key();
        // Lists that were never fetched stay unloaded; the next fetch brings
        // the new entity along with everything else.
        let Some(list) = self.lists.get_mut(&key) else {
            debug!("{} list {} not loaded, skipping local insert", E::KIND, key);
            return;
        };

        match list.iter_mut().find(|e| e.id() == entity.id()) {
            Some(existing) => *existing = entity,
            None => list.push(entity),
        }
    }

    fn replace_edited(&mut self, entity: E) {
        for list in self.lists.values_mut() {
            if let Some(existing) = list.iter_mut().find(|e| e.id() == entity.id()) {
                *existing = entity.clone();
            }
        }

        if let Some(selected) = self.selected.as_mut().filter(|s| s.id() == entity.id()) {
            *selected = entity;
        }
    }

    fn remove_everywhere(&mut self, id: &str) {
        for list in self.lists.values_mut() {
            list.retain(|e| e.id() != id);
        }

        if self.selected.as_ref().is_some_and(|s| s.id() == id) {
            self.selected = None;
        }
    }

    /// Cached list for `key`; empty when never fetched
    pub fn list(&self, key: &ListKey) -> &[E] {
        self.lists.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Every cached list with its key
    pub fn lists(&self) -> impl Iterator<Item = (&ListKey, &[E])> {
        self.lists.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Look an entity up in any cached list
    pub fn find_cached(&self, id: &str) -> Option<&E> {
        self.lists.values().flatten().find(|e| e.id() == id)
    }

    pub fn has_fetched(&self, key: &ListKey) -> bool {
        self.fetched.contains(key)
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Keys with at least one fetch in flight
    pub fn loading_keys(&self) -> impl Iterator<Item = &ListKey> {
        self.loading.keys()
    }

    pub fn is_loading_key(&self, key: &ListKey) -> bool {
        self.loading.contains_key(key)
    }

    pub fn selected(&self) -> Option<&E> {
        self.selected.as_ref()
    }

    pub fn deleting_id(&self) -> Option<&str> {
        self.deleting_id.as_deref()
    }

    pub fn is_deleting(&self, id: &str) -> bool {
        self.deleting_id.as_deref() == Some(id)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Last success message reported by the server (delete confirmations)
    pub fn message(&self) -> &str {
        &self.message
    }
}
