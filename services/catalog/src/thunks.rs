//! Async operations
//!
//! Every operation issues exactly one request. It reduces a pending action,
//! awaits the service, then reduces the fulfilled or rejected action and
//! hands the outcome back to the caller. Nothing is retried.

use std::future::Future;

use common::error::{ClientError, ClientResult};
use tracing::{info, warn};

use crate::{
    models::{DeleteResponse, ListKey},
    state::{Action, SliceAction, SliceEntity},
    store::{Completed, Store},
};

pub mod auth;
pub mod categories;
pub mod equipments;
pub mod sub_categories;

impl Store {
    /// Report a failed request: log it, mirror it into the slice, hand it back
    async fn reject<T>(
        &self,
        operation: &str,
        err: ClientError,
        action: impl FnOnce(String) -> Action,
    ) -> ClientResult<T> {
        warn!("{} failed: {}", operation, err);
        self.dispatch(action(err.user_message())).await;
        Err(err)
    }

    /// Serve a list from cache when its key was already fetched
    pub(crate) async fn cached_list<E: SliceEntity>(
        &self,
        key: &ListKey,
    ) -> Option<Completed<Vec<E>>> {
        self.select(|state| {
            let slice = E::slice(state);
            slice.has_fetched(key).then(|| Completed {
                value: slice.list(key).to_vec(),
                message: format!("{} list {} already loaded", E::KIND, key),
            })
        })
        .await
    }

    pub(crate) async fn fetch_list<E, F>(
        &self,
        key: ListKey,
        request: F,
    ) -> ClientResult<Completed<Vec<E>>>
    where
        E: SliceEntity,
        F: Future<Output = ClientResult<Vec<E>>>,
    {
        self.dispatch(E::action(SliceAction::FetchPending { key: key.clone() }))
            .await;

        match request.await {
            Ok(items) => {
                let message = format!("Loaded {} {} entries", items.len(), E::KIND);
                info!("{} for list {}", message, key);
                self.dispatch(E::action(SliceAction::FetchFulfilled {
                    key,
                    items: items.clone(),
                }))
                .await;
                Ok(Completed {
                    value: items,
                    message,
                })
            }
            Err(err) => {
                let operation = format!("Fetching {} list {}", E::KIND, key);
                self.reject(&operation, err, |error| {
                    E::action(SliceAction::FetchRejected { key, error })
                })
                .await
            }
        }
    }

    pub(crate) async fn find_one<E, F>(&self, id: &str, request: F) -> ClientResult<Completed<E>>
    where
        E: SliceEntity,
        F: Future<Output = ClientResult<E>>,
    {
        self.dispatch(E::action(SliceAction::FindPending { id: id.to_string() }))
            .await;

        match request.await {
            Ok(entity) => {
                let message = format!("{} \"{}\" loaded", E::KIND, entity.label());
                self.dispatch(E::action(SliceAction::FindFulfilled(entity.clone())))
                    .await;
                Ok(Completed {
                    value: entity,
                    message,
                })
            }
            Err(err) => {
                let operation = format!("Finding {} {}", E::KIND, id);
                self.reject(&operation, err, |error| {
                    E::action(SliceAction::FindRejected {
                        id: id.to_string(),
                        error,
                    })
                })
                .await
            }
        }
    }

    pub(crate) async fn create_one<E, F>(&self, request: F) -> ClientResult<Completed<E>>
    where
        E: SliceEntity,
        F: Future<Output = ClientResult<E>>,
    {
        self.dispatch(E::action(SliceAction::CreatePending)).await;

        match request.await {
            Ok(entity) => {
                let message =
                    format!("{} \"{}\" was created successfully", E::KIND, entity.label());
                info!("{} (id {})", message, entity.id());
                self.dispatch(E::action(SliceAction::CreateFulfilled(entity.clone())))
                    .await;
                Ok(Completed {
                    value: entity,
                    message,
                })
            }
            Err(err) => {
                let operation = format!("Creating {}", E::KIND);
                self.reject(&operation, err, |error| {
                    E::action(SliceAction::CreateRejected { error })
                })
                .await
            }
        }
    }

    pub(crate) async fn edit_one<E, F>(&self, id: &str, request: F) -> ClientResult<Completed<E>>
    where
        E: SliceEntity,
        F: Future<Output = ClientResult<E>>,
    {
        self.dispatch(E::action(SliceAction::EditPending { id: id.to_string() }))
            .await;

        match request.await {
            Ok(entity) => {
                let message =
                    format!("{} \"{}\" was updated successfully", E::KIND, entity.label());
                info!("{} (id {})", message, entity.id());
                self.dispatch(E::action(SliceAction::EditFulfilled(entity.clone())))
                    .await;
                Ok(Completed {
                    value: entity,
                    message,
                })
            }
            Err(err) => {
                let operation = format!("Updating {} {}", E::KIND, id);
                self.reject(&operation, err, |error| {
                    E::action(SliceAction::EditRejected {
                        id: id.to_string(),
                        error,
                    })
                })
                .await
            }
        }
    }

    /// Delete by id; the completed value is the deleted id
    pub(crate) async fn delete_one<E, F>(
        &self,
        id: &str,
        request: F,
    ) -> ClientResult<Completed<String>>
    where
        E: SliceEntity,
        F: Future<Output = ClientResult<DeleteResponse>>,
    {
        self.dispatch(E::action(SliceAction::DeletePending { id: id.to_string() }))
            .await;

        match request.await {
            Ok(response) => {
                let message = if response.message.trim().is_empty() {
                    format!("{} was deleted successfully", E::KIND)
                } else {
                    response.message
                };
                info!("Deleted {} {}", E::KIND, id);
                self.dispatch(E::action(SliceAction::DeleteFulfilled {
                    id: id.to_string(),
                    message: message.clone(),
                }))
                .await;
                Ok(Completed {
                    value: id.to_string(),
                    message,
                })
            }
            Err(err) => {
                let operation = format!("Deleting {} {}", E::KIND, id);
                self.reject(&operation, err, |error| {
                    E::action(SliceAction::DeleteRejected {
                        id: id.to_string(),
                        error,
                    })
                })
                .await
            }
        }
    }

    /// Drop the selected entity of one kind
    pub async fn reset_selected<E: SliceEntity>(&self) {
        self.dispatch(E::action(SliceAction::ResetSelected)).await;
    }

    /// Forget fetched-flags so the next `*_if_needed` fetch goes to the
    /// server. `None` invalidates every list of that kind.
    pub async fn invalidate<E: SliceEntity>(&self, key: Option<ListKey>) {
        self.dispatch(E::action(SliceAction::Invalidate(key))).await;
    }
}
