//! Client-side state core for the rental equipment catalog
//!
//! Categories contain sub-categories, which contain equipment. A [`Store`]
//! mirrors what the remote service holds, tracks in-flight requests per
//! entity kind and exposes one async operation per endpoint. Form
//! controllers validate user input and build request payloads before any
//! request is made.

pub mod api;
pub mod forms;
pub mod models;
pub mod state;
pub mod store;
pub mod thunks;
pub mod validation;

pub use api::{CatalogApi, http::HttpCatalogApi};
pub use state::{Action, AppState};
pub use store::{Completed, Store};
