//! Role model and related functionality

use serde::{Deserialize, Serialize};

/// Role granted to an authenticated user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    /// Whether this role may create, edit and delete catalog entries
    pub fn can_manage_catalog(self) -> bool {
        matches!(self, Role::Admin)
    }
}
