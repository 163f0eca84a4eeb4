//! Authentication state machine
//!
//! `unauthenticated` -> login/register -> `authenticated` -> logout ->
//! `unauthenticated`. The slice starts out loading and stays loading until
//! session restore resolves, whatever else finishes in between. Login,
//! register and logout requests are counted on top of that.

use tracing::debug;

use crate::models::AuthUser;

/// Transitions accepted by [`AuthState`]
#[derive(Debug, Clone, PartialEq)]
pub enum AuthAction {
    InitializePending,
    InitializeFulfilled(Option<AuthUser>),
    InitializeRejected { error: String },

    LoginPending,
    LoginFulfilled(AuthUser),
    LoginRejected { error: String },

    RegisterPending,
    RegisterFulfilled(AuthUser),
    RegisterRejected { error: String },

    LogoutPending,
    LogoutFulfilled,
    LogoutRejected { error: String },

    /// Dismiss the last error (form reopened, banner closed)
    ClearError,
}

/// Session state
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    is_authenticated: bool,
    /// Login, register and logout requests in flight
    in_flight: u32,
    initialized: bool,
    user: Option<AuthUser>,
    error: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            is_authenticated: false,
            in_flight: 0,
            initialized: false,
            user: None,
            error: None,
        }
    }
}

impl AuthState {
    /// Apply one transition
    pub fn apply(&mut self, action: AuthAction) {
        match action {
            AuthAction::InitializePending => {}
            AuthAction::InitializeFulfilled(user) => {
                if self.initialized {
                    debug!("Ignoring late session restore result");
                    return;
                }
                self.initialized = true;
                if let Some(user) = user {
                    self.sign_in(user);
                }
            }
            AuthAction::InitializeRejected { error } => {
                if self.initialized {
                    return;
                }
                self.initialized = true;
                self.error = Some(error);
            }

            AuthAction::LoginPending | AuthAction::RegisterPending | AuthAction::LogoutPending => {
                self.in_flight += 1;
                self.error = None;
            }
            AuthAction::LoginFulfilled(user) | AuthAction::RegisterFulfilled(user) => {
                self.finish();
                self.sign_in(user);
            }
            AuthAction::LoginRejected { error } | AuthAction::RegisterRejected { error } => {
                self.finish();
                self.error = Some(error);
            }

            AuthAction::LogoutFulfilled => {
                self.finish();
                self.is_authenticated = false;
                self.user = None;
                self.error = None;
            }
            // The server still holds the session, so the client keeps it too
            AuthAction::LogoutRejected { error } => {
                self.finish();
                self.error = Some(error);
            }

            AuthAction::ClearError => self.error = None,
        }
    }

    fn finish(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    fn sign_in(&mut self, user: AuthUser) {
        self.is_authenticated = true;
        self.user = Some(user);
        self.error = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    /// True until session restore resolves and while any session request
    /// is in flight
    pub fn is_loading(&self) -> bool {
        !self.initialized || self.in_flight > 0
    }

    /// Whether session restore has resolved
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn user(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the signed-in user may manage the catalog
    pub fn can_manage_catalog(&self) -> bool {
        self.user.as_ref().is_some_and(AuthUser::can_manage_catalog)
    }
}
