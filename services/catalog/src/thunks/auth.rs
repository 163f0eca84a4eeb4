//! Session operations

use common::error::ClientResult;
use tracing::{info, warn};

use crate::{
    models::{AuthUser, LoginCredentials, RegisterRequest},
    state::{Action, AuthAction},
    store::{Completed, Store},
};

fn display_name(user: &AuthUser) -> &str {
    user.username.as_deref().unwrap_or(&user.email)
}

impl Store {
    async fn dispatch_auth(&self, action: AuthAction) {
        self.dispatch(Action::Auth(action)).await;
    }

    /// Restore the session on start-up
    ///
    /// Resolves the auth slice's loading state exactly once; calling it again
    /// after it resolved returns the current user without a request.
    pub async fn initialize_auth(&self) -> ClientResult<Completed<Option<AuthUser>>> {
        let restored = self
            .select(|state| {
                state
                    .auth
                    .is_initialized()
                    .then(|| state.auth.user().cloned())
            })
            .await;
        if let Some(user) = restored {
            return Ok(Completed {
                value: user,
                message: "Session already restored".to_string(),
            });
        }

        self.dispatch_auth(AuthAction::InitializePending).await;

        match self.api.current_user().await {
            Ok(user) => {
                let message = match &user {
                    Some(user) => format!("Signed in as {}", display_name(user)),
                    None => "No active session".to_string(),
                };
                info!("Session restore: {}", message);
                self.dispatch_auth(AuthAction::InitializeFulfilled(user.clone()))
                    .await;
                Ok(Completed {
                    value: user,
                    message,
                })
            }
            Err(err) => {
                warn!("Session restore failed: {}", err);
                self.dispatch_auth(AuthAction::InitializeRejected {
                    error: err.user_message(),
                })
                .await;
                Err(err)
            }
        }
    }

    pub async fn login(&self, credentials: &LoginCredentials) -> ClientResult<Completed<AuthUser>> {
        self.dispatch_auth(AuthAction::LoginPending).await;

        match self.api.login(credentials).await {
            Ok(user) => {
                let message = format!("Welcome back, {}", display_name(&user));
                info!("User {} logged in", user.id);
                self.dispatch_auth(AuthAction::LoginFulfilled(user.clone()))
                    .await;
                Ok(Completed {
                    value: user,
                    message,
                })
            }
            Err(err) => {
                warn!("Login failed: {}", err);
                self.dispatch_auth(AuthAction::LoginRejected {
                    error: err.user_message(),
                })
                .await;
                Err(err)
            }
        }
    }

    pub async fn register(&self, payload: &RegisterRequest) -> ClientResult<Completed<AuthUser>> {
        self.dispatch_auth(AuthAction::RegisterPending).await;

        match self.api.register(payload).await {
            Ok(user) => {
                let message = format!("Account created for {}", display_name(&user));
                info!("User {} registered", user.id);
                self.dispatch_auth(AuthAction::RegisterFulfilled(user.clone()))
                    .await;
                Ok(Completed {
                    value: user,
                    message,
                })
            }
            Err(err) => {
                warn!("Registration failed: {}", err);
                self.dispatch_auth(AuthAction::RegisterRejected {
                    error: err.user_message(),
                })
                .await;
                Err(err)
            }
        }
    }

    /// Dismiss the session error shown by the login or signup form
    pub async fn clear_auth_error(&self) {
        self.dispatch_auth(AuthAction::ClearError).await;
    }

    pub async fn logout(&self) -> ClientResult<Completed<()>> {
        self.dispatch_auth(AuthAction::LogoutPending).await;

        match self.api.logout().await {
            Ok(()) => {
                info!("User logged out");
                self.dispatch_auth(AuthAction::LogoutFulfilled).await;
                Ok(Completed {
                    value: (),
                    message: "Signed out".to_string(),
                })
            }
            Err(err) => {
                warn!("Logout failed: {}", err);
                self.dispatch_auth(AuthAction::LogoutRejected {
                    error: err.user_message(),
                })
                .await;
                Err(err)
            }
        }
    }
}
