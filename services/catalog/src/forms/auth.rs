//! Login and signup form controller

use common::error::{ClientError, ClientResult};

use crate::{
    models::{AuthUser, LoginCredentials, RegisterRequest},
    store::{Completed, Store},
    validation::{validate_email, validate_password, validate_username},
};

/// Authentication form in either of its two modes
#[derive(Debug, Clone)]
pub enum AuthForm {
    Login {
        email: String,
        password: String,
    },
    Signup {
        username: String,
        email: String,
        password: String,
        confirm_password: String,
    },
}

impl AuthForm {
    pub fn login_credentials(&self) -> ClientResult<LoginCredentials> {
        match self {
            AuthForm::Login { email, password } => {
                let email = email.trim();
                validate_email(email)?;
                if password.is_empty() {
                    return Err(ClientError::validation("password", "Password is required"));
                }
                Ok(LoginCredentials {
                    email: email.to_string(),
                    password: password.clone(),
                })
            }
            AuthForm::Signup { .. } => Err(ClientError::validation(
                "mode",
                "Signup form cannot be used to log in",
            )),
        }
    }

    pub fn register_request(&self) -> ClientResult<RegisterRequest> {
        match self {
            AuthForm::Signup {
                username,
                email,
                password,
                confirm_password,
            } => {
                let username = username.trim();
                let email = email.trim();
                validate_username(username)?;
                validate_email(email)?;
                validate_password(password)?;
                if password != confirm_password {
                    return Err(ClientError::validation(
                        "confirmPassword",
                        "Passwords do not match",
                    ));
                }
                Ok(RegisterRequest {
                    username: username.to_string(),
                    email: email.to_string(),
                    password: password.clone(),
                })
            }
            AuthForm::Login { .. } => Err(ClientError::validation(
                "mode",
                "Login form cannot be used to sign up",
            )),
        }
    }

    pub async fn submit(&self, store: &Store) -> ClientResult<Completed<AuthUser>> {
        match self {
            AuthForm::Login { .. } => store.login(&self.login_credentials()?).await,
            AuthForm::Signup { .. } => store.register(&self.register_request()?).await,
        }
    }
}
