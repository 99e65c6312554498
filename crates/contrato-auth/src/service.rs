//! Login gate — builds the session user from the login form.

use contrato_core::models::user::User;
use tracing::debug;

use crate::config::AuthConfig;
use crate::error::AuthError;

/// Contents of the login form.
#[derive(Debug, Clone)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

impl LoginInput {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Placeholder authenticator.
///
/// Accepts any non-empty email/password pair. Replace with a real
/// credential check before exposing the store to anything but a demo.
#[derive(Debug, Clone, Default)]
pub struct LoginGate {
    config: AuthConfig,
}

impl LoginGate {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Session user for `email`. Always succeeds.
    pub fn user_for(&self, email: &str) -> User {
        User {
            id: self.config.user_id.clone(),
            name: self.config.display_name.clone(),
            email: email.to_owned(),
            avatar: self.config.avatar_url.clone(),
        }
    }

    /// Form submission: both fields must be non-empty. Whitespace counts
    /// as filled in.
    pub fn authenticate(&self, input: &LoginInput) -> Result<User, AuthError> {
        if input.email.is_empty() || input.password.is_empty() {
            debug!("Login form submitted with missing fields");
            return Err(AuthError::MissingCredentials);
        }
        Ok(self.user_for(&input.email))
    }
}
