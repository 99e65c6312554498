//! Authentication error types.

use contrato_core::error::ContratoError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("email and password are required")]
    MissingCredentials,
}

impl From<AuthError> for ContratoError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingCredentials => ContratoError::AuthenticationFailed {
                reason: err.to_string(),
            },
        }
    }
}
