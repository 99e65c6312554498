//! Contrato Auth — placeholder login gate for the contract management
//! session.
//!
//! No credentials are verified. The gate only checks that the login form
//! was filled in and builds the session [`User`](contrato_core::User).

pub mod config;
pub mod error;
pub mod service;

pub use config::AuthConfig;
pub use error::AuthError;
pub use service::{LoginGate, LoginInput};
