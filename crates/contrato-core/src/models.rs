//! Domain models for contract management.
//!
//! These are the core types shared across all crates.

pub mod contract;
pub mod history;
pub mod user;
pub mod view;
