//! Contrato DB — in-memory contract storage and seed data.
//!
//! This crate provides:
//! - The [`MemoryContractRepository`] implementation of
//!   [`ContractRepository`](contrato_core::ContractRepository)
//! - The fixed sample collection loaded at startup ([`seed_contracts`])
//! - Error types ([`DbError`])
//!
//! Nothing here outlives the process.

mod error;
pub mod repository;
mod seed;

pub use error::DbError;
pub use repository::MemoryContractRepository;
pub use seed::seed_contracts;
