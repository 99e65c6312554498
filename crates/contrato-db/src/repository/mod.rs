//! In-memory repository implementations.

mod contract;

pub use contract::{CREATION_DETAILS, EDIT_DETAILS, MemoryContractRepository};
