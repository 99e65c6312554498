//! Contrato Store — the application state store.
//!
//! [`AppStore`] owns the session user, the active view, the contract
//! collection and the list filter criteria. Views read it through
//! accessors, mutate it through its operations and observe changes by
//! subscribing. Everything is synchronous: when an operation returns,
//! every subscriber has already seen the new state.

pub mod config;
pub mod event;
pub mod state;
mod store;

pub use config::StoreConfig;
pub use event::{StoreEvent, SubscriptionId};
pub use state::{SessionState, Snapshot};
pub use store::AppStore;
