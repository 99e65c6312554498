//! Contrato Core — domain models, repository trait, filtering and
//! dashboard statistics shared by every contract management crate.

pub mod clock;
pub mod error;
pub mod filter;
pub mod models;
pub mod repository;
pub mod stats;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{ContratoError, ContratoResult};
pub use filter::ContractFilter;
pub use models::contract::{Contract, ContractId, ContractStatus, CreateContract, UpdateContract};
pub use models::history::{ContractHistoryItem, HistoryAction};
pub use models::user::User;
pub use models::view::{StatusFilter, ViewState};
pub use repository::{ChangeContext, ContractRepository};
