//! View selector and list filter criteria.

use serde::{Deserialize, Serialize};

use super::contract::ContractStatus;

/// Named screen states of the application.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ViewState {
    #[default]
    Login,
    Dashboard,
    Contracts,
    Settings,
    ContractDetails,
}

/// Status selector of the contract list: every status, or exactly one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ContractStatus),
}

impl StatusFilter {
    pub fn accepts(self, status: ContractStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

impl From<ContractStatus> for StatusFilter {
    fn from(status: ContractStatus) -> Self {
        Self::Only(status)
    }
}
