//! Search and status filtering of the contract list.
//!
//! Filtering is a pure derivation over the current collection. Nothing is
//! cached; callers re-run it whenever the collection or criteria change.

use serde::{Deserialize, Serialize};

use crate::models::contract::Contract;
use crate::models::view::StatusFilter;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractFilter {
    /// Case-insensitive substring matched against title, contract number
    /// and provider. Empty matches everything.
    pub query: String,
    pub status: StatusFilter,
}

impl ContractFilter {
    pub fn new(query: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            query: query.into(),
            status,
        }
    }

    pub fn matches(&self, contract: &Contract) -> bool {
        self.status.accepts(contract.status) && matches_query(contract, &self.query.to_lowercase())
    }

    /// Matching contracts in source order.
    pub fn apply<'a>(&self, contracts: &'a [Contract]) -> Vec<&'a Contract> {
        let needle = self.query.to_lowercase();
        contracts
            .iter()
            .filter(|c| self.status.accepts(c.status) && matches_query(c, &needle))
            .collect()
    }
}

fn matches_query(contract: &Contract, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [
        &contract.title,
        &contract.contract_number,
        &contract.provider,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}
