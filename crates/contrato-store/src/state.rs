//! Session and UI state held by the store.

use contrato_core::filter::ContractFilter;
use contrato_core::models::contract::{Contract, ContractId};
use contrato_core::models::user::User;
use contrato_core::models::view::{StatusFilter, ViewState};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub current_view: ViewState,
    pub search_query: String,
    pub filter_status: StatusFilter,
    /// Lookup key only. May name a contract that has since been deleted.
    pub selected_contract_id: Option<ContractId>,
}

impl SessionState {
    pub fn filter(&self) -> ContractFilter {
        ContractFilter::new(self.search_query.clone(), self.filter_status)
    }

    /// The screen actually rendered: signed-out sessions always see the
    /// login screen.
    pub fn active_screen(&self) -> ViewState {
        match self.user {
            None => ViewState::Login,
            Some(_) => self.current_view,
        }
    }
}

/// Borrowed view of the whole store, handed to subscribers.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub session: &'a SessionState,
    pub contracts: &'a [Contract],
}

impl<'a> Snapshot<'a> {
    pub fn visible_contracts(&self) -> Vec<&'a Contract> {
        self.session.filter().apply(self.contracts)
    }

    pub fn selected_contract(&self) -> Option<&'a Contract> {
        let id = self.session.selected_contract_id.as_ref()?;
        self.contracts.iter().find(|c| &c.id == id)
    }
}
