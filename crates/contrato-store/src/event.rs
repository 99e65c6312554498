//! Change notifications delivered to subscribers.

use contrato_core::models::contract::ContractId;
use contrato_core::models::view::{StatusFilter, ViewState};

use crate::state::Snapshot;

/// What a successful operation changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    SignedIn,
    SignedOut,
    ViewChanged(ViewState),
    SearchChanged,
    FilterChanged(StatusFilter),
    SelectionChanged(Option<ContractId>),
    /// Selection set and the details view opened in one step.
    ContractOpened(ContractId),
    ContractAdded(ContractId),
    ContractUpdated(ContractId),
    ContractDeleted(ContractId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

pub(crate) type Listener = Box<dyn FnMut(&Snapshot<'_>, &StoreEvent)>;

pub(crate) struct Subscription {
    pub(crate) id: SubscriptionId,
    pub(crate) listener: Listener,
}
