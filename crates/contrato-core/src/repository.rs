//! Repository trait for contract data access.
//!
//! All operations are synchronous: the collection lives in process memory
//! and every call completes before returning.

use chrono::{DateTime, Utc};

use crate::error::ContratoResult;
use crate::models::contract::{Contract, ContractId, CreateContract, UpdateContract};

/// Who performs a mutation and when. Recorded in the contract history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeContext {
    pub actor: String,
    pub at: DateTime<Utc>,
}

impl ChangeContext {
    pub fn new(actor: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            actor: actor.into(),
            at,
        }
    }
}

pub trait ContractRepository {
    /// Create a contract with a fresh id, a `Creation` history entry and
    /// `last_update = ctx.at`. The new contract becomes the first element
    /// of [`list`](Self::list).
    fn create(&mut self, input: CreateContract, ctx: &ChangeContext) -> ContratoResult<Contract>;

    /// Insert a fully formed contract (seed data) at the end of the
    /// collection. Fails if the id is already present.
    fn insert(&mut self, contract: Contract) -> ContratoResult<()>;

    fn get_by_id(&self, id: &ContractId) -> ContratoResult<&Contract>;

    /// Merge `input`, refresh `last_update` and append one `Edit` history
    /// entry. Unknown ids leave the collection untouched.
    fn update(
        &mut self,
        id: &ContractId,
        input: UpdateContract,
        ctx: &ChangeContext,
    ) -> ContratoResult<Contract>;

    /// Hard delete. Returns the removed contract.
    fn delete(&mut self, id: &ContractId) -> ContratoResult<Contract>;

    /// Every contract, most recently created first.
    fn list(&self) -> &[Contract];

    fn contains(&self, id: &ContractId) -> bool {
        self.get_by_id(id).is_ok()
    }

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}
