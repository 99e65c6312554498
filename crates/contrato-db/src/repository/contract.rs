//! In-memory implementation of [`ContractRepository`].
//!
//! Contracts are kept in a `Vec` ordered most recently created first.
//! Ids are random UUIDs checked against the collection before use.

use chrono::Duration;
use contrato_core::error::ContratoResult;
use contrato_core::models::contract::{Contract, ContractId, CreateContract, UpdateContract};
use contrato_core::models::history::{ContractHistoryItem, HistoryAction};
use contrato_core::repository::{ChangeContext, ContractRepository};
use tracing::{debug, warn};

use crate::error::DbError;
use crate::seed::seed_contracts;

pub const CREATION_DETAILS: &str = "Contrato criado no sistema";
pub const EDIT_DETAILS: &str = "Dados do contrato atualizados";

const MAX_ID_ATTEMPTS: u32 = 8;

#[derive(Debug, Clone, Default)]
pub struct MemoryContractRepository {
    contracts: Vec<Contract>,
}

impl MemoryContractRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository preloaded with the sample collection.
    pub fn seeded() -> Self {
        Self {
            contracts: seed_contracts(),
        }
    }

    fn position(&self, id: &ContractId) -> Option<usize> {
        self.contracts.iter().position(|c| &c.id == id)
    }

    fn fresh_id(&self) -> Result<ContractId, DbError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = ContractId::generate();
            if self.position(&id).is_none() {
                return Ok(id);
            }
            warn!(contract_id = %id, "Generated contract id collided, retrying");
        }
        Err(DbError::IdExhausted {
            attempts: MAX_ID_ATTEMPTS,
        })
    }

    fn not_found(id: &ContractId) -> DbError {
        DbError::NotFound {
            entity: "contract".into(),
            id: id.to_string(),
        }
    }
}

impl ContractRepository for MemoryContractRepository {
    fn create(&mut self, input: CreateContract, ctx: &ChangeContext) -> ContratoResult<Contract> {
        let id = self.fresh_id()?;

        let contract = Contract {
            id,
            title: input.title,
            provider: input.provider,
            contract_number: input.contract_number,
            value: input.value,
            start_date: input.start_date,
            end_date: input.end_date,
            status: input.status,
            description: input.description,
            last_update: ctx.at,
            attachments: input.attachments,
            history: vec![ContractHistoryItem::record(
                HistoryAction::Creation,
                ctx.actor.clone(),
                CREATION_DETAILS,
                ctx.at,
            )],
        };

        debug!(contract_id = %contract.id, actor = %ctx.actor, "Contract stored");
        self.contracts.insert(0, contract.clone());
        Ok(contract)
    }

    fn insert(&mut self, contract: Contract) -> ContratoResult<()> {
        if self.position(&contract.id).is_some() {
            return Err(DbError::DuplicateId {
                id: contract.id.to_string(),
            }
            .into());
        }
        self.contracts.push(contract);
        Ok(())
    }

    fn get_by_id(&self, id: &ContractId) -> ContratoResult<&Contract> {
        self.contracts
            .iter()
            .find(|c| &c.id == id)
            .ok_or_else(|| Self::not_found(id).into())
    }

    fn update(
        &mut self,
        id: &ContractId,
        input: UpdateContract,
        ctx: &ChangeContext,
    ) -> ContratoResult<Contract> {
        let Some(idx) = self.position(id) else {
            warn!(contract_id = %id, "Update of unknown contract ignored");
            return Err(Self::not_found(id).into());
        };

        let contract = &mut self.contracts[idx];
        // last_update must advance even when the clock has not.
        let at = ctx.at.max(contract.last_update + Duration::microseconds(1));

        input.apply_to(contract);
        contract.last_update = at;
        contract.history.push(ContractHistoryItem::record(
            HistoryAction::Edit,
            ctx.actor.clone(),
            EDIT_DETAILS,
            at,
        ));

        debug!(contract_id = %id, actor = %ctx.actor, "Contract updated");
        Ok(contract.clone())
    }

    fn delete(&mut self, id: &ContractId) -> ContratoResult<Contract> {
        match self.position(id) {
            Some(idx) => {
                debug!(contract_id = %id, "Contract removed");
                Ok(self.contracts.remove(idx))
            }
            None => {
                warn!(contract_id = %id, "Delete of unknown contract ignored");
                Err(Self::not_found(id).into())
            }
        }
    }

    fn list(&self) -> &[Contract] {
        &self.contracts
    }
}
