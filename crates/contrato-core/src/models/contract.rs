//! Contract domain model.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::history::ContractHistoryItem;
use crate::error::{ContratoError, ContratoResult};

/// Identifier of a contract. Unique within a collection and never reassigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractId(String);

impl ContractId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// A random UUID v4 identifier. Callers still check it against the
    /// collection before use.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContractId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ContractId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Workflow status. Set explicitly by users, never derived from the dates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContractStatus {
    Active,
    Pending,
    Expired,
    Concluded,
}

impl ContractStatus {
    pub const ALL: [ContractStatus; 4] = [
        ContractStatus::Active,
        ContractStatus::Pending,
        ContractStatus::Expired,
        ContractStatus::Concluded,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Ativo",
            Self::Pending => "Pendente",
            Self::Expired => "Vencido",
            Self::Concluded => "Concluído",
        }
    }
}

impl fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contract {
    pub id: ContractId,
    pub title: String,
    pub provider: String,
    pub contract_number: String,
    /// Monetary amount in BRL.
    pub value: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: ContractStatus,
    pub description: String,
    pub last_update: DateTime<Utc>,
    pub attachments: Vec<String>,
    /// Chronological (insertion) order.
    pub history: Vec<ContractHistoryItem>,
}

impl Contract {
    /// History for timeline display, newest entry first.
    pub fn history_newest_first(&self) -> impl Iterator<Item = &ContractHistoryItem> {
        self.history.iter().rev()
    }

    /// Field-level consistency checks, applied only when strict validation
    /// is enabled.
    pub fn validate(&self) -> ContratoResult<()> {
        check_fields(&self.title, self.value, self.start_date, self.end_date)
    }
}

/// Payload for creating a contract. The id, timestamp and history are
/// assigned by the repository.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateContract {
    pub title: String,
    pub provider: String,
    pub contract_number: String,
    pub value: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: ContractStatus,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub attachments: Vec<String>,
}

impl CreateContract {
    pub fn validate(&self) -> ContratoResult<()> {
        check_fields(&self.title, self.value, self.start_date, self.end_date)
    }
}

/// Partial update. `None` leaves the field unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UpdateContract {
    pub title: Option<String>,
    pub provider: Option<String>,
    pub contract_number: Option<String>,
    pub value: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<ContractStatus>,
    pub description: Option<String>,
    /// Replaces the whole attachment list.
    pub attachments: Option<Vec<String>>,
}

impl UpdateContract {
    /// Merge the present fields over `contract`. Does not touch the id,
    /// timestamp or history.
    pub fn apply_to(self, contract: &mut Contract) {
        if let Some(title) = self.title {
            contract.title = title;
        }
        if let Some(provider) = self.provider {
            contract.provider = provider;
        }
        if let Some(number) = self.contract_number {
            contract.contract_number = number;
        }
        if let Some(value) = self.value {
            contract.value = value;
        }
        if let Some(start) = self.start_date {
            contract.start_date = start;
        }
        if let Some(end) = self.end_date {
            contract.end_date = end;
        }
        if let Some(status) = self.status {
            contract.status = status;
        }
        if let Some(description) = self.description {
            contract.description = description;
        }
        if let Some(attachments) = self.attachments {
            contract.attachments = attachments;
        }
    }
}

fn check_fields(title: &str, value: f64, start: NaiveDate, end: NaiveDate) -> ContratoResult<()> {
    if title.trim().is_empty() {
        return Err(ContratoError::validation("title must not be empty"));
    }
    if !value.is_finite() || value < 0.0 {
        return Err(ContratoError::validation(format!(
            "value must be a non-negative amount, got {value}"
        )));
    }
    if end < start {
        return Err(ContratoError::validation(format!(
            "end date {end} is before start date {start}"
        )));
    }
    Ok(())
}
