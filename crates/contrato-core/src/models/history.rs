//! Contract history (audit trail) domain model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum HistoryAction {
    Creation,
    Edit,
    AttachmentAdded,
    Amendment,
    Expiration,
    Conclusion,
}

impl HistoryAction {
    /// Label shown in the contract timeline.
    pub fn label(self) -> &'static str {
        match self {
            Self::Creation => "Criação",
            Self::Edit => "Edição",
            Self::AttachmentAdded => "Anexo Adicionado",
            Self::Amendment => "Atualização",
            Self::Expiration => "Expiração",
            Self::Conclusion => "Conclusão",
        }
    }
}

impl fmt::Display for HistoryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One immutable entry in a contract's history.
///
/// Entries are only ever appended; nothing in the workspace edits or removes
/// one once it is stored on a [`Contract`](super::contract::Contract).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContractHistoryItem {
    pub id: String,
    pub date: DateTime<Utc>,
    pub action: HistoryAction,
    pub user: String,
    pub details: String,
}

impl ContractHistoryItem {
    /// Build a new entry with a freshly generated id.
    pub fn record(
        action: HistoryAction,
        user: impl Into<String>,
        details: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            action,
            user: user.into(),
            details: details.into(),
        }
    }
}
