//! Repository-layer error types and conversions.

use contrato_core::error::ContratoError;

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Duplicate contract id: {id}")]
    DuplicateId { id: String },

    #[error("Record not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Could not allocate a unique contract id after {attempts} attempts")]
    IdExhausted { attempts: u32 },
}

impl From<DbError> for ContratoError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => ContratoError::NotFound { entity, id },
            DbError::DuplicateId { id } => ContratoError::AlreadyExists {
                entity: "contract".into(),
                id,
            },
            other => ContratoError::Internal(other.to_string()),
        }
    }
}
