//! Service-layer error type.

use crate::model::entity::EntityId;
use crate::repo::keyed_store::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors from clinic use-case services.
#[derive(Debug)]
pub enum ServiceError {
    /// Target record does not exist.
    NotFound { entity: &'static str, id: EntityId },
    /// Create was called with a record that already has an identifier.
    IdentifierAssigned { entity: &'static str, id: EntityId },
    /// Update payload carries an identifier different from the target.
    IdentifierMismatch { path_id: EntityId, body_id: EntityId },
    /// Repository-level failure.
    Repo(RepoError),
}

impl ServiceError {
    /// Returns whether this error means the addressed record is absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::IdentifierAssigned { entity, id } => {
                write!(f, "new {entity} must not carry an identifier, got {id}")
            }
            Self::IdentifierMismatch { path_id, body_id } => write!(
                f,
                "payload identifier {body_id} does not match target identifier {path_id}"
            ),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}
