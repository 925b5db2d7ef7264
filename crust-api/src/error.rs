use crust_core::{PaymentError, ValidationError};
use crust_order::OrderError;
use crust_store::RegistryError;
use uuid::Uuid;

/// Coarse classification the presentation layer can branch on, e.g. to
/// re-prompt on `NotFound` or `Validation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Validation,
    Conflict,
    Payment,
}

#[derive(Debug, thiserror::Error)]
pub enum DeskError {
    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    #[error("Unknown profile handle: {0}")]
    UnknownProfile(Uuid),

    #[error("Order {order_id} was placed for another customer")]
    CustomerMismatch { order_id: Uuid },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Payment(#[from] PaymentError),
}

impl DeskError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DeskError::ProfileNotFound(_) | DeskError::UnknownProfile(_) => ErrorKind::NotFound,
            DeskError::Order(OrderError::NotFound(_)) => ErrorKind::NotFound,
            DeskError::Validation(_) | DeskError::Registry(RegistryError::Validation(_)) => {
                ErrorKind::Validation
            }
            DeskError::Registry(RegistryError::DuplicateProfile(_))
            | DeskError::Order(OrderError::FeedbackAlreadyAttached(_))
            | DeskError::Order(OrderError::AlreadyRecorded(_))
            | DeskError::CustomerMismatch { .. } => ErrorKind::Conflict,
            DeskError::Payment(_) => ErrorKind::Payment,
        }
    }
}

pub type DeskResult<T> = Result<T, DeskError>;
