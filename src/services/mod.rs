use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod coupons;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors returned by the service layer, mapped to response envelopes by the
/// route handlers.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Field validation failed; carries the first violation message.
    #[error("{0}")]
    Form(String),
    /// A coupon with the same name already exists.
    #[error("coupon name already exists")]
    Conflict,
    /// The referenced coupon does not exist.
    #[error("coupon not found")]
    NotFound,
    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}
