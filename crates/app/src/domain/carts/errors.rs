//! Carts service errors.

use thiserror::Error;

use crate::domain::carts::store::StoreError;

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),
}
