//! Cart Store
//!
//! The remote document store holding each user's cart lines, one document per line. Documents
//! are loosely typed; [`documents`] coerces them into [`CartLine`]s at this boundary so nothing
//! above it handles untyped data.

use std::num::NonZeroU32;

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

use crate::domain::carts::models::{AdjustOutcome, CartLine, CartLineFields, CartLineId, UserId};

pub mod documents;
mod memory;

pub use memory::InMemoryCartStore;

/// Failures reported by the document store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached or failed while serving the request.
    #[error("document store unavailable: {0}")]
    Connectivity(String),

    /// The current user may not access the document.
    #[error("permission denied for {0}")]
    PermissionDenied(String),

    /// The document to update does not exist.
    #[error("cart line {0} not found")]
    NotFound(CartLineId),
}

/// Per-document access to a user's cart lines.
#[automock]
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Fetch every line the user owns, in no particular order.
    async fn list_cart_lines(&self, user: UserId) -> Result<Vec<CartLine>, StoreError>;

    /// Fetch one line, `None` when it does not exist.
    async fn read_cart_line(
        &self,
        user: UserId,
        id: CartLineId,
    ) -> Result<Option<CartLine>, StoreError>;

    /// Create the line, or merge the fields into the existing document.
    async fn upsert_cart_line(
        &self,
        user: UserId,
        id: CartLineId,
        fields: CartLineFields,
    ) -> Result<(), StoreError>;

    /// Add `delta` to the stored quantity without reading it first.
    ///
    /// Fails with [`StoreError::NotFound`] when the line does not exist.
    async fn increment_quantity(
        &self,
        user: UserId,
        id: CartLineId,
        delta: i64,
    ) -> Result<(), StoreError>;

    /// Atomically add `fields.quantity` to an existing line, or create the line from `fields`
    /// when it does not exist. Returns the stored quantity.
    ///
    /// An existing line keeps its stored price and creation time.
    async fn upsert_or_increment(
        &self,
        user: UserId,
        id: CartLineId,
        fields: CartLineFields,
    ) -> Result<NonZeroU32, StoreError>;

    /// Delete the line. Deleting a missing line succeeds.
    async fn delete_cart_line(&self, user: UserId, id: CartLineId) -> Result<(), StoreError>;

    /// Atomically add `delta` to the stored quantity, deleting the line instead when the result
    /// would be zero or less.
    ///
    /// A missing line is read as quantity 1.
    async fn compare_and_adjust(
        &self,
        user: UserId,
        id: CartLineId,
        delta: i64,
    ) -> Result<AdjustOutcome, StoreError>;
}
