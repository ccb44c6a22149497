//! Carts service.

use std::num::NonZeroU32;

use async_trait::async_trait;
use grocer::{
    catalog::BrandOffer,
    comparison::{StoreComparison, compare},
    summary::{CartSummary, summarize},
};
use jiff::Timestamp;
use mockall::automock;
use tracing::debug;

use crate::domain::carts::{
    errors::CartsServiceError,
    models::{AdjustOutcome, CartLine, CartLineId, QuantityDelta, UserId},
    store::CartStore,
};

/// Carts service backed by a [`CartStore`].
#[derive(Debug, Clone)]
pub struct DocumentCartsService<S> {
    store: S,
}

impl<S: CartStore> DocumentCartsService<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: CartStore> CartsService for DocumentCartsService<S> {
    #[tracing::instrument(name = "carts.service.list_lines", skip(self), fields(user = %user), err)]
    async fn list_lines(&self, user: UserId) -> Result<Vec<CartLine>, CartsServiceError> {
        Ok(self.store.list_cart_lines(user).await?)
    }

    #[tracing::instrument(name = "carts.service.summarize", skip(self), fields(user = %user), err)]
    async fn summarize(&self, user: UserId) -> Result<CartSummary, CartsServiceError> {
        let lines = self.store.list_cart_lines(user).await?;

        Ok(summarize(&lines))
    }

    #[tracing::instrument(name = "carts.service.compare", skip(self), fields(user = %user), err)]
    async fn compare(&self, user: UserId) -> Result<StoreComparison, CartsServiceError> {
        let lines = self.store.list_cart_lines(user).await?;

        Ok(compare(&lines))
    }

    #[tracing::instrument(
        name = "carts.service.add_brand",
        skip(self, offer),
        fields(user = %user, brand = offer.name(), stores = offer.stores().len()),
        err
    )]
    async fn add_brand(
        &self,
        user: UserId,
        offer: BrandOffer,
        quantity: u32,
    ) -> Result<Vec<CartLineId>, CartsServiceError> {
        let quantity = NonZeroU32::new(quantity).unwrap_or(NonZeroU32::MIN);
        let planned = offer.plan(quantity, Timestamp::now());

        let mut ids = Vec::with_capacity(planned.len());

        for line in planned {
            self.store
                .upsert_or_increment(user.clone(), line.id.clone(), line.fields)
                .await?;

            ids.push(line.id);
        }

        debug!(user = %user, brand = offer.name(), lines = ids.len(), "added brand to cart");

        Ok(ids)
    }

    #[tracing::instrument(
        name = "carts.service.adjust_quantity",
        skip(self),
        fields(user = %user, line = %id),
        err
    )]
    async fn adjust_quantity(
        &self,
        user: UserId,
        id: CartLineId,
        delta: QuantityDelta,
    ) -> Result<AdjustOutcome, CartsServiceError> {
        Ok(self
            .store
            .compare_and_adjust(user, id, delta.as_i64())
            .await?)
    }

    #[tracing::instrument(name = "carts.service.remove_line", skip(self), fields(user = %user, line = %id), err)]
    async fn remove_line(&self, user: UserId, id: CartLineId) -> Result<(), CartsServiceError> {
        Ok(self.store.delete_cart_line(user, id).await?)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieve every line in the user's cart.
    async fn list_lines(&self, user: UserId) -> Result<Vec<CartLine>, CartsServiceError>;

    /// Build the compact cart preview.
    async fn summarize(&self, user: UserId) -> Result<CartSummary, CartsServiceError>;

    /// Compare the cart across stores.
    async fn compare(&self, user: UserId) -> Result<StoreComparison, CartsServiceError>;

    /// Add a brand to the cart at every store it is sold in, returning the affected line ids.
    ///
    /// Lines that already exist have their quantity increased instead. A quantity of zero is
    /// treated as one.
    async fn add_brand(
        &self,
        user: UserId,
        offer: BrandOffer,
        quantity: u32,
    ) -> Result<Vec<CartLineId>, CartsServiceError>;

    /// Apply a quantity button press to one line.
    ///
    /// Decrementing a line at quantity 1 deletes it. Incrementing a line that no longer exists
    /// fails with [`StoreError::NotFound`](crate::domain::carts::store::StoreError::NotFound).
    async fn adjust_quantity(
        &self,
        user: UserId,
        id: CartLineId,
        delta: QuantityDelta,
    ) -> Result<AdjustOutcome, CartsServiceError>;

    /// Remove a line from the cart.
    async fn remove_line(&self, user: UserId, id: CartLineId) -> Result<(), CartsServiceError>;
}
