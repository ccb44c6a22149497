//! In-memory cart store.
//!
//! Keeps documents as raw JSON values, the way the remote store does, so reads go through the
//! same coercion as production documents. A single lock guards every document, which makes each
//! call atomic and applies writes to a line in the order they were issued.

use std::{collections::BTreeMap, num::NonZeroU32};

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::carts::{
    models::{AdjustOutcome, CartLine, CartLineFields, CartLineId, UserId},
    store::{
        CartStore, StoreError,
        documents::{line_from_document, merge_fields, quantity_of, set_quantity},
    },
};

type UserDocuments = BTreeMap<CartLineId, Value>;

/// Cart store holding documents in process memory.
#[derive(Debug, Default)]
pub struct InMemoryCartStore {
    documents: Mutex<FxHashMap<UserId, UserDocuments>>,
}

impl InMemoryCartStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw document as-is, bypassing field coercion.
    pub async fn insert_document(&self, user: UserId, id: CartLineId, document: Value) {
        self.documents
            .lock()
            .await
            .entry(user)
            .or_default()
            .insert(id, document);
    }
}

#[async_trait]
impl CartStore for InMemoryCartStore {
    async fn list_cart_lines(&self, user: UserId) -> Result<Vec<CartLine>, StoreError> {
        let documents = self.documents.lock().await;

        let lines: Vec<CartLine> = documents
            .get(&user)
            .map(|lines| {
                lines
                    .iter()
                    .map(|(id, document)| line_from_document(id.clone(), document))
                    .collect()
            })
            .unwrap_or_default();

        debug!(user = %user, count = lines.len(), "listed cart lines");

        Ok(lines)
    }

    async fn read_cart_line(
        &self,
        user: UserId,
        id: CartLineId,
    ) -> Result<Option<CartLine>, StoreError> {
        let documents = self.documents.lock().await;

        Ok(documents
            .get(&user)
            .and_then(|lines| lines.get(&id))
            .map(|document| line_from_document(id.clone(), document)))
    }

    async fn upsert_cart_line(
        &self,
        user: UserId,
        id: CartLineId,
        fields: CartLineFields,
    ) -> Result<(), StoreError> {
        let mut documents = self.documents.lock().await;
        let lines = documents.entry(user).or_default();

        let merged = merge_fields(lines.remove(&id), &fields);
        lines.insert(id, merged);

        Ok(())
    }

    async fn increment_quantity(
        &self,
        user: UserId,
        id: CartLineId,
        delta: i64,
    ) -> Result<(), StoreError> {
        let mut documents = self.documents.lock().await;

        let document = documents
            .get_mut(&user)
            .and_then(|lines| lines.get_mut(&id))
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;

        let quantity = i64::from(quantity_of(document).get()).saturating_add(delta);
        set_quantity(document, quantity);

        debug!(user = %user, line = %id, quantity, "incremented cart line");

        Ok(())
    }

    async fn upsert_or_increment(
        &self,
        user: UserId,
        id: CartLineId,
        fields: CartLineFields,
    ) -> Result<NonZeroU32, StoreError> {
        let mut documents = self.documents.lock().await;
        let lines = documents.entry(user.clone()).or_default();

        let quantity = match lines.get_mut(&id) {
            Some(document) => {
                let next = i64::from(quantity_of(document).get())
                    .saturating_add(i64::from(fields.quantity.get()));
                set_quantity(document, next);

                quantity_of(document)
            }
            None => {
                lines.insert(id.clone(), merge_fields(None, &fields));

                fields.quantity
            }
        };

        debug!(user = %user, line = %id, quantity = quantity.get(), "added to cart line");

        Ok(quantity)
    }

    async fn delete_cart_line(&self, user: UserId, id: CartLineId) -> Result<(), StoreError> {
        let mut documents = self.documents.lock().await;

        if let Some(lines) = documents.get_mut(&user) {
            lines.remove(&id);
        }

        debug!(user = %user, line = %id, "deleted cart line");

        Ok(())
    }

    async fn compare_and_adjust(
        &self,
        user: UserId,
        id: CartLineId,
        delta: i64,
    ) -> Result<AdjustOutcome, StoreError> {
        let mut documents = self.documents.lock().await;
        let lines = documents.entry(user.clone()).or_default();

        let current = lines
            .get(&id)
            .map_or(1, |document| i64::from(quantity_of(document).get()));

        let next = current.saturating_add(delta);

        if next <= 0 {
            lines.remove(&id);

            debug!(user = %user, line = %id, "removed cart line at zero quantity");

            return Ok(AdjustOutcome::Removed);
        }

        let document = lines
            .get_mut(&id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;

        set_quantity(document, next);

        let quantity = quantity_of(document);

        debug!(user = %user, line = %id, quantity = quantity.get(), "adjusted cart line");

        Ok(AdjustOutcome::Updated(quantity))
    }
}
