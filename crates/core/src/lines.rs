//! Cart Lines

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    num::NonZeroU32,
};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Cart line identifier.
///
/// Derived from the brand and store names so that adding the same brand at the same store twice
/// lands on the same line instead of creating a duplicate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartLineId(String);

impl CartLineId {
    /// Derive the line id for a brand sold at a store.
    ///
    /// Each run of whitespace in `"{brand}-{store}"` becomes a single hyphen and the result is
    /// lowercased.
    pub fn derive(brand: &str, store: &str) -> Self {
        let raw = format!("{brand}-{store}");
        let mut id = String::with_capacity(raw.len());
        let mut in_whitespace = false;

        for c in raw.chars() {
            if c.is_whitespace() {
                if !in_whitespace {
                    id.push('-');
                }
                in_whitespace = true;
            } else {
                id.push(c);
                in_whitespace = false;
            }
        }

        Self(id.to_lowercase())
    }

    /// Wrap an id read back from storage.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Borrow the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CartLineId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

/// A single (product, store) pairing in a customer's cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Line identifier
    pub id: CartLineId,

    /// Product name, the key used for grouping and completeness checks
    pub name: String,

    /// Store the unit price applies to
    pub store: String,

    /// Unit price in minor units
    pub unit_price: u64,

    /// Quantity; a line never exists with quantity zero
    pub quantity: NonZeroU32,

    /// When the line was first added
    pub added_at: Option<Timestamp>,
}

impl CartLine {
    /// Build a line from its identifier and stored fields.
    pub fn from_fields(id: CartLineId, fields: CartLineFields) -> Self {
        Self {
            id,
            name: fields.name,
            store: fields.store,
            unit_price: fields.unit_price,
            quantity: fields.quantity,
            added_at: fields.added_at,
        }
    }

    /// Price of the line: unit price times quantity, in minor units.
    pub fn line_total(&self) -> u64 {
        self.unit_price.saturating_mul(u64::from(self.quantity.get()))
    }
}

/// Fields written when a cart line is created or merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineFields {
    /// Product name
    pub name: String,

    /// Store name
    pub store: String,

    /// Unit price in minor units
    pub unit_price: u64,

    /// Quantity
    pub quantity: NonZeroU32,

    /// Creation time
    pub added_at: Option<Timestamp>,
}
