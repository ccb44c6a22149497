//! Cart Models

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    num::NonZeroU32,
};

pub use grocer::lines::{CartLine, CartLineFields, CartLineId};

/// Identifier of the customer owning a cart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(String);

impl UserId {
    /// Wrap a user identifier handed over by the identity provider.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

/// A quantity button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityDelta {
    /// Add one
    Increment,

    /// Take one away, removing the line when it reaches zero
    Decrement,
}

impl QuantityDelta {
    /// Signed change this press applies.
    pub fn as_i64(self) -> i64 {
        match self {
            Self::Increment => 1,
            Self::Decrement => -1,
        }
    }
}

/// What happened to a line after its quantity was adjusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustOutcome {
    /// The line is still in the cart with this quantity
    Updated(NonZeroU32),

    /// The line was deleted
    Removed,
}
