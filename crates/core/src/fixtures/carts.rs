//! Cart Fixtures

use std::{num::NonZeroU32, path::Path};

use rusty_money::iso::Currency;
use serde::Deserialize;

use crate::{
    fixtures::{FixtureError, fixture_path, read_fixture},
    lines::{CartLine, CartLineId},
    prices::{currency, parse_price},
};

/// A cart described as a flat list of lines.
#[derive(Debug, Deserialize)]
pub struct CartFixture {
    /// ISO currency code for every price in the cart
    pub currency: String,

    /// Cart lines
    #[serde(default)]
    pub lines: Vec<LineFixture>,
}

/// A cart line in YAML.
#[derive(Debug, Deserialize)]
pub struct LineFixture {
    /// Product name
    pub name: String,

    /// Store name
    pub store: String,

    /// Unit price (e.g. "45.50")
    pub price: String,

    /// Quantity, at least 1
    #[serde(default = "default_quantity")]
    pub quantity: NonZeroU32,
}

fn default_quantity() -> NonZeroU32 {
    NonZeroU32::MIN
}

impl CartFixture {
    /// Load a named cart from the crate's `fixtures/carts` directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        Self::from_path(&fixture_path("carts", name))
    }

    /// Load a cart from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self, FixtureError> {
        Self::from_yaml(&read_fixture(path)?)
    }

    /// Parse a cart from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed.
    pub fn from_yaml(yaml: &str) -> Result<Self, FixtureError> {
        Ok(serde_norway::from_str(yaml)?)
    }

    /// Currency the cart is priced in.
    ///
    /// # Errors
    ///
    /// Returns an error for unsupported currency codes.
    pub fn currency(&self) -> Result<&'static Currency, FixtureError> {
        Ok(currency(&self.currency)?)
    }

    /// Build the cart lines, deriving each id from product and store.
    ///
    /// # Errors
    ///
    /// Returns an error if any price cannot be parsed.
    pub fn lines(&self) -> Result<Vec<CartLine>, FixtureError> {
        self.lines
            .iter()
            .map(|line| {
                Ok(CartLine {
                    id: CartLineId::derive(&line.name, &line.store),
                    name: line.name.clone(),
                    store: line.store.clone(),
                    unit_price: parse_price(&line.price)?,
                    quantity: line.quantity,
                    added_at: None,
                })
            })
            .collect()
    }
}
