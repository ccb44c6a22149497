//! Basket Fixtures
//!
//! A basket lists brands with their store prices, and the picks a shopper made from them. The
//! picks are replayed through the add-to-cart fan-out to produce a cart.

use std::{num::NonZeroU32, path::Path};

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use serde::Deserialize;

use crate::{
    catalog::BrandOffer,
    fixtures::{FixtureError, fixture_path, read_fixture},
    prices::{currency, parse_price},
};

/// Brands and picks in YAML.
#[derive(Debug, Deserialize)]
pub struct BasketFixture {
    /// ISO currency code for every price in the basket
    pub currency: String,

    /// Map of brand key -> brand fixture
    pub brands: FxHashMap<String, BrandFixture>,

    /// Brands added to the cart, in order
    #[serde(default)]
    pub picks: Vec<PickFixture>,
}

/// Brand Fixture
#[derive(Debug, Deserialize)]
pub struct BrandFixture {
    /// Brand name
    pub name: String,

    /// Price per store, in listing order
    #[serde(default)]
    pub stores: Vec<StorePriceFixture>,

    /// Price used when the brand has no store prices
    pub price: Option<String>,
}

/// Store price in YAML.
#[derive(Debug, Deserialize)]
pub struct StorePriceFixture {
    /// Store name
    pub store: String,

    /// Price (e.g. "56.00")
    pub price: String,
}

/// A pick in YAML.
#[derive(Debug, Deserialize)]
pub struct PickFixture {
    /// Brand key
    pub brand: String,

    /// Quantity added
    #[serde(default = "default_quantity")]
    pub quantity: NonZeroU32,
}

fn default_quantity() -> NonZeroU32 {
    NonZeroU32::MIN
}

/// A brand resolved from a pick, ready for the fan-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasketPick {
    /// The brand picked
    pub offer: BrandOffer,

    /// Quantity added
    pub quantity: NonZeroU32,
}

impl TryFrom<&BrandFixture> for BrandOffer {
    type Error = FixtureError;

    fn try_from(fixture: &BrandFixture) -> Result<Self, Self::Error> {
        let fallback = fixture.price.as_deref().map(parse_price).transpose()?;

        fixture.stores.iter().try_fold(
            BrandOffer::new(&fixture.name).with_fallback_price(fallback.unwrap_or(0)),
            |offer, entry| Ok(offer.with_store(&entry.store, parse_price(&entry.price)?)),
        )
    }
}

impl BasketFixture {
    /// Load a named basket from the crate's `fixtures/baskets` directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        Self::from_path(&fixture_path("baskets", name))
    }

    /// Load a basket from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self, FixtureError> {
        Self::from_yaml(&read_fixture(path)?)
    }

    /// Parse a basket from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed.
    pub fn from_yaml(yaml: &str) -> Result<Self, FixtureError> {
        Ok(serde_norway::from_str(yaml)?)
    }

    /// Currency the basket is priced in.
    ///
    /// # Errors
    ///
    /// Returns an error for unsupported currency codes.
    pub fn currency(&self) -> Result<&'static Currency, FixtureError> {
        Ok(currency(&self.currency)?)
    }

    /// Resolve every pick to its brand offer.
    ///
    /// # Errors
    ///
    /// Returns an error if a pick names an unknown brand or a price cannot be parsed.
    pub fn picks(&self) -> Result<Vec<BasketPick>, FixtureError> {
        self.picks
            .iter()
            .map(|pick| {
                let brand = self
                    .brands
                    .get(&pick.brand)
                    .ok_or_else(|| FixtureError::BrandNotFound(pick.brand.clone()))?;

                Ok(BasketPick {
                    offer: BrandOffer::try_from(brand)?,
                    quantity: pick.quantity,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    const BASKET: &str = r#"
currency: INR
brands:
  milk:
    name: Amul Milk
    stores:
      - { store: A, price: "50" }
      - { store: B, price: "40" }
  rice:
    name: Loose Rice
    price: "60"
picks:
  - { brand: milk, quantity: 2 }
  - { brand: rice }
"#;

    #[test]
    fn picks_resolve_brands() -> TestResult {
        let fixture = BasketFixture::from_yaml(BASKET)?;

        let picks = fixture.picks()?;

        assert_eq!(picks.len(), 2);

        let milk = picks.first().ok_or("Expected milk pick")?;
        assert_eq!(milk.offer.name(), "Amul Milk");
        assert_eq!(milk.offer.stores().len(), 2);
        assert_eq!(milk.quantity.get(), 2);

        let rice = picks.get(1).ok_or("Expected rice pick")?;
        assert!(rice.offer.stores().is_empty());
        assert_eq!(rice.quantity.get(), 1);

        Ok(())
    }

    #[test]
    fn unknown_brand_is_an_error() -> TestResult {
        let fixture = BasketFixture::from_yaml(
            "currency: INR\nbrands: {}\npicks:\n  - { brand: ghost }\n",
        )?;

        assert!(matches!(
            fixture.picks(),
            Err(FixtureError::BrandNotFound(brand)) if brand == "ghost"
        ));

        Ok(())
    }
}
