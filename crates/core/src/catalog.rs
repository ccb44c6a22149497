//! Catalog
//!
//! A brand is listed with a price at each store that sells it. Adding a brand to the cart fans
//! out into one cart line per store so the cart can be compared store by store.

use std::num::NonZeroU32;

use jiff::Timestamp;
use smallvec::SmallVec;

use crate::lines::{CartLineFields, CartLineId};

/// Store used for brands listed without any per-store prices.
pub const NOT_APPLICABLE_STORE: &str = "Not Applicable";

/// A brand's price at one store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePrice {
    /// Store name
    pub store: String,

    /// Unit price in minor units
    pub price: u64,
}

/// A brand as offered in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandOffer {
    name: String,
    stores: Vec<StorePrice>,
    fallback_price: u64,
}

/// A cart line the fan-out wants written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedLine {
    /// Line identifier derived from brand and store
    pub id: CartLineId,

    /// Fields to write if the line does not exist yet
    pub fields: CartLineFields,
}

impl BrandOffer {
    /// Create a brand with no store prices.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stores: Vec::new(),
            fallback_price: 0,
        }
    }

    /// Add a store price. Listing the same store twice keeps the later price.
    #[must_use]
    pub fn with_store(mut self, store: impl Into<String>, price: u64) -> Self {
        let store = store.into();

        match self.stores.iter_mut().find(|entry| entry.store == store) {
            Some(entry) => entry.price = price,
            None => self.stores.push(StorePrice { store, price }),
        }

        self
    }

    /// Set the price used when the brand has no store prices.
    #[must_use]
    pub fn with_fallback_price(mut self, price: u64) -> Self {
        self.fallback_price = price;
        self
    }

    /// Brand name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Store prices in listing order
    pub fn stores(&self) -> &[StorePrice] {
        &self.stores
    }

    /// Plan the cart lines for adding `quantity` of this brand.
    ///
    /// One line is planned per store price; a brand without store prices gets a single line at
    /// [`NOT_APPLICABLE_STORE`] priced at the fallback price.
    pub fn plan(&self, quantity: NonZeroU32, added_at: Timestamp) -> SmallVec<[PlannedLine; 4]> {
        let line = |store: &str, unit_price: u64| PlannedLine {
            id: CartLineId::derive(&self.name, store),
            fields: CartLineFields {
                name: self.name.clone(),
                store: store.to_string(),
                unit_price,
                quantity,
                added_at: Some(added_at),
            },
        };

        if self.stores.is_empty() {
            let mut planned = SmallVec::new();
            planned.push(line(NOT_APPLICABLE_STORE, self.fallback_price));
            return planned;
        }

        self.stores
            .iter()
            .map(|entry| line(&entry.store, entry.price))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two() -> NonZeroU32 {
        NonZeroU32::MIN.saturating_add(1)
    }

    #[test]
    fn plan_fans_out_one_line_per_store() {
        let offer = BrandOffer::new("Amul Butter")
            .with_store("Big Bazaar", 5_600)
            .with_store("D Mart", 5_400);

        let planned = offer.plan(two(), Timestamp::UNIX_EPOCH);

        let ids: Vec<&str> = planned.iter().map(|line| line.id.as_str()).collect();

        assert_eq!(ids, ["amul-butter-big-bazaar", "amul-butter-d-mart"]);
        assert!(planned.iter().all(|line| line.fields.quantity == two()));
        assert!(planned.iter().all(|line| line.fields.name == "Amul Butter"));
    }

    #[test]
    fn plan_without_stores_uses_not_applicable() {
        let offer = BrandOffer::new("Loose Rice").with_fallback_price(6_000);

        let planned = offer.plan(NonZeroU32::MIN, Timestamp::UNIX_EPOCH);

        assert_eq!(planned.len(), 1);
        assert_eq!(
            planned.first().map(|line| line.fields.store.as_str()),
            Some(NOT_APPLICABLE_STORE)
        );
        assert_eq!(planned.first().map(|line| line.fields.unit_price), Some(6_000));
    }

    #[test]
    fn duplicate_store_keeps_later_price() {
        let offer = BrandOffer::new("Tata Salt")
            .with_store("Reliance", 2_800)
            .with_store("Reliance", 2_500);

        assert_eq!(
            offer.stores(),
            [StorePrice {
                store: "Reliance".to_string(),
                price: 2_500,
            }]
        );
    }
}
