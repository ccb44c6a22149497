//! Grocer prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    catalog::{BrandOffer, NOT_APPLICABLE_STORE, PlannedLine},
    comparison::{StoreComparison, StoreGroup, compare},
    lines::{CartLine, CartLineFields, CartLineId},
    prices::{PriceError, format_minor, parse_price, price_or_zero},
    summary::{CartSummary, SummaryRow, summarize},
};
