//! Cart line documents.
//!
//! Stored cart documents carry whatever the writer put in them: prices as numbers or strings,
//! quantities that may be missing. Reading falls back to defaults instead of failing, so a
//! damaged document still shows up in the cart.

use std::num::NonZeroU32;

use grocer::prices::{price_from_major, price_or_zero, price_to_major};
use jiff::Timestamp;
use serde_json::{Map, Value};

use crate::domain::carts::models::{CartLine, CartLineFields, CartLineId};

/// Store shown for lines whose document has no store.
pub const UNKNOWN_STORE: &str = "Unknown Store";

const NAME: &str = "name";
const STORE: &str = "store";
const PRICE: &str = "price";
const QUANTITY: &str = "quantity";
const ADDED_AT: &str = "addedAt";

/// Read a cart line out of a stored document.
pub fn line_from_document(id: CartLineId, document: &Value) -> CartLine {
    let name = document
        .get(NAME)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let store = document
        .get(STORE)
        .and_then(Value::as_str)
        .filter(|store| !store.is_empty())
        .unwrap_or(UNKNOWN_STORE)
        .to_string();

    let added_at = document
        .get(ADDED_AT)
        .and_then(Value::as_str)
        .and_then(|raw| raw.parse::<Timestamp>().ok());

    CartLine {
        id,
        name,
        store,
        unit_price: price_of(document),
        quantity: quantity_of(document),
        added_at,
    }
}

/// Unit price in minor units; unreadable or missing prices are zero.
pub fn price_of(document: &Value) -> u64 {
    match document.get(PRICE) {
        Some(Value::Number(number)) => number.as_f64().map_or(0, price_from_major),
        Some(Value::String(raw)) => price_or_zero(raw),
        _ => 0,
    }
}

/// Stored quantity; missing, zero, negative or unreadable quantities read as 1.
pub fn quantity_of(document: &Value) -> NonZeroU32 {
    let quantity = match document.get(QUANTITY) {
        Some(Value::Number(number)) => number.as_u64().and_then(|q| u32::try_from(q).ok()),
        Some(Value::String(raw)) => raw.trim().parse::<u32>().ok(),
        _ => None,
    };

    quantity.and_then(NonZeroU32::new).unwrap_or(NonZeroU32::MIN)
}

/// Write a new quantity into a document, capped at the largest readable quantity.
pub fn set_quantity(document: &mut Value, quantity: i64) {
    if let Value::Object(fields) = document {
        let quantity = quantity.min(i64::from(u32::MAX));

        fields.insert(QUANTITY.to_string(), Value::from(quantity));
    }
}

/// Merge line fields into a document, creating the document when there is none.
///
/// A missing `added_at` leaves any stored creation time untouched.
pub fn merge_fields(document: Option<Value>, fields: &CartLineFields) -> Value {
    let mut object = match document {
        Some(Value::Object(object)) => object,
        _ => Map::new(),
    };

    object.insert(NAME.to_string(), Value::from(fields.name.as_str()));
    object.insert(STORE.to_string(), Value::from(fields.store.as_str()));
    object.insert(PRICE.to_string(), Value::from(price_to_major(fields.unit_price)));
    object.insert(QUANTITY.to_string(), Value::from(fields.quantity.get()));

    if let Some(added_at) = fields.added_at {
        object.insert(ADDED_AT.to_string(), Value::from(added_at.to_string()));
    }

    Value::Object(object)
}
