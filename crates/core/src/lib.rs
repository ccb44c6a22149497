//! Grocer
//!
//! Grocer compares grocery baskets across stores: it collapses a customer's cart lines into a
//! compact summary and works out which stores can supply every product in the cart, and which of
//! those is cheapest.

pub mod catalog;
pub mod comparison;
pub mod fixtures;
pub mod lines;
pub mod prelude;
pub mod prices;
pub mod summary;
