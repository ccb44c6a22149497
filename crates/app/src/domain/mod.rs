//! Grocer Domain Concerns

pub mod carts;
