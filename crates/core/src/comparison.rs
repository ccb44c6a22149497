//! Store Comparison
//!
//! Every store is measured against the same yardstick: the set of product names found anywhere
//! in the cart. A store that carries only some of them keeps its partial total but can never be
//! the cheapest. Among the stores that carry everything, every store sharing the lowest total is
//! reported as cheapest.

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use crate::lines::CartLine;

/// The cart lines priced at one store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreGroup {
    /// Store name
    pub store: String,

    /// Lines priced at this store, in the order they were read
    pub lines: Vec<CartLine>,

    /// Sum of unit price times quantity over the lines, in minor units
    pub total: u64,

    /// Whether the store carries every required product
    pub is_complete: bool,

    /// Required products this store does not carry
    pub missing: SmallVec<[String; 4]>,
}

/// Result of comparing a cart across stores.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreComparison {
    /// Store groups sorted ascending by total; stores with equal totals keep first-seen order
    pub per_store: Vec<StoreGroup>,

    /// Distinct product names across the whole cart, in order of first appearance
    pub required_products: Vec<String>,

    /// Every complete store whose total equals `cheapest_total`
    pub cheapest: Vec<String>,

    /// Lowest total among complete stores, `None` when no store is complete
    pub cheapest_total: Option<u64>,
}

impl StoreComparison {
    /// Check if the cart had no lines at all.
    pub fn is_empty(&self) -> bool {
        self.per_store.is_empty()
    }

    /// Check if at least one store carries every required product.
    pub fn has_complete_store(&self) -> bool {
        self.cheapest_total.is_some()
    }

    /// Check if the given store is one of the cheapest complete stores.
    pub fn is_cheapest(&self, store: &str) -> bool {
        self.cheapest.iter().any(|name| name == store)
    }

    /// Find the group for a store by name.
    pub fn group(&self, store: &str) -> Option<&StoreGroup> {
        self.per_store.iter().find(|group| group.store == store)
    }
}

/// Compare the cart across the stores its lines are priced at.
///
/// Completeness uses exact product name matches. Lines with an empty product name still count
/// towards their store's total but never become required products.
pub fn compare(lines: &[CartLine]) -> StoreComparison {
    let mut required: Vec<&str> = Vec::new();
    let mut required_seen: FxHashSet<&str> = FxHashSet::default();

    let mut partitions: Vec<(&str, Vec<&CartLine>)> = Vec::new();
    let mut positions: FxHashMap<&str, usize> = FxHashMap::default();

    for line in lines {
        let name = line.name.as_str();

        if !name.is_empty() && required_seen.insert(name) {
            required.push(name);
        }

        let store = line.store.as_str();

        match positions
            .get(store)
            .and_then(|&position| partitions.get_mut(position))
        {
            Some((_, members)) => members.push(line),
            None => {
                positions.insert(store, partitions.len());
                partitions.push((store, vec![line]));
            }
        }
    }

    let mut per_store: Vec<StoreGroup> = partitions
        .into_iter()
        .map(|(store, members)| store_group(store, &members, &required))
        .collect();

    let cheapest_total = per_store
        .iter()
        .filter(|group| group.is_complete)
        .map(|group| group.total)
        .min();

    let cheapest = cheapest_total
        .map(|lowest| {
            per_store
                .iter()
                .filter(|group| group.is_complete && group.total == lowest)
                .map(|group| group.store.clone())
                .collect()
        })
        .unwrap_or_default();

    per_store.sort_by_key(|group| group.total);

    StoreComparison {
        per_store,
        required_products: required.into_iter().map(str::to_string).collect(),
        cheapest,
        cheapest_total,
    }
}

fn store_group(store: &str, members: &[&CartLine], required: &[&str]) -> StoreGroup {
    let stocked: FxHashSet<&str> = members.iter().map(|line| line.name.as_str()).collect();

    let missing: SmallVec<[String; 4]> = required
        .iter()
        .filter(|name| !stocked.contains(*name))
        .map(|name| (*name).to_string())
        .collect();

    let total = members
        .iter()
        .map(|line| line.line_total())
        .fold(0, u64::saturating_add);

    StoreGroup {
        store: store.to_string(),
        lines: members.iter().map(|line| (*line).clone()).collect(),
        total,
        is_complete: missing.is_empty(),
        missing,
    }
}
