//! Cart Summary
//!
//! The compact cart preview collapses lines across stores by product name. A product added at
//! three stores is still one physical item, so the row quantity is the largest quantity seen for
//! that name rather than the sum.

use std::num::NonZeroU32;

use rustc_hash::FxHashMap;

use crate::lines::CartLine;

/// One product row in the cart preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    /// Product name
    pub name: String,

    /// Largest quantity among the product's lines
    pub quantity: NonZeroU32,

    /// Unit price of the last line visited for this product, in minor units
    pub price: u64,
}

/// Compact cart preview.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartSummary {
    /// Sum of the row quantities
    pub total_count: u64,

    /// Rows in order of first appearance
    pub rows: Vec<SummaryRow>,
}

impl CartSummary {
    /// Check if the preview has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Collapse cart lines into the compact preview.
///
/// The row price is taken from whichever line for that name comes last in `lines`, so it depends
/// on the order the lines were read in.
pub fn summarize(lines: &[CartLine]) -> CartSummary {
    let mut rows: Vec<SummaryRow> = Vec::new();
    let mut positions: FxHashMap<&str, usize> = FxHashMap::default();

    for line in lines {
        let existing = positions
            .get(line.name.as_str())
            .and_then(|&position| rows.get_mut(position));

        match existing {
            Some(row) => {
                row.quantity = row.quantity.max(line.quantity);
                row.price = line.unit_price;
            }
            None => {
                positions.insert(line.name.as_str(), rows.len());
                rows.push(SummaryRow {
                    name: line.name.clone(),
                    quantity: line.quantity,
                    price: line.unit_price,
                });
            }
        }
    }

    let total_count = rows
        .iter()
        .map(|row| u64::from(row.quantity.get()))
        .sum();

    CartSummary { total_count, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::CartLineId;

    fn line(name: &str, store: &str, unit_price: u64, quantity: u32) -> CartLine {
        CartLine {
            id: CartLineId::derive(name, store),
            name: name.to_string(),
            store: store.to_string(),
            unit_price,
            quantity: NonZeroU32::new(quantity).unwrap_or(NonZeroU32::MIN),
            added_at: None,
        }
    }

    #[test]
    fn empty_cart_has_no_rows() {
        let summary = summarize(&[]);

        assert_eq!(summary.total_count, 0);
        assert!(summary.is_empty());
    }

    #[test]
    fn same_product_at_two_stores_takes_max_quantity() {
        let summary = summarize(&[line("Milk", "A", 5_000, 2), line("Milk", "B", 4_000, 5)]);

        assert_eq!(summary.rows.len(), 1);
        assert_eq!(summary.rows.first().map(|row| row.quantity.get()), Some(5));
        assert_eq!(summary.total_count, 5);
    }

    #[test]
    fn row_price_comes_from_last_visited_line() {
        let forwards = summarize(&[line("Milk", "A", 5_000, 1), line("Milk", "B", 4_000, 1)]);
        let backwards = summarize(&[line("Milk", "B", 4_000, 1), line("Milk", "A", 5_000, 1)]);

        assert_eq!(forwards.rows.first().map(|row| row.price), Some(4_000));
        assert_eq!(backwards.rows.first().map(|row| row.price), Some(5_000));
    }

    #[test]
    fn total_count_sums_rows_not_documents() {
        let summary = summarize(&[
            line("Milk", "A", 5_000, 3),
            line("Milk", "B", 4_000, 1),
            line("Bread", "A", 3_000, 2),
            line("Bread", "B", 3_500, 2),
        ]);

        let names: Vec<&str> = summary.rows.iter().map(|row| row.name.as_str()).collect();

        assert_eq!(names, ["Milk", "Bread"]);
        assert_eq!(summary.total_count, 5);
    }
}
