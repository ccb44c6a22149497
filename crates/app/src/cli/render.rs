//! Terminal rendering for cart views.

use std::io::{self, Write};

use grocer::{
    comparison::{StoreComparison, StoreGroup},
    prices::format_minor,
    summary::CartSummary,
};
use rusty_money::iso::Currency;
use tabled::{
    Table,
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

const EMPTY_CART: &str = "Your cart is empty.";

pub(crate) fn write_comparison(
    out: &mut impl Write,
    comparison: &StoreComparison,
    currency: &'static Currency,
    details: bool,
) -> io::Result<()> {
    if comparison.is_empty() {
        return writeln!(out, "{EMPTY_CART}");
    }

    if details {
        for group in &comparison.per_store {
            write_store_lines(out, group, currency)?;
        }
    }

    let mut builder = Builder::default();
    builder.push_record(["Store", "Status", "Total", ""]);

    for group in &comparison.per_store {
        let status = if group.is_complete {
            "complete"
        } else {
            "missing items"
        };

        let best = if comparison.is_cheapest(&group.store) {
            "best"
        } else {
            ""
        };

        builder.push_record([
            group.store.clone(),
            status.to_string(),
            format_minor(group.total, currency),
            best.to_string(),
        ]);
    }

    writeln!(out, "{}", finish(builder, 2))?;

    match comparison.cheapest_total {
        Some(total) => writeln!(
            out,
            "Cheapest store(s): {} ({})",
            comparison.cheapest.join(", "),
            format_minor(total, currency)
        ),
        None => writeln!(
            out,
            "No store has all items. Partial stores are marked as missing items."
        ),
    }
}

fn write_store_lines(
    out: &mut impl Write,
    group: &StoreGroup,
    currency: &'static Currency,
) -> io::Result<()> {
    if group.is_complete {
        writeln!(out, "{}", group.store)?;
    } else {
        writeln!(out, "{} (missing: {})", group.store, group.missing.join(", "))?;
    }

    let mut builder = Builder::default();
    builder.push_record(["Product", "Qty", "Price", "Total"]);

    for line in &group.lines {
        builder.push_record([
            line.name.clone(),
            line.quantity.to_string(),
            format_minor(line.unit_price, currency),
            format_minor(line.line_total(), currency),
        ]);
    }

    builder.push_record([
        String::new(),
        String::new(),
        "Store Total".to_string(),
        format_minor(group.total, currency),
    ]);

    writeln!(out, "{}\n", finish(builder, 1))
}

pub(crate) fn write_summary(
    out: &mut impl Write,
    summary: &CartSummary,
    currency: &'static Currency,
) -> io::Result<()> {
    writeln!(out, "Items in cart: {}", summary.total_count)?;

    if summary.is_empty() {
        return writeln!(out, "{EMPTY_CART}");
    }

    let mut builder = Builder::default();
    builder.push_record(["Product", "Qty", "Price"]);

    for row in &summary.rows {
        builder.push_record([
            row.name.clone(),
            row.quantity.to_string(),
            format_minor(row.price, currency),
        ]);
    }

    writeln!(out, "{}", finish(builder, 1))
}

fn finish(builder: Builder, first_numeric_column: usize) -> Table {
    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(first_numeric_column..), Alignment::right());

    table
}
