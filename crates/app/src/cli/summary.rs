use std::io::Write;

use crate::cli::{SeededCart, render::write_summary};

pub(crate) async fn run(seeded: &SeededCart, mut out: impl Write) -> Result<(), String> {
    let summary = seeded
        .context
        .carts
        .summarize(seeded.user.clone())
        .await
        .map_err(|error| format!("failed to load cart: {error}"))?;

    write_summary(&mut out, &summary, seeded.currency)
        .map_err(|error| format!("failed to write summary: {error}"))
}
