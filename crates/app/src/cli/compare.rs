use std::io::Write;

use clap::Args;

use crate::cli::{SeededCart, render::write_comparison};

#[derive(Debug, Args)]
pub(crate) struct CompareArgs {
    /// Also list every store's lines
    #[arg(long)]
    pub(crate) details: bool,
}

pub(crate) async fn run(
    seeded: &SeededCart,
    args: CompareArgs,
    mut out: impl Write,
) -> Result<(), String> {
    let comparison = seeded
        .context
        .carts
        .compare(seeded.user.clone())
        .await
        .map_err(|error| format!("failed to load cart: {error}"))?;

    write_comparison(&mut out, &comparison, seeded.currency, args.details)
        .map_err(|error| format!("failed to write comparison: {error}"))
}
