use std::{io, path::Path};

use clap::{Parser, Subcommand};
use grocer::{
    fixtures::{BasketFixture, FIXTURES_DIR},
    prices::currency,
};
use grocer_app::{context::AppContext, domain::carts::models::UserId};
use rusty_money::iso::Currency;

use crate::config::{CartConfig, LoggingConfig};

mod compare;
mod render;
mod summary;

#[derive(Debug, Parser)]
#[command(name = "grocer", about = "Compare a grocery basket across stores", long_about = None)]
pub(crate) struct Cli {
    /// Logging output settings.
    #[command(flatten)]
    pub(crate) logging: LoggingConfig,

    /// Cart settings.
    #[command(flatten)]
    cart: CartConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show every store's total and the cheapest complete store(s)
    Compare(compare::CompareArgs),

    /// Show the compact cart preview
    Summary,
}

impl Cli {
    /// Load configuration from `.env`, environment and CLI arguments
    pub(crate) fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    pub(crate) async fn run(self) -> Result<(), String> {
        let seeded = seed_cart(&self.cart).await?;
        let out = io::stdout().lock();

        match self.command {
            Commands::Compare(args) => compare::run(&seeded, args, out).await,
            Commands::Summary => summary::run(&seeded, out).await,
        }
    }
}

/// A cart built from a basket, ready to be read back.
pub(crate) struct SeededCart {
    pub(crate) context: AppContext,
    pub(crate) user: UserId,
    pub(crate) currency: &'static Currency,
}

async fn seed_cart(config: &CartConfig) -> Result<SeededCart, String> {
    let path = config
        .basket
        .clone()
        .unwrap_or_else(|| Path::new(FIXTURES_DIR).join("baskets").join("weekly.yml"));

    let basket = BasketFixture::from_path(&path).map_err(|error| error.to_string())?;

    let currency = match &config.currency {
        Some(code) => currency(code).map_err(|error| error.to_string())?,
        None => basket.currency().map_err(|error| error.to_string())?,
    };

    let context = AppContext::in_memory();
    let user = UserId::new(&config.user);

    for pick in basket.picks().map_err(|error| error.to_string())? {
        context
            .carts
            .add_brand(user.clone(), pick.offer, pick.quantity.get())
            .await
            .map_err(|error| format!("failed to add to cart: {error}"))?;
    }

    Ok(SeededCart {
        context,
        user,
        currency,
    })
}
