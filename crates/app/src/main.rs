//! Grocer CLI

use std::process;

use crate::cli::Cli;

mod cli;
mod config;
mod observability;

#[tokio::main]
pub async fn main() {
    let cli = Cli::load().unwrap_or_else(|e| e.exit());

    if let Err(error) = observability::init_subscriber(&cli.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialise, must use eprintln"
        )]
        {
            eprintln!("{error}");
        }

        process::exit(1);
    }

    if let Err(error) = cli.run().await {
        #[expect(clippy::print_stderr, reason = "user-facing failure message")]
        {
            eprintln!("{error}");
        }

        process::exit(1);
    }
}
