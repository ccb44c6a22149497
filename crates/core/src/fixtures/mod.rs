//! Fixtures
//!
//! YAML descriptions of carts and baskets, used by the tests and the command-line driver.

use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::prices::PriceError;

pub mod baskets;
pub mod carts;

pub use baskets::{BasketFixture, BasketPick};
pub use carts::CartFixture;

/// Directory holding the fixtures shipped with this crate.
pub const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures");

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file {path}: {source}")]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price or currency
    #[error(transparent)]
    Price(#[from] PriceError),

    /// A pick refers to a brand the basket does not list
    #[error("Brand not found: {0}")]
    BrandNotFound(String),
}

/// Path of a named fixture set inside [`FIXTURES_DIR`].
pub fn fixture_path(kind: &str, name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(kind).join(format!("{name}.yml"))
}

pub(crate) fn read_fixture(path: &Path) -> Result<String, FixtureError> {
    fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })
}
