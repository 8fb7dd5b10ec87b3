//! Seed catalogue loading from a TOML file.
//!
//! Products listed here are inserted on startup when their identifier is not
//! already present, which lets a fresh database come up with sample inventory.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// The whole seed file
#[derive(Debug, Deserialize)]
pub struct SeedConfig {
    /// Products to insert
    #[serde(default)]
    pub products: Vec<SeedProduct>,
}

/// A single `[[products]]` entry
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SeedProduct {
    /// Fixed identifier, so reseeding can detect existing rows
    pub product_id: String,
    /// Product name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Rating, defaults to 0
    #[serde(default)]
    pub rating: f64,
    /// Units in stock
    pub stock_quantity: i32,
}

/// Loads a seed catalogue from a TOML file.
///
/// # Errors
/// Returns `Error::Config` if the file cannot be read or is not valid TOML
/// for a [`SeedConfig`].
pub fn load_seed_file<P: AsRef<Path>>(path: P) -> Result<SeedConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load seed catalogue from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read seed file {}: {e}", path_ref.display()),
    })?;

    parse_seed(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse seed file {}: {e}", path_ref.display()),
    })
}

fn parse_seed(contents: &str) -> std::result::Result<SeedConfig, toml::de::Error> {
    toml::from_str(contents)
}
