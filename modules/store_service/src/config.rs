//! Configuration for store service module

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Store service configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Example data seeding
    #[serde(default)]
    pub seed: SeedConfig,
}

/// Seeding of an empty store at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedConfig {
    /// Seed when the store has no products
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// JSON file with the products to seed
    #[serde(default = "default_seed_file")]
    pub file: PathBuf,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            file: default_seed_file(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_seed_file() -> PathBuf {
    PathBuf::from("data/art.json")
}
