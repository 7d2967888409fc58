pub mod artists;
pub mod auth;
pub mod categories;
pub mod config;
pub mod dashboard;
pub mod onboard;

use anyhow::{Context, Result};
use artistly_core::session::FileStore;
use artistly_core::Catalog;

use crate::config::Config;

/// Load the configured catalog, or the bundled one.
pub fn load_catalog(config: &Config) -> Result<Catalog> {
    match &config.catalog_path {
        Some(path) => Catalog::load(path, config.categories_path.as_deref())
            .with_context(|| format!("Failed to load catalog from {}", path.display())),
        None => Catalog::bundled().context("Failed to load bundled catalog"),
    }
}

pub fn open_store(config: &Config) -> Result<FileStore> {
    FileStore::open(&config.session_path).with_context(|| {
        format!(
            "Failed to open session store {}",
            config.session_path.display()
        )
    })
}

/// Print each field problem of a validation error and turn it into a short
/// summary; other errors pass through unchanged.
pub fn report(err: artistly_core::Error) -> anyhow::Error {
    match err {
        artistly_core::Error::Validation(errors) => {
            eprintln!("Please fix the following:");
            for (field, message) in errors.iter() {
                eprintln!("  {field}: {message}");
            }
            anyhow::anyhow!("{} field(s) need attention", errors.len())
        }
        other => other.into(),
    }
}
