//! The artist record store.
//!
//! A [`Catalog`] holds the artist records and the category list. It is
//! loaded once, validated, and then only read: every search works over a
//! borrowed slice of its records.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::{ArtistId, ArtistRecord, Category, CategoryInfo};

const BUNDLED_ARTISTS: &str = include_str!("../data/artists.json");
const BUNDLED_CATEGORIES: &str = include_str!("../data/categories.json");

/// Artist records plus the category list that defines valid categories.
#[derive(Debug, Clone)]
pub struct Catalog {
    artists: Vec<ArtistRecord>,
    categories: Vec<CategoryInfo>,
}

impl Catalog {
    /// Build a catalog from already-parsed data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidData`] when the category list repeats an id,
    /// two artists share an id, an artist has no languages, a rating falls
    /// outside 0 to 5, or an artist's category is missing from the list.
    pub fn new(artists: Vec<ArtistRecord>, categories: Vec<CategoryInfo>) -> Result<Self> {
        validate(&artists, &categories)?;
        log::info!(
            "Loaded catalog with {} artists in {} categories",
            artists.len(),
            categories.len()
        );
        Ok(Self {
            artists,
            categories,
        })
    }

    /// The dataset shipped with the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_ARTISTS, BUNDLED_CATEGORIES)
    }

    pub fn from_json(artists_json: &str, categories_json: &str) -> Result<Self> {
        let artists = serde_json::from_str(artists_json)?;
        let categories = serde_json::from_str(categories_json)?;
        Self::new(artists, categories)
    }

    /// Load artists from a JSON file. The category list comes from
    /// `categories_path` when given, otherwise from the bundled list.
    pub fn load(artists_path: &Path, categories_path: Option<&Path>) -> Result<Self> {
        log::debug!("Reading artists from {}", artists_path.display());
        let artists_json = std::fs::read_to_string(artists_path)?;
        let categories_json = match categories_path {
            Some(path) => {
                log::debug!("Reading categories from {}", path.display());
                std::fs::read_to_string(path)?
            }
            None => BUNDLED_CATEGORIES.to_string(),
        };
        Self::from_json(&artists_json, &categories_json)
    }

    /// All records, in catalog order.
    #[must_use]
    pub fn artists(&self) -> &[ArtistRecord] {
        &self.artists
    }

    /// The category list, in display order.
    #[must_use]
    pub fn categories(&self) -> &[CategoryInfo] {
        &self.categories
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.artists.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    pub fn get(&self, id: ArtistId) -> Result<&ArtistRecord> {
        self.artists
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| Error::NotFound {
                entity: "artist",
                id: id.to_string(),
            })
    }

    #[must_use]
    pub fn category(&self, id: Category) -> Option<&CategoryInfo> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Number of artists in each listed category, in display order.
    #[must_use]
    pub fn category_counts(&self) -> Vec<(&CategoryInfo, usize)> {
        self.categories
            .iter()
            .map(|info| {
                let count = self.artists.iter().filter(|a| a.category == info.id).count();
                (info, count)
            })
            .collect()
    }
}

fn validate(artists: &[ArtistRecord], categories: &[CategoryInfo]) -> Result<()> {
    let mut listed = HashSet::new();
    for info in categories {
        if !listed.insert(info.id) {
            return Err(Error::InvalidData(format!(
                "category {} listed more than once",
                info.id
            )));
        }
    }

    let mut ids = HashSet::new();
    for artist in artists {
        if !ids.insert(artist.id) {
            return Err(Error::InvalidData(format!(
                "duplicate artist id {}",
                artist.id
            )));
        }
        if artist.languages.is_empty() {
            return Err(Error::InvalidData(format!(
                "artist {} ({}) has no languages",
                artist.id, artist.name
            )));
        }
        if !(0.0..=5.0).contains(&artist.rating) {
            return Err(Error::InvalidData(format!(
                "artist {} ({}) has rating {} outside 0-5",
                artist.id, artist.name, artist.rating
            )));
        }
        if !listed.contains(&artist.category) {
            return Err(Error::InvalidData(format!(
                "artist {} ({}) has category {} which is not in the category list",
                artist.id, artist.name, artist.category
            )));
        }
    }

    Ok(())
}
