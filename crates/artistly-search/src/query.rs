use std::collections::BTreeSet;

use artistly_core::model::{ArtistRecord, Category, CategoryInfo};
use artistly_core::{Error, Result};

use crate::bucket::PriceBucket;
use crate::engine::Matcher;

/// The active search and filter criteria.
///
/// Every field starts in its match-all state: an empty search term, no
/// categories, an empty location, and no price bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Looked for in name, bio and location, ignoring case.
    pub search_term: String,
    /// Record category must be one of these.
    pub categories: BTreeSet<Category>,
    /// Looked for in location, ignoring case.
    pub location: String,
    pub price_bucket: Option<PriceBucket>,
}

impl Query {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.insert(category);
        self
    }

    #[must_use]
    pub fn with_categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories.extend(categories);
        self
    }

    /// Add categories by identifier, checking each against the category
    /// list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidData`] naming the first identifier that is
    /// not in `list`.
    pub fn with_category_ids<I, S>(mut self, list: &[CategoryInfo], ids: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for id in ids {
            let id = id.as_ref();
            let category = Category::from_id(id)
                .filter(|c| list.iter().any(|info| info.id == *c))
                .ok_or_else(|| {
                    let valid: Vec<_> = list.iter().map(|info| info.id.id()).collect();
                    Error::InvalidData(format!(
                        "unknown category '{id}' (valid: {})",
                        valid.join(", ")
                    ))
                })?;
            self.categories.insert(category);
        }
        Ok(self)
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    #[must_use]
    pub fn with_price_bucket(mut self, bucket: PriceBucket) -> Self {
        self.price_bucket = Some(bucket);
        self
    }

    /// Select a price bucket by identifier; unknown identifiers clear it.
    #[must_use]
    pub fn with_price_bucket_id(mut self, id: &str) -> Self {
        self.price_bucket = PriceBucket::from_id(id);
        if self.price_bucket.is_none() && !id.is_empty() {
            log::debug!("Ignoring unknown price bucket '{}'", id);
        }
        self
    }

    /// True when no criterion is active, so every record matches.
    #[must_use]
    pub fn is_match_all(&self) -> bool {
        self.search_term.is_empty()
            && self.categories.is_empty()
            && self.location.is_empty()
            && self.price_bucket.is_none()
    }

    /// Whether a single record satisfies every active criterion.
    #[must_use]
    pub fn matches(&self, artist: &ArtistRecord) -> bool {
        Matcher::new(self).matches(artist)
    }
}
