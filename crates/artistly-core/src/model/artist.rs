use serde::{Deserialize, Serialize};

use crate::model::category::Category;
use crate::model::ids::ArtistId;
use crate::model::price::PriceRange;

/// A performer's catalog entry.
///
/// Records are loaded once with the [`Catalog`](crate::Catalog) and never
/// mutated afterwards. Field names serialize in camelCase to match the
/// catalog JSON (`priceRange`, `reviewCount`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistRecord {
    pub id: ArtistId,
    pub name: String,
    pub category: Category,
    pub bio: String,
    pub price_range: PriceRange,
    pub location: String,
    pub languages: Vec<String>,

    /// Profile image path or URL; display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Average review score, 0 to 5.
    pub rating: f64,
    pub review_count: u32,
}

impl ArtistRecord {
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>, category: Category) -> Self {
        Self {
            id: ArtistId::new(id),
            name: name.into(),
            category,
            bio: String::new(),
            price_range: PriceRange::new(""),
            location: String::new(),
            languages: vec![String::from("English")],
            image: None,
            rating: 0.0,
            review_count: 0,
        }
    }

    #[must_use]
    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = bio.into();
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    #[must_use]
    pub fn with_price_range(mut self, price_range: impl Into<String>) -> Self {
        self.price_range = PriceRange::new(price_range);
        self
    }

    #[must_use]
    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_rating(mut self, rating: f64, review_count: u32) -> Self {
        self.rating = rating;
        self.review_count = review_count;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artist_builder() {
        let artist = ArtistRecord::new(1, "Sarah Johnson", Category::Singer)
            .with_bio("wedding singer")
            .with_location("New York, NY")
            .with_price_range("$500-1000")
            .with_rating(4.9, 127);

        assert_eq!(artist.id, ArtistId::new(1));
        assert_eq!(artist.price_range.as_str(), "$500-1000");
        assert_eq!(artist.languages, vec!["English".to_string()]);
        assert_eq!(artist.review_count, 127);
    }

    #[test]
    fn test_artist_deserializes_camel_case() {
        let json = r#"{
            "id": 3,
            "name": "DJ Mike Rodriguez",
            "category": "djs",
            "bio": "Club and corporate events",
            "priceRange": "$800-1500",
            "location": "Miami, FL",
            "languages": ["English", "Spanish"],
            "image": "/placeholder.svg",
            "rating": 4.7,
            "reviewCount": 89
        }"#;
        let artist: ArtistRecord = serde_json::from_str(json).unwrap();
        assert_eq!(artist.category, Category::Dj);
        assert_eq!(artist.price_range.as_str(), "$800-1500");
        assert_eq!(artist.review_count, 89);
    }

    #[test]
    fn test_unknown_category_fails_to_deserialize() {
        let json = r#"{"id": 1, "name": "X", "category": "jugglers", "bio": "",
            "priceRange": "", "location": "", "languages": ["English"],
            "rating": 4.0, "reviewCount": 0}"#;
        assert!(serde_json::from_str::<ArtistRecord>(json).is_err());
    }
}
