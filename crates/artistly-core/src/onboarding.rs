//! Artist onboarding applications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::Category;
use crate::validation::FieldErrors;

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_BIO_LEN: usize = 50;
pub const MAX_BIO_LEN: usize = 500;

/// Languages offered on the application form.
pub const LANGUAGES: &[&str] = &[
    "English",
    "Spanish",
    "French",
    "German",
    "Italian",
    "Portuguese",
    "Russian",
    "Mandarin",
    "Japanese",
    "Korean",
    "Arabic",
    "Hindi",
];

/// Fee ranges offered on the application form, as `(value, label)`.
pub const FEE_RANGES: &[(&str, &str)] = &[
    ("$200-500", "$200 - $500"),
    ("$500-1000", "$500 - $1,000"),
    ("$1000-2000", "$1,000 - $2,000"),
    ("$2000-5000", "$2,000 - $5,000"),
    ("$5000+", "$5,000+"),
];

/// A performer's request to join the marketplace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistApplication {
    pub artist_name: String,
    pub bio: String,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub languages: Vec<String>,
    pub fee_range: String,
    pub location: String,

    /// File name of the uploaded profile picture, if any.
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// An application that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub application: ArtistApplication,
    pub received_at: DateTime<Utc>,
}

impl ArtistApplication {
    /// Check every field, collecting all problems.
    pub fn validate(&self) -> Result<()> {
        let mut errors = FieldErrors::new();

        let name_len = self.artist_name.chars().count();
        if name_len == 0 {
            errors.insert("artistName", "Artist name is required");
        } else if name_len < MIN_NAME_LEN {
            errors.insert("artistName", "Name must be at least 2 characters");
        }

        let bio_len = self.bio.chars().count();
        if bio_len == 0 {
            errors.insert("bio", "Bio is required");
        } else if bio_len < MIN_BIO_LEN {
            errors.insert("bio", "Bio must be at least 50 characters");
        } else if bio_len > MAX_BIO_LEN {
            errors.insert("bio", "Bio must be less than 500 characters");
        }

        if self.categories.is_empty() {
            errors.insert("categories", "Please select at least one category");
        }
        if self.languages.is_empty() {
            errors.insert("languages", "Please select at least one language");
        }

        if self.fee_range.is_empty() {
            errors.insert("feeRange", "Fee range is required");
        } else if !FEE_RANGES.iter().any(|(value, _)| *value == self.fee_range) {
            errors.insert("feeRange", "Fee range must be one of the offered ranges");
        }

        if self.location.is_empty() {
            errors.insert("location", "Location is required");
        }

        errors.into_result()
    }

    /// Validate and accept the application.
    pub fn submit(self) -> Result<Submission> {
        self.validate()?;
        log::info!(
            "Received application from {} ({} categories, {} languages)",
            self.artist_name,
            self.categories.len(),
            self.languages.len()
        );
        Ok(Submission {
            application: self,
            received_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn application() -> ArtistApplication {
        ArtistApplication {
            artist_name: "Nina Park".to_string(),
            bio: "x".repeat(MIN_BIO_LEN),
            categories: vec![Category::Singer],
            languages: vec!["English".to_string(), "Korean".to_string()],
            fee_range: "$500-1000".to_string(),
            location: "Seattle, WA".to_string(),
            profile_image: None,
        }
    }

    fn errors_of(app: &ArtistApplication) -> FieldErrors {
        match app.validate() {
            Err(Error::Validation(errors)) => errors,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_application() {
        assert!(application().validate().is_ok());
    }

    #[test]
    fn test_empty_application_reports_every_field() {
        let errors = errors_of(&ArtistApplication::default());
        assert_eq!(errors.len(), 6);
        assert_eq!(errors.get("artistName"), Some("Artist name is required"));
        assert_eq!(errors.get("bio"), Some("Bio is required"));
        assert_eq!(errors.get("feeRange"), Some("Fee range is required"));
    }

    #[test]
    fn test_short_name() {
        let app = ArtistApplication {
            artist_name: "N".to_string(),
            ..application()
        };
        assert_eq!(
            errors_of(&app).get("artistName"),
            Some("Name must be at least 2 characters")
        );
    }

    #[test]
    fn test_bio_length_boundaries() {
        let with_bio = |n: usize| ArtistApplication {
            bio: "b".repeat(n),
            ..application()
        };
        assert_eq!(
            errors_of(&with_bio(49)).get("bio"),
            Some("Bio must be at least 50 characters")
        );
        assert!(with_bio(50).validate().is_ok());
        assert!(with_bio(500).validate().is_ok());
        assert_eq!(
            errors_of(&with_bio(501)).get("bio"),
            Some("Bio must be less than 500 characters")
        );
    }

    #[test]
    fn test_unknown_fee_range() {
        let app = ArtistApplication {
            fee_range: "$1-2".to_string(),
            ..application()
        };
        assert!(errors_of(&app).get("feeRange").is_some());
    }

    #[test]
    fn test_submit_keeps_application() {
        let submission = application().submit().unwrap();
        assert_eq!(submission.application.artist_name, "Nina Park");
    }

    #[test]
    fn test_deserializes_form_json() {
        let json = r#"{
            "artistName": "Nina Park",
            "bio": "Soprano with twenty years of opera, recital, and wedding experience.",
            "categories": ["singers", "speakers"],
            "languages": ["English"],
            "feeRange": "$2000-5000",
            "location": "Seattle, WA"
        }"#;
        let app: ArtistApplication = serde_json::from_str(json).unwrap();
        assert_eq!(app.categories, vec![Category::Singer, Category::Speaker]);
        assert!(app.validate().is_ok());
    }
}
