use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The kind of performer an artist record describes.
///
/// Serialized with the plural identifiers used by the category list
/// (`singers`, `djs`, `dancers`, `speakers`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "singers")]
    Singer,
    #[serde(rename = "djs")]
    Dj,
    #[serde(rename = "dancers")]
    Dancer,
    #[serde(rename = "speakers")]
    Speaker,
}

/// Identifier and display name for each [`Category`] variant.
const CATEGORY_NAMES: &[(Category, &str, &str)] = &[
    (Category::Singer, "singers", "Singer"),
    (Category::Dj, "djs", "DJ"),
    (Category::Dancer, "dancers", "Dancer"),
    (Category::Speaker, "speakers", "Speaker"),
];

impl Category {
    pub const ALL: [Self; 4] = [Self::Singer, Self::Dj, Self::Dancer, Self::Speaker];

    /// The serialized identifier, e.g. `"djs"`.
    #[must_use]
    pub fn id(self) -> &'static str {
        CATEGORY_NAMES
            .iter()
            .find(|(c, _, _)| *c == self)
            .map_or("unknown", |(_, id, _)| id)
    }

    /// The singular display label, e.g. `"DJ"`.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        CATEGORY_NAMES
            .iter()
            .find(|(c, _, _)| *c == self)
            .map_or("Unknown", |(_, _, name)| name)
    }

    /// Look up a category by identifier (case-insensitive).
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        CATEGORY_NAMES
            .iter()
            .find(|(_, canonical, _)| canonical.eq_ignore_ascii_case(id))
            .map(|(c, _, _)| *c)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| Error::InvalidData(format!("unknown category: {s}")))
    }
}

/// An entry of the category list, which defines the valid categories and
/// their display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub id: Category,
    pub name: String,

    #[serde(default)]
    pub icon: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

impl CategoryInfo {
    #[must_use]
    pub fn new(id: Category, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            icon: None,
            description: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_ids_are_plural() {
        assert_eq!(Category::Singer.id(), "singers");
        assert_eq!(Category::Dj.id(), "djs");
        assert_eq!(Category::Dancer.id(), "dancers");
        assert_eq!(Category::Speaker.id(), "speakers");
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Category::Dj.display_name(), "DJ");
        assert_eq!(Category::Speaker.display_name(), "Speaker");
    }

    #[test]
    fn test_from_id_is_case_insensitive() {
        assert_eq!(Category::from_id("DJs"), Some(Category::Dj));
        assert_eq!(Category::from_id("jugglers"), None);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("magicians".parse::<Category>().is_err());
        assert_eq!("dancers".parse::<Category>().unwrap(), Category::Dancer);
    }

    #[test]
    fn test_serde_uses_identifiers() {
        let json = serde_json::to_string(&Category::Singer).unwrap();
        assert_eq!(json, "\"singers\"");
        let info: CategoryInfo =
            serde_json::from_str(r#"{"id": "djs", "name": "DJs", "icon": "🎧"}"#).unwrap();
        assert_eq!(info.id, Category::Dj);
        assert_eq!(info.icon.as_deref(), Some("🎧"));
        assert!(info.description.is_none());
    }
}
