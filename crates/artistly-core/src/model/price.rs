use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::IntErrorKind;
use std::sync::LazyLock;

#[allow(clippy::unwrap_used)]
static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

/// The lowest and highest amounts mentioned in a price range string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBounds {
    pub min: u64,
    pub max: u64,
}

/// A free-form fee description such as `"$500-1000"` or `"$5000+"`.
///
/// The string is kept as written. A trailing `+` marks an open-ended upper
/// bound; anything without digits (e.g. `"Negotiable"`) has no bounds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceRange(String);

impl PriceRange {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every run of ASCII digits, in order of appearance.
    ///
    /// Runs too large for a `u64` saturate instead of failing. Digits from
    /// other scripts are not amounts.
    pub fn amounts(&self) -> impl Iterator<Item = u64> + '_ {
        DIGITS
            .find_iter(&self.0)
            .filter_map(|m| match m.as_str().parse::<u64>() {
                Ok(n) => Some(n),
                Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(u64::MAX),
                Err(_) => None,
            })
    }

    /// Minimum and maximum of [`amounts`](Self::amounts), or `None` when the
    /// string holds no digits.
    #[must_use]
    pub fn bounds(&self) -> Option<PriceBounds> {
        self.amounts().fold(None, |acc, n| match acc {
            None => Some(PriceBounds { min: n, max: n }),
            Some(b) => Some(PriceBounds {
                min: b.min.min(n),
                max: b.max.max(n),
            }),
        })
    }

    #[must_use]
    pub fn is_open_ended(&self) -> bool {
        self.0.trim_end().ends_with('+')
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PriceRange {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_of_closed_range() {
        let range = PriceRange::new("$500-1000");
        assert_eq!(range.bounds(), Some(PriceBounds { min: 500, max: 1000 }));
        assert!(!range.is_open_ended());
    }

    #[test]
    fn test_bounds_of_open_range() {
        let range = PriceRange::new("$5000+");
        assert_eq!(range.bounds(), Some(PriceBounds { min: 5000, max: 5000 }));
        assert!(range.is_open_ended());
    }

    #[test]
    fn test_bounds_ignore_token_order() {
        let range = PriceRange::new("from $2000 down to $800");
        assert_eq!(range.bounds(), Some(PriceBounds { min: 800, max: 2000 }));
    }

    #[test]
    fn test_no_digits_has_no_bounds() {
        assert_eq!(PriceRange::new("Negotiable").bounds(), None);
        assert_eq!(PriceRange::new("").bounds(), None);
    }

    #[test]
    fn test_non_ascii_digits_have_no_bounds() {
        assert_eq!(PriceRange::new("٥٠٠٠").bounds(), None);
        assert_eq!(PriceRange::new("$٢٠٠-٥٠٠").bounds(), None);
        assert_eq!(PriceRange::new("١٠٠٠").amounts().count(), 0);
    }

    #[test]
    fn test_mixed_words_and_digits() {
        let range = PriceRange::new("about 800 dollars, ٥٠٠٠ on weekends");
        assert_eq!(range.bounds(), Some(PriceBounds { min: 800, max: 800 }));
    }

    #[test]
    fn test_thousands_separator_splits_tokens() {
        let amounts: Vec<u64> = PriceRange::new("$1,500").amounts().collect();
        assert_eq!(amounts, vec![1, 500]);
    }

    #[test]
    fn test_huge_amount_saturates() {
        let range = PriceRange::new("$99999999999999999999999");
        assert_eq!(range.bounds().map(|b| b.max), Some(u64::MAX));
    }
}
