use std::fmt;

use artistly_core::model::PriceBounds;

/// A coarse fee band used to narrow the catalog by price.
///
/// Both ends of every band are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceBucket {
    /// `0-500`: highest amount at most 500.
    UpTo500,
    /// `500-1000`
    From500To1000,
    /// `1000-2000`
    From1000To2000,
    /// `2000-5000`
    From2000To5000,
    /// `5000+`: lowest amount at least 5000.
    From5000,
}

const BUCKET_IDS: &[(PriceBucket, &str, &str)] = &[
    (PriceBucket::UpTo500, "0-500", "Under $500"),
    (PriceBucket::From500To1000, "500-1000", "$500 - $1,000"),
    (PriceBucket::From1000To2000, "1000-2000", "$1,000 - $2,000"),
    (PriceBucket::From2000To5000, "2000-5000", "$2,000 - $5,000"),
    (PriceBucket::From5000, "5000+", "$5,000+"),
];

impl PriceBucket {
    pub const ALL: [Self; 5] = [
        Self::UpTo500,
        Self::From500To1000,
        Self::From1000To2000,
        Self::From2000To5000,
        Self::From5000,
    ];

    #[must_use]
    pub fn id(self) -> &'static str {
        BUCKET_IDS
            .iter()
            .find(|(b, _, _)| *b == self)
            .map_or("", |(_, id, _)| id)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        BUCKET_IDS
            .iter()
            .find(|(b, _, _)| *b == self)
            .map_or("", |(_, _, label)| label)
    }

    /// Look up a bucket by identifier. Unknown or empty identifiers have no
    /// bucket, which callers treat as "any price".
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        BUCKET_IDS
            .iter()
            .find(|(_, canonical, _)| *canonical == id.trim())
            .map(|(b, _, _)| *b)
    }

    /// Whether a price range with these bounds falls in the bucket.
    ///
    /// A price with no amounts at all never matches.
    #[must_use]
    pub fn matches(self, bounds: Option<PriceBounds>) -> bool {
        let Some(PriceBounds { min, max }) = bounds else {
            return false;
        };
        match self {
            Self::UpTo500 => max <= 500,
            Self::From500To1000 => min >= 500 && max <= 1000,
            Self::From1000To2000 => min >= 1000 && max <= 2000,
            Self::From2000To5000 => min >= 2000 && max <= 5000,
            Self::From5000 => min >= 5000,
        }
    }
}

impl fmt::Display for PriceBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
