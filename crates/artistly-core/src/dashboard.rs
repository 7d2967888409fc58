//! The artist manager's dashboard: roster, bookings, and summary figures.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::model::{ArtistId, ArtistRecord, Booking, BookingStatus, Category, CategoryInfo, User};
use crate::session::{KeyValueStore, SessionContext};
use crate::validation::FieldErrors;

const BUNDLED_BOOKINGS: &str = include_str!("../data/bookings.json");

const NEW_ARTIST_RATING: f64 = 4.5;
const NEW_ARTIST_IMAGE: &str = "/placeholder.svg?height=300&width=300";

/// The fields a manager fills in to add an artist to their roster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewArtist {
    pub name: String,
    pub category: String,
    pub bio: String,
    pub location: String,
    pub price_range: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_artists: usize,
    /// Bookings that are not cancelled.
    pub active_bookings: usize,
    /// Sum of confirmed booking amounts, in dollars.
    pub revenue: u64,
    /// Mean roster rating rounded to one decimal; 0 for an empty roster.
    pub average_rating: f64,
}

/// A manager's working copy of the roster.
///
/// Artists added here extend the dashboard's own roster only; the catalog
/// it was opened from is left untouched.
#[derive(Debug, Clone)]
pub struct Dashboard {
    manager: User,
    roster: Vec<ArtistRecord>,
    categories: Vec<CategoryInfo>,
    bookings: Vec<Booking>,
}

/// Bookings shipped with the crate.
pub fn bundled_bookings() -> Result<Vec<Booking>> {
    Ok(serde_json::from_str(BUNDLED_BOOKINGS)?)
}

impl Dashboard {
    /// Open the dashboard for the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AccessDenied`] when nobody is signed in or the user
    /// is not an artist manager.
    pub fn open<S: KeyValueStore>(session: &SessionContext<S>, catalog: &Catalog) -> Result<Self> {
        let Some(user) = session.current_user()? else {
            return Err(Error::AccessDenied(
                "sign in as an artist manager to open the dashboard".to_string(),
            ));
        };
        if !user.role.can_manage_artists() {
            log::warn!("Dashboard refused for {} ({})", user.email, user.role);
            return Err(Error::AccessDenied(format!(
                "the dashboard is only available to artist managers, not {}",
                user.role.title()
            )));
        }

        Ok(Self {
            manager: user,
            roster: catalog.artists().to_vec(),
            categories: catalog.categories().to_vec(),
            bookings: bundled_bookings()?,
        })
    }

    #[must_use]
    pub fn with_bookings(mut self, bookings: Vec<Booking>) -> Self {
        self.bookings = bookings;
        self
    }

    #[must_use]
    pub fn manager(&self) -> &User {
        &self.manager
    }

    #[must_use]
    pub fn roster(&self) -> &[ArtistRecord] {
        &self.roster
    }

    #[must_use]
    pub fn recent_bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Add an artist to the roster.
    ///
    /// Every field is required. The new record gets one more than the
    /// highest id on the roster, English as its only language, and a
    /// starting rating of 4.5 with no reviews.
    pub fn add_artist(&mut self, new: NewArtist) -> Result<&ArtistRecord> {
        let mut errors = FieldErrors::new();
        let fields = [
            &new.name,
            &new.category,
            &new.bio,
            &new.location,
            &new.price_range,
        ];
        if fields.iter().any(|f| f.is_empty()) {
            errors.insert("form", "Please fill in all fields");
            return Err(Error::Validation(errors));
        }

        let category = Category::from_id(&new.category)
            .filter(|c| self.categories.iter().any(|info| info.id == *c));
        let Some(category) = category else {
            errors.insert("category", format!("Unknown category: {}", new.category));
            return Err(Error::Validation(errors));
        };

        let id = self
            .roster
            .iter()
            .map(|a| a.id.get())
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| Error::InvalidData("roster is full".to_string()))?;
        let mut artist = ArtistRecord::new(id, new.name, category)
            .with_bio(new.bio)
            .with_location(new.location)
            .with_price_range(new.price_range)
            .with_rating(NEW_ARTIST_RATING, 0);
        artist.image = Some(NEW_ARTIST_IMAGE.to_string());

        log::info!("{} added artist {} ({})", self.manager.email, artist.name, ArtistId::new(id));
        self.roster.push(artist);
        self.roster
            .last()
            .ok_or_else(|| Error::InvalidData("roster is empty after insert".to_string()))
    }

    #[must_use]
    pub fn stats(&self) -> DashboardStats {
        let active_bookings = self.bookings.iter().filter(|b| b.status.is_active()).count();
        let revenue = self
            .bookings
            .iter()
            .filter(|b| b.status == BookingStatus::Confirmed)
            .map(|b| u64::from(b.amount))
            .sum();
        let average_rating = if self.roster.is_empty() {
            0.0
        } else {
            let total: f64 = self.roster.iter().map(|a| a.rating).sum();
            (total / self.roster.len() as f64 * 10.0).round() / 10.0
        };

        DashboardStats {
            total_artists: self.roster.len(),
            active_bookings,
            revenue,
            average_rating,
        }
    }
}
