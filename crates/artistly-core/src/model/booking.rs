use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::ids::BookingId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Cancelled,
}

impl BookingStatus {
    /// Cancelled bookings are the only inactive ones.
    #[must_use]
    pub fn is_active(self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Confirmed => "confirmed",
            Self::Pending => "pending",
            Self::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

/// A booking request shown on the manager dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    /// Name of the booked artist.
    pub artist: String,
    pub event: String,
    pub date: NaiveDate,
    pub status: BookingStatus,
    /// Agreed fee in whole dollars.
    pub amount: u32,
}
