pub mod artist;
pub mod booking;
pub mod category;
pub mod ids;
pub mod price;
pub mod user;

pub use artist::ArtistRecord;
pub use booking::{Booking, BookingStatus};
pub use category::{Category, CategoryInfo};
pub use ids::{ArtistId, BookingId};
pub use price::{PriceBounds, PriceRange};
pub use user::{Role, User};
