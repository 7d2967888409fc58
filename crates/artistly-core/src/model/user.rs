use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// What a signed-in user came to the marketplace to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// Finds and books artists for events.
    EventPlanner,
    /// Manages a roster of artists and receives booking requests.
    ArtistManager,
}

impl Role {
    pub const ALL: [Self; 2] = [Self::EventPlanner, Self::ArtistManager];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::EventPlanner => "event-planner",
            Self::ArtistManager => "artist-manager",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::EventPlanner => "Event Planner",
            Self::ArtistManager => "Artist Manager",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::EventPlanner => "Find and book talented artists for your events",
            Self::ArtistManager => "Manage artists and receive booking opportunities",
        }
    }

    #[must_use]
    pub fn features(self) -> &'static [&'static str] {
        match self {
            Self::EventPlanner => &[
                "Browse artist profiles",
                "Request quotes",
                "Manage bookings",
                "Event planning tools",
            ],
            Self::ArtistManager => &[
                "Artist dashboard",
                "Booking management",
                "Lead tracking",
                "Performance analytics",
            ],
        }
    }

    /// Whether this role may open the dashboard and add artists.
    #[must_use]
    pub fn can_manage_artists(self) -> bool {
        match self {
            Self::ArtistManager => true,
            Self::EventPlanner => false,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidData(format!("unknown role: {s}")))
    }
}

/// The identity of the signed-in user, as kept in the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl User {
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role,
        }
    }

    /// Upper-cased first letter of each space-separated word of the name.
    #[must_use]
    pub fn initials(&self) -> String {
        crate::format::user_initials(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&Role::ArtistManager).unwrap(),
            "\"artist-manager\""
        );
        let role: Role = serde_json::from_str("\"event-planner\"").unwrap();
        assert_eq!(role, Role::EventPlanner);
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("artist-manager".parse::<Role>().unwrap(), Role::ArtistManager);
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn test_only_managers_manage_artists() {
        assert!(Role::ArtistManager.can_manage_artists());
        assert!(!Role::EventPlanner.can_manage_artists());
    }

    #[test]
    fn test_user_initials() {
        let user = User::new("sarah jane johnson", "s@example.com", Role::EventPlanner);
        assert_eq!(user.initials(), "SJJ");
    }
}
