use serde::Serialize;

use crate::model::{Role, User};

/// A top-level navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
}

impl NavItem {
    const fn new(href: &'static str, label: &'static str) -> Self {
        Self { href, label }
    }
}

const HOME: NavItem = NavItem::new("/", "Home");
const FIND_ARTISTS: NavItem = NavItem::new("/artists", "Find Artists");
const ADD_ARTIST: NavItem = NavItem::new("/onboard", "Add Artist");
const DASHBOARD: NavItem = NavItem::new("/dashboard", "Dashboard");
const JOIN_AS_ARTIST: NavItem = NavItem::new("/onboard", "Join as Artist");

/// Derive the navigation menu from the signed-in user, if any.
#[must_use]
pub fn navigation(user: Option<&User>) -> Vec<NavItem> {
    let mut items = vec![HOME, FIND_ARTISTS];
    match user.map(|u| u.role) {
        Some(Role::ArtistManager) => items.extend([ADD_ARTIST, DASHBOARD]),
        Some(Role::EventPlanner) | None => items.push(JOIN_AS_ARTIST),
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[NavItem]) -> Vec<&str> {
        items.iter().map(|i| i.label).collect()
    }

    #[test]
    fn test_signed_out_navigation() {
        assert_eq!(
            labels(&navigation(None)),
            vec!["Home", "Find Artists", "Join as Artist"]
        );
    }

    #[test]
    fn test_event_planner_navigation() {
        let user = User::new("Pat", "pat@example.com", Role::EventPlanner);
        assert_eq!(
            labels(&navigation(Some(&user))),
            vec!["Home", "Find Artists", "Join as Artist"]
        );
    }

    #[test]
    fn test_artist_manager_navigation() {
        let user = User::new("Morgan", "morgan@example.com", Role::ArtistManager);
        let items = navigation(Some(&user));
        assert_eq!(
            labels(&items),
            vec!["Home", "Find Artists", "Add Artist", "Dashboard"]
        );
        assert_eq!(items[3].href, "/dashboard");
    }
}
