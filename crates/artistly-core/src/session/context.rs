use chrono::Utc;

use crate::error::Result;
use crate::model::User;
use crate::session::navigation::{navigation, NavItem};
use crate::session::store::{read_json, write_json, KeyValueStore};

/// Store key holding the signed-in [`User`] as JSON.
pub const USER_KEY: &str = "artistly_user";

/// Store key holding the session token.
pub const TOKEN_KEY: &str = "artistly_auth_token";

/// The current session, read from and written to an explicit store.
#[derive(Debug)]
pub struct SessionContext<S> {
    store: S,
}

impl<S: KeyValueStore> SessionContext<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    pub fn current_user(&self) -> Result<Option<User>> {
        read_json(&self.store, USER_KEY)
    }

    pub fn token(&self) -> Result<Option<String>> {
        self.store.get(TOKEN_KEY)
    }

    pub fn is_signed_in(&self) -> Result<bool> {
        Ok(self.current_user()?.is_some())
    }

    /// Record `user` as signed in and return the new session token.
    ///
    /// Tokens are placeholders (`mock_token_<millis>`); nothing verifies
    /// them.
    pub fn begin(&mut self, user: &User) -> Result<String> {
        let token = format!("mock_token_{}", Utc::now().timestamp_millis());
        write_json(&mut self.store, USER_KEY, user)?;
        self.store.set(TOKEN_KEY, &token)?;
        log::info!("Session started for {} ({})", user.email, user.role);
        Ok(token)
    }

    /// Forget the signed-in user and token.
    pub fn end(&mut self) -> Result<()> {
        self.store.remove(USER_KEY)?;
        self.store.remove(TOKEN_KEY)?;
        log::info!("Session ended");
        Ok(())
    }

    /// Navigation entries for whoever is signed in.
    pub fn navigation(&self) -> Result<Vec<NavItem>> {
        Ok(navigation(self.current_user()?.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;
    use crate::session::store::MemoryStore;

    fn planner() -> User {
        User::new("Pat Planner", "pat@example.com", Role::EventPlanner)
    }

    #[test]
    fn test_new_session_is_signed_out() {
        let session = SessionContext::new(MemoryStore::new());
        assert!(!session.is_signed_in().unwrap());
        assert!(session.current_user().unwrap().is_none());
        assert!(session.token().unwrap().is_none());
    }

    #[test]
    fn test_begin_stores_user_and_token() {
        let mut session = SessionContext::new(MemoryStore::new());
        let token = session.begin(&planner()).unwrap();

        assert!(token.starts_with("mock_token_"));
        assert_eq!(session.current_user().unwrap(), Some(planner()));
        assert_eq!(session.token().unwrap(), Some(token));
    }

    #[test]
    fn test_end_clears_session() {
        let mut session = SessionContext::new(MemoryStore::new());
        session.begin(&planner()).unwrap();
        session.end().unwrap();

        assert!(!session.is_signed_in().unwrap());
        assert!(session.token().unwrap().is_none());
    }

    #[test]
    fn test_end_without_session_is_ok() {
        let mut session = SessionContext::new(MemoryStore::new());
        assert!(session.end().is_ok());
    }

    #[test]
    fn test_user_stored_as_json() {
        let mut session = SessionContext::new(MemoryStore::new());
        session.begin(&planner()).unwrap();
        let raw = session.store().get(USER_KEY).unwrap().unwrap();
        assert!(raw.contains("\"role\":\"event-planner\""));
    }

    #[test]
    fn test_corrupt_user_is_an_error() {
        let mut store = MemoryStore::new();
        store.set(USER_KEY, "{not json").unwrap();
        let session = SessionContext::new(store);
        assert!(session.current_user().is_err());
    }
}
