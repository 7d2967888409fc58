//! Field-level validation errors shared by the sign-in, sign-up, onboarding
//! and dashboard forms.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Error, Result};

/// A set of validation messages keyed by form field.
///
/// Every problem with a form is collected before reporting, so callers can
/// show all of them at once. Inserting a second message for the same field
/// replaces the first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `Ok(())` when no field failed, otherwise [`Error::Validation`].
    pub fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_errors_are_ok() {
        assert!(FieldErrors::new().into_result().is_ok());
    }

    #[test]
    fn test_later_message_replaces_earlier() {
        let mut errors = FieldErrors::new();
        errors.insert("email", "Email is invalid");
        errors.insert("email", "An account with this email already exists");
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("email"),
            Some("An account with this email already exists")
        );
    }

    #[test]
    fn test_display_joins_fields_in_order() {
        let mut errors = FieldErrors::new();
        errors.insert("password", "Password is required");
        errors.insert("email", "Email is required");
        assert_eq!(
            errors.to_string(),
            "email: Email is required; password: Password is required"
        );
    }

    #[test]
    fn test_into_result_carries_errors() {
        let mut errors = FieldErrors::new();
        errors.insert("name", "Name is required");
        match errors.into_result() {
            Err(Error::Validation(e)) => assert_eq!(e.get("name"), Some("Name is required")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
