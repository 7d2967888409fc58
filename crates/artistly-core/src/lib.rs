//! Core domain model for artistly.
//!
//! This crate defines the artist catalog (records, categories, price
//! ranges), the explicit session context over a key-value store, the
//! closed role model that drives navigation, a non-production identity
//! provider, onboarding validation, and the manager dashboard.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod catalog;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod identity;
pub mod model;
pub mod onboarding;
pub mod session;
pub mod validation;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use validation::FieldErrors;
