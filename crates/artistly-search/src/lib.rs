//! Artist search and filtering for artistly.
//!
//! A [`Query`] combines a free-text search term, a set of categories, a
//! location substring, and an optional [`PriceBucket`]. [`filter`] narrows
//! a sequence of artist records to those matching every active criterion,
//! keeping their original order.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod bucket;
pub mod engine;
pub mod query;

pub use bucket::PriceBucket;
pub use engine::filter;
pub use query::Query;
