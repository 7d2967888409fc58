//! Explicit session state.
//!
//! The signed-in user lives in a [`KeyValueStore`] (browser local storage
//! in the web front end, a JSON file for the CLI). Nothing reads it
//! ambiently: callers build a [`SessionContext`] over a store and pass it
//! to whatever needs the current user.

pub mod context;
pub mod navigation;
pub mod store;

pub use context::SessionContext;
pub use navigation::{navigation, NavItem};
pub use store::{read_json, write_json, FileStore, KeyValueStore, MemoryStore};
