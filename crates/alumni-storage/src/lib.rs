//! Local storage for the Alumni Portal.
//!
//! A small string key/value store kept in the platform data directory. The
//! desktop client uses it the way a browser app uses `localStorage`: the
//! session token lives under `token` and the theme preference under
//! `darkMode`.
//!
//! # Example
//!
//! ```ignore
//! use alumni_storage::LocalStore;
//!
//! let mut store = LocalStore::load(LocalStore::default_path()?)?;
//! store.set_dark_mode(true)?;
//! assert!(store.dark_mode());
//! ```

mod error;
mod store;

pub use error::{Result, StorageError};
pub use store::{DARK_MODE_KEY, LocalStore, TOKEN_KEY};
