//! REST client for the Alumni Portal backend.
//!
//! Thin async wrapper over `reqwest` exposing one method per backend
//! operation. Request and response types come from `alumni-model`.
//!
//! ```ignore
//! use alumni_client::PortalClient;
//! use alumni_model::JobFilter;
//!
//! let client = PortalClient::new("http://localhost:5000")?;
//! let jobs = client.list_jobs(&JobFilter::default()).await?;
//! ```

mod client;
mod error;

pub use client::{DEFAULT_BASE_URL, PortalClient};
pub use error::{ApiError, Result};
