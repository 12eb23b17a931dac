//! Search service integration.
//!
//! - `types` - the typed recipe record as returned by the service
//! - `client` - the HTTP client that issues search requests

mod client;
mod types;

pub use client::{SearchClient, SearchError};
pub use types::Recipe;
