//! Search backend access: wire types, errors and the HTTP client.

mod client;
mod error;
mod types;

pub use client::{HttpSearchBackend, SearchBackend};
pub use error::SearchError;
pub use types::{Query, SearchEnvelope, SearchResult};
