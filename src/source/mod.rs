//! UserSource trait and its HTTP implementation.
//!
//! Decouples the orchestrator from the transport so the search pipeline
//! can run against canned data in tests.

pub mod http;

use async_trait::async_trait;

use crate::client::FetchError;
use crate::models::User;

pub use http::HttpUserSource;

/// Something that can produce the full list of users in one call.
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetch and decode every user. Either the whole collection is
    /// returned or the call fails; there is no partial result.
    async fn fetch_users(&self) -> Result<Vec<User>, FetchError>;
}
