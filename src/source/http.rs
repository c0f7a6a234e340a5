//! [`UserSource`] backed by the remote `users` resource.

use async_trait::async_trait;
use tracing::info;

use super::UserSource;
use crate::client::{FetchClient, FetchError};
use crate::endpoint::EndpointDescriptor;
use crate::models::User;

/// Fetches users over HTTP from a single endpoint.
#[derive(Debug, Clone)]
pub struct HttpUserSource {
    client: FetchClient,
    endpoint: EndpointDescriptor,
}

impl HttpUserSource {
    pub fn new(client: FetchClient, endpoint: EndpointDescriptor) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl UserSource for HttpUserSource {
    async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
        info!(endpoint = %self.endpoint, "fetching users");
        let users: Vec<User> = self.client.fetch(&self.endpoint).await?;
        info!(count = users.len(), "decoded users");
        Ok(users)
    }
}

