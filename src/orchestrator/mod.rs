//! Search orchestrator: background fetch, hand-off, and linear search.
//!
//! The fetch runs on its own tokio task. Its outcome is delivered exactly
//! once over a oneshot channel, and only the receiving side ever sees the
//! decoded collection, so no shared state or locking is involved.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tokio::sync::oneshot;
use tracing::{debug, info};

use crate::client::{FetchClient, FetchError};
use crate::config::Config;
use crate::models::User;
use crate::search;
use crate::source::{HttpUserSource, UserSource};

/// Errors that keep the orchestrator from obtaining a user list.
#[derive(Error, Debug)]
pub enum OrchestratorError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("fetch task ended before delivering a result")]
    Interrupted,
}

/// Final result of a search run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Report {
    /// The target was present. `names` lists every fetched user in
    /// original order.
    Found { user: User, names: Vec<String> },
    NotFound,
    /// The fetch failed; the search was not run.
    #[serde(rename = "error")]
    Failed { message: String },
}

/// Fetches the user list once and searches it for a target user.
pub struct SearchOrchestrator {
    source: Arc<dyn UserSource>,
    target: User,
}

impl SearchOrchestrator {
    pub fn new(source: Arc<dyn UserSource>, target: User) -> Self {
        Self { source, target }
    }

    /// Orchestrator fetching over HTTP from the configured location.
    pub fn from_config(config: &Config) -> Self {
        let source = HttpUserSource::new(FetchClient::new(), config.users_endpoint());
        Self::new(Arc::new(source), config.target_user())
    }

    pub fn target(&self) -> &User {
        &self.target
    }

    /// Run the fetch-then-search pipeline exactly once.
    pub async fn run(&self) -> Report {
        match self.dispatch().await {
            Ok(users) => evaluate(users, &self.target),
            Err(e) => {
                info!(error = %e, "fetch failed");
                Report::Failed {
                    message: e.to_string(),
                }
            }
        }
    }

    /// Spawn the fetch and wait for its single outcome.
    async fn dispatch(&self) -> Result<Vec<User>, OrchestratorError> {
        let (tx, rx) = oneshot::channel();
        let source = Arc::clone(&self.source);

        tokio::spawn(async move {
            let outcome = source.fetch_users().await;
            if tx.send(outcome).is_err() {
                debug!("search run dropped before fetch completed");
            }
        });

        match rx.await {
            Ok(outcome) => Ok(outcome?),
            Err(_) => Err(OrchestratorError::Interrupted),
        }
    }
}

/// Search `users` for `target` and build the report.
///
/// Takes ownership of the collection so the report is always built from
/// the same decode event that produced the match.
pub fn evaluate(users: Vec<User>, target: &User) -> Report {
    match search::find(&users, target) {
        Some(found) => {
            info!(id = found.id(), "target user found");
            Report::Found {
                user: found.clone(),
                names: users.iter().map(|u| u.name().to_string()).collect(),
            }
        }
        None => {
            info!(searched = users.len(), "target user not found");
            Report::NotFound
        }
    }
}
