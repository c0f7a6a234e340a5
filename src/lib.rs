//! usersearch — fetch user records from a JSON API and locate a target
//! user by linear search (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod client;
pub mod config;
pub mod constants;
pub mod endpoint;
pub mod env;
pub mod models;
pub mod orchestrator;
pub mod output;
pub mod search;
pub mod source;
