//! Clap argument types and config overrides.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use usersearch::config::Config;
use usersearch::endpoint::Scheme;
use usersearch::output::OutputFormat;

/// Fetch users from a JSON API and look for a target user.
///
/// With no flags, searches https://jsonplaceholder.typicode.com/users for
/// Kurtis Weissnat (id 7).
#[derive(Parser, Debug)]
#[command(name = usersearch::constants::APP_NAME, version = usersearch::constants::VERSION)]
pub struct Cli {
    /// Config file to use instead of ./.usersearch.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- API location ---
    /// API host, optionally with a port (e.g. localhost:3000).
    #[arg(long)]
    pub host: Option<String>,

    /// URL scheme: https or http.
    #[arg(long)]
    pub scheme: Option<Scheme>,

    // --- Target ---
    /// Target user id.
    #[arg(long)]
    pub id: Option<i64>,

    /// Target user display name.
    #[arg(long)]
    pub name: Option<String>,

    /// Target user login name.
    #[arg(long)]
    pub username: Option<String>,

    /// Target user email address.
    #[arg(long)]
    pub email: Option<String>,

    // --- Output ---
    /// Output format.
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Increase log verbosity on stderr (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Apply flags on top of the loaded config. Flags always win.
    pub fn apply(&self, config: &mut Config) {
        if let Some(ref host) = self.host {
            config.api.host = host.clone();
        }
        if let Some(scheme) = self.scheme {
            config.api.scheme = scheme;
        }
        if let Some(id) = self.id {
            config.target.id = id;
        }
        if let Some(ref name) = self.name {
            config.target.name = name.clone();
        }
        if let Some(ref username) = self.username {
            config.target.username = username.clone();
        }
        if let Some(ref email) = self.email {
            config.target.email = email.clone();
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
    }
}
