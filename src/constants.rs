//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and API defaults so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "usersearch";

/// Version string from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Local config filename (e.g. `.usersearch.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".usersearch.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "usersearch";

/// Host serving the `users` and `albums` resources.
pub const DEFAULT_API_HOST: &str = "jsonplaceholder.typicode.com";

/// Log filter used when neither `-v` nor `USERSEARCH_LOG` is given.
pub const DEFAULT_LOG_FILTER: &str = "warn";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_HOST: &str = "USERSEARCH_HOST";
pub const ENV_SCHEME: &str = "USERSEARCH_SCHEME";
pub const ENV_FORMAT: &str = "USERSEARCH_FORMAT";
pub const ENV_LOG: &str = "USERSEARCH_LOG";
