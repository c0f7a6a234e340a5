//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags (applied by the caller)
//! 2. Environment variables
//! 3. `--config <PATH>`, or `.usersearch.toml` in the working directory
//! 4. `~/.config/usersearch/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::constants::{self, DEFAULT_API_HOST};
use crate::endpoint::{EndpointDescriptor, Resource, Scheme};
use crate::env::Env;
use crate::models::User;
use crate::output::OutputFormat;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub target: TargetConfig,
    pub output: OutputConfig,
}

/// Location of the API serving the `users` resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub scheme: Scheme,
    pub host: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            scheme: Scheme::Https,
            host: DEFAULT_API_HOST.to_string(),
        }
    }
}

/// The user to search for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        let user = crate::models::default_target();
        Self {
            id: user.id(),
            name: user.name().to_string(),
            username: user.username().to_string(),
            email: user.email().to_string(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// One config file as written on disk. Only keys present in the file are
/// `Some`, so applying a layer never touches values it does not mention.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigLayer {
    api: ApiLayer,
    target: TargetLayer,
    output: OutputLayer,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiLayer {
    scheme: Option<Scheme>,
    host: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TargetLayer {
    id: Option<i64>,
    name: Option<String>,
    username: Option<String>,
    email: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OutputLayer {
    format: Option<OutputFormat>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// `explicit` replaces the working-directory lookup when given, and
    /// unlike the implicit files it must exist.
    pub fn load(explicit: Option<&Path>, cwd: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        Self::load_layers(Self::global_config_path().as_deref(), explicit, cwd, env)
    }

    /// [`Config::load`] with the global file location supplied by the caller.
    fn load_layers(
        global: Option<&Path>,
        explicit: Option<&Path>,
        cwd: Option<&Path>,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = global.filter(|p| p.exists()) {
            config.apply_layer(Self::load_file(global_path)?);
        }

        // Layer 3: explicit or working-directory config
        let local_path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => cwd
                .map(|dir| dir.join(constants::CONFIG_FILENAME))
                .filter(|p| p.exists()),
        };
        if let Some(path) = local_path {
            config.apply_layer(Self::load_file(&path)?);
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Read one config file as a layer.
    fn load_file(path: &Path) -> Result<ConfigLayer, ConfigError> {
        debug!(path = %path.display(), "loading config file");
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join("config.toml"))
    }

    /// Overwrite every value the layer sets, including values equal to
    /// the built-in defaults.
    fn apply_layer(&mut self, layer: ConfigLayer) {
        let ConfigLayer { api, target, output } = layer;

        if let Some(scheme) = api.scheme {
            self.api.scheme = scheme;
        }
        if let Some(host) = api.host {
            self.api.host = host;
        }

        if let Some(id) = target.id {
            self.target.id = id;
        }
        if let Some(name) = target.name {
            self.target.name = name;
        }
        if let Some(username) = target.username {
            self.target.username = username;
        }
        if let Some(email) = target.email {
            self.target.email = email;
        }

        if let Some(format) = output.format {
            self.output.format = format;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Some(host) = env.get(constants::ENV_HOST) {
            self.api.host = host;
        }
        if let Some(scheme) = env.parse::<Scheme>(constants::ENV_SCHEME) {
            self.api.scheme = scheme;
        }
        if let Some(format) = env.parse::<OutputFormat>(constants::ENV_FORMAT) {
            self.output.format = format;
        }
    }

    /// Endpoint for the `users` resource at the configured location.
    pub fn users_endpoint(&self) -> EndpointDescriptor {
        Resource::Users
            .descriptor()
            .with_location(self.api.scheme, self.api.host.clone())
    }

    /// The configured target as a user record.
    pub fn target_user(&self) -> User {
        User::new(
            self.target.id,
            self.target.name.clone(),
            self.target.username.clone(),
            self.target.email.clone(),
        )
    }
}
