//! Descriptors for the remote resources the tool can fetch.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_API_HOST;

/// URL scheme of an endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    #[default]
    Https,
    /// Plain HTTP, for local servers.
    Http,
}

impl Scheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Https => "https",
            Scheme::Http => "http",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Scheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "https" => Ok(Scheme::Https),
            "http" => Ok(Scheme::Http),
            other => Err(format!("unsupported scheme: '{other}'. Supported: https, http")),
        }
    }
}

/// HTTP verb used to request an endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
        }
    }

    pub(crate) fn to_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where and how to request one remote resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointDescriptor {
    pub scheme: Scheme,
    /// Host name, optionally with a `:port` suffix.
    pub host: String,
    /// Absolute path beginning with `/`, or empty.
    pub path: String,
    pub method: HttpMethod,
}

impl EndpointDescriptor {
    /// The same resource served from a different location.
    pub fn with_location(mut self, scheme: Scheme, host: impl Into<String>) -> Self {
        self.scheme = scheme;
        self.host = host.into();
        self
    }
}

impl fmt::Display for EndpointDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}://{}{}", self.method, self.scheme, self.host, self.path)
    }
}

/// The fixed resources exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Users,
    Albums,
}

impl Resource {
    pub fn path(self) -> &'static str {
        match self {
            Resource::Users => "/users",
            Resource::Albums => "/albums",
        }
    }

    /// Descriptor pointing at the public API host.
    pub fn descriptor(self) -> EndpointDescriptor {
        EndpointDescriptor {
            scheme: Scheme::Https,
            host: DEFAULT_API_HOST.to_string(),
            path: self.path().to_string(),
            method: HttpMethod::Get,
        }
    }
}
