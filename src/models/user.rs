//! The user record served by the `users` resource.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single user as returned by the API.
///
/// Equality is structural: two users are equal only when every field
/// matches. Unknown JSON fields are ignored on decode; all four fields
/// are required.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    id: i64,
    name: String,
    username: String,
    email: String,
}

impl User {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            username: username.into(),
            email: email.into(),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User(id: {}, name: {:?}, username: {:?}, email: {:?})",
            self.id, self.name, self.username, self.email
        )
    }
}
