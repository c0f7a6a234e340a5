//! The album record served by the `albums` resource.

use serde::{Deserialize, Serialize};

/// A photo album owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Album {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub id: i64,
    pub title: String,
}
