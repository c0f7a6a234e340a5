//! Records decoded from the API.
//!
//! Other modules import from here rather than reaching into each
//! other's internals.

pub mod album;
pub mod user;

pub use album::Album;
pub use user::User;

/// The user the default run searches for.
pub fn default_target() -> User {
    User::new(7, "Kurtis Weissnat", "Elwyn.Skiles", "Telly.Hoeger@billy.biz")
}
