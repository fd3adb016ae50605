use serde::{Deserialize, Serialize};

/// Opaque identifier assigned by the authentication backend
pub type UserId = String;

/// Profile fields stored per user
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Profile {
    /// Display name chosen at sign-up
    pub username: String,
    /// Email address used for authentication
    pub email: String,
}

impl Profile {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }
}
