//! Account management
//!
//! Authentication and profile storage are host-owned backends behind the
//! [`Authenticator`] and [`ProfileStore`] seams; [`AccountManager`] layers
//! the session flows on top (local validation, login flag, route guarding)
//! without depending on any particular backend's error taxonomy.

mod manager;

pub use manager::AccountManager;

use anyhow::Result;
use thiserror::Error;

use crate::domain::{Profile, UserId};

/// Account operation failure
///
/// Display strings are the user-visible status phrases surfaced in the
/// live status region.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("This email is already in use. Please try a different email.")]
    EmailInUse,

    #[error("Password is too weak. Please choose a stronger password.")]
    WeakPassword,

    #[error("Incorrect current password. Please try again.")]
    WrongPassword,

    #[error("Invalid credential. Please try again.")]
    InvalidCredential,

    #[error("New passwords do not match!")]
    PasswordMismatch,

    #[error("No user is logged in!")]
    NoCurrentUser,

    #[error("{0}")]
    Other(String),
}

/// A host-owned authentication backend
pub trait Authenticator {
    /// Register a new account, returning its backend-assigned id
    fn sign_up(&mut self, email: &str, password: &str) -> Result<UserId, AuthError>;

    /// Authenticate an existing account
    fn sign_in(&mut self, email: &str, password: &str) -> Result<UserId, AuthError>;

    /// Re-verify the current user's password before a sensitive change
    fn reauthenticate(&mut self, current_password: &str) -> Result<(), AuthError>;

    /// Replace the current user's password
    fn update_password(&mut self, new_password: &str) -> Result<(), AuthError>;

    /// Permanently delete the current user's account
    fn delete_account(&mut self) -> Result<(), AuthError>;

    /// The signed-in user, if any
    fn current_user(&self) -> Option<UserId>;
}

/// A host-owned per-user profile document store
pub trait ProfileStore {
    fn get(&self, user_id: &str) -> Result<Profile>;
    fn put(&mut self, user_id: &str, profile: &Profile) -> Result<()>;
}
