//! Session account flows

use super::{AuthError, Authenticator, ProfileStore};
use crate::domain::{Profile, Route, UserId};
use crate::store::{self, LOGGED_IN_KEY, SharedStore};

/// Minimum password length accepted before the backend is consulted
const MIN_PASSWORD_LEN: usize = 6;

/// Account flows over an authenticator, a profile store, and the session KV store
pub struct AccountManager {
    auth: Box<dyn Authenticator>,
    profiles: Box<dyn ProfileStore>,
    store: SharedStore,
}

impl AccountManager {
    pub fn new(
        auth: Box<dyn Authenticator>,
        profiles: Box<dyn ProfileStore>,
        store: SharedStore,
    ) -> Self {
        Self {
            auth,
            profiles,
            store,
        }
    }

    /// Register a new account and store its profile
    ///
    /// Local password validation runs before the backend sees the request;
    /// on success the login flag is set and the session is live.
    pub fn sign_up(
        &mut self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<UserId, AuthError> {
        if password.len() < MIN_PASSWORD_LEN {
            return Err(AuthError::WeakPassword);
        }

        let user_id = self.auth.sign_up(email, password)?;

        let profile = Profile::new(username, email);
        self.profiles
            .put(&user_id, &profile)
            .map_err(|e| AuthError::Other(format!("Failed to register: {e}")))?;

        store::write_key(&self.store, LOGGED_IN_KEY, "true");
        tracing::info!(%user_id, "account created");
        Ok(user_id)
    }

    /// Authenticate and mark the session logged in
    pub fn sign_in(&mut self, email: &str, password: &str) -> Result<UserId, AuthError> {
        let user_id = self.auth.sign_in(email, password)?;
        store::write_key(&self.store, LOGGED_IN_KEY, "true");
        tracing::info!(%user_id, "signed in");
        Ok(user_id)
    }

    /// Change the current user's password
    ///
    /// Fails fast on a confirmation mismatch, then reauthenticates with the
    /// current password before updating.
    pub fn change_password(
        &mut self,
        current: &str,
        new: &str,
        confirm: &str,
    ) -> Result<(), AuthError> {
        if self.auth.current_user().is_none() {
            return Err(AuthError::NoCurrentUser);
        }
        if new != confirm {
            return Err(AuthError::PasswordMismatch);
        }

        self.auth.reauthenticate(current)?;
        self.auth.update_password(new)?;
        tracing::info!("password updated");
        Ok(())
    }

    /// Delete the current user's account and end the session
    pub fn delete_account(&mut self) -> Result<(), AuthError> {
        if self.auth.current_user().is_none() {
            return Err(AuthError::NoCurrentUser);
        }

        self.auth.delete_account()?;
        store::remove_key(&self.store, LOGGED_IN_KEY);
        tracing::info!("account deleted");
        Ok(())
    }

    /// Clear the login flag; storage failures are never fatal here
    pub fn log_out(&mut self) {
        store::remove_key(&self.store, LOGGED_IN_KEY);
        tracing::info!("logged out");
    }

    /// Whether the persisted login flag is present
    pub fn is_logged_in(&self) -> bool {
        store::read_key(&self.store, LOGGED_IN_KEY).is_some()
    }

    /// Profile of the signed-in user
    pub fn profile(&self) -> Result<Profile, AuthError> {
        let user_id = self.auth.current_user().ok_or(AuthError::NoCurrentUser)?;
        self.profiles
            .get(&user_id)
            .map_err(|e| AuthError::Other(e.to_string()))
    }

    /// Update the signed-in user's profile fields
    pub fn update_profile(&mut self, username: &str, email: &str) -> Result<(), AuthError> {
        let user_id = self.auth.current_user().ok_or(AuthError::NoCurrentUser)?;
        let profile = Profile::new(username, email);
        self.profiles
            .put(&user_id, &profile)
            .map_err(|e| AuthError::Other(e.to_string()))
    }

    /// Route guard: anonymous sessions only reach the public routes
    pub fn resolve_route(&self, requested: Route) -> Route {
        if self.is_logged_in() || requested.is_public() {
            requested
        } else {
            Route::Signup
        }
    }
}
