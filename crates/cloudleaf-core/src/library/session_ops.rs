//! Session handling for the Library.

use log::info;

use super::Library;
use crate::{
    auth,
    error::{LendingError, Result},
    models::User,
    params::Credentials,
};

impl Library {
    /// Logs in the member matching `credentials` (name ignoring case).
    ///
    /// Replaces any existing session.
    pub fn login(&mut self, credentials: &Credentials) -> Result<User> {
        let id = auth::authenticate(&self.store, self.hasher.as_ref(), credentials)?;
        self.current_user = Some(id);
        let user = self.store.user(id)?;
        info!("{} logged in", user.name);
        Ok(user.clone())
    }

    /// Registers a new member and logs them in.
    pub fn sign_up(&mut self, credentials: &Credentials) -> Result<User> {
        let id = auth::register(
            &mut self.store,
            self.hasher.as_ref(),
            credentials,
            self.config.default_trust_score,
            &self.config.avatar_base_url,
        )?;
        self.current_user = Some(id);
        Ok(self.store.user(id)?.clone())
    }

    /// Ends the session and returns who was logged in.
    ///
    /// Books, loans and the wishlist are untouched.
    pub fn logout(&mut self) -> Option<User> {
        let user = self
            .current_user
            .take()
            .and_then(|id| self.store.user(id).ok().cloned());
        if let Some(user) = &user {
            info!("{} logged out", user.name);
        }
        user
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.and_then(|id| self.store.user(id).ok())
    }

    /// The logged-in member, or [`LendingError::NotLoggedIn`].
    pub fn require_user(&self) -> Result<&User> {
        let id = self.current_user.ok_or(LendingError::NotLoggedIn)?;
        self.store.user(id)
    }

    pub(crate) fn require_user_id(&self) -> Result<u64> {
        self.require_user().map(|u| u.id)
    }
}
