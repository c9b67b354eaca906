//! Auth gate: credential checks and registration against the entity store.
//!
//! Names are matched ignoring case; passwords are checked through the
//! configured [`PasswordHasher`]. There is no lockout and no rate limit: a
//! failed attempt simply returns [`LendingError::InvalidCredentials`].

use log::{debug, info};

use crate::{
    error::{LendingError, Result},
    models::{user::avatar_url, User},
    params::Credentials,
    store::EntityStore,
};

pub mod password;

pub use password::{Argon2Hasher, PasswordHasher, PlaintextHasher};

/// Returns the id of the user matching `credentials`.
pub fn authenticate(
    store: &EntityStore,
    hasher: &dyn PasswordHasher,
    credentials: &Credentials,
) -> Result<u64> {
    credentials.validate()?;

    let user = store
        .find_user_by_name(&credentials.name)
        .ok_or(LendingError::InvalidCredentials)?;

    if !hasher.verify(&credentials.password, &user.credential)? {
        debug!("Password mismatch for user {}", user.id);
        return Err(LendingError::InvalidCredentials);
    }

    Ok(user.id)
}

/// Registers a new user and returns its id.
///
/// Fails with [`LendingError::UserExists`] when the name is taken ignoring
/// case.
pub fn register(
    store: &mut EntityStore,
    hasher: &dyn PasswordHasher,
    credentials: &Credentials,
    trust_score: f64,
    avatar_base_url: &str,
) -> Result<u64> {
    credentials.validate()?;

    if store.find_user_by_name(&credentials.name).is_some() {
        return Err(LendingError::UserExists {
            name: credentials.name.clone(),
        });
    }

    let user = User {
        id: store.next_user_id(),
        name: credentials.name.clone(),
        credential: hasher.hash(&credentials.password)?,
        avatar: avatar_url(avatar_base_url, &credentials.name),
        trust_score,
        ratings: Vec::new(),
    };
    let id = user.id;
    info!("Registered user {} ({})", user.name, id);
    store.insert_user(user);

    Ok(id)
}
