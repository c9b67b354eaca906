//! Credential hashing behind a pluggable interface.
//!
//! [`Argon2Hasher`] is the default: Argon2id with a random salt from
//! [`OsRng`], stored in PHC string format so the parameters travel with the
//! hash. [`PlaintextHasher`] keeps the password as-is and exists for
//! throwaway sessions and tests where hashing cost is unwanted.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{
    PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString,
};
use argon2::Argon2;

use crate::error::{LendingError, Result};

/// Turns passwords into stored credentials and checks them later.
pub trait PasswordHasher: Send + Sync {
    /// Produces the credential to store for `password`.
    fn hash(&self, password: &str) -> Result<String>;

    /// Returns `Ok(true)` if `password` matches the stored credential.
    fn verify(&self, password: &str, credential: &str) -> Result<bool>;
}

/// Argon2id hashing with default parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Hasher;

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(credential_error)?;
        Ok(hash.to_string())
    }

    fn verify(&self, password: &str, credential: &str) -> Result<bool> {
        let parsed = PasswordHash::new(credential).map_err(credential_error)?;
        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(credential_error(e)),
        }
    }
}

/// Stores passwords verbatim and compares them exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaintextHasher;

impl PasswordHasher for PlaintextHasher {
    fn hash(&self, password: &str) -> Result<String> {
        Ok(password.to_string())
    }

    fn verify(&self, password: &str, credential: &str) -> Result<bool> {
        Ok(password == credential)
    }
}

fn credential_error(error: argon2::password_hash::Error) -> LendingError {
    LendingError::Credential {
        message: error.to_string(),
    }
}
