//! Builder for creating and configuring Library instances.

use std::sync::Arc;

use log::info;

use super::Library;
use crate::{
    auth::{Argon2Hasher, PasswordHasher},
    clock::{Clock, SystemClock},
    config::LendingConfig,
    error::Result,
    store::{seed::seed, EntityStore},
};

/// Builder for creating and configuring Library instances.
///
/// Defaults: [`LendingConfig::default`], the system clock, Argon2id
/// password hashing and the sample members and books.
pub struct LibraryBuilder {
    config: LendingConfig,
    clock: Arc<dyn Clock>,
    hasher: Arc<dyn PasswordHasher>,
    seed_data: bool,
}

impl LibraryBuilder {
    pub fn new() -> Self {
        Self {
            config: LendingConfig::default(),
            clock: Arc::new(SystemClock),
            hasher: Arc::new(Argon2Hasher),
            seed_data: true,
        }
    }

    pub fn with_config(mut self, config: LendingConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the time source, e.g. with a
    /// [`ManualClock`](crate::clock::ManualClock) in tests.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_hasher(mut self, hasher: Arc<dyn PasswordHasher>) -> Self {
        self.hasher = hasher;
        self
    }

    /// Starts with an empty store instead of the sample data.
    pub fn without_seed_data(mut self) -> Self {
        self.seed_data = false;
        self
    }

    /// Builds the library, seeding the store relative to the clock's now.
    ///
    /// # Errors
    ///
    /// Returns `LendingError::Credential` if hashing a seed password fails
    pub fn build(self) -> Result<Library> {
        let mut store = EntityStore::new();
        if self.seed_data {
            seed(
                &mut store,
                self.hasher.as_ref(),
                &self.config.avatar_base_url,
                self.clock.now(),
            )?;
            info!(
                "Seeded {} members and {} books",
                store.users().len(),
                store.books().len()
            );
        }
        Ok(Library::new(store, self.config, self.clock, self.hasher))
    }
}

impl Default for LibraryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
