//! High-level library API tying the store, session and engines together.
//!
//! [`Library`] is the single owned value behind every interface. It holds
//! the entity store, the process-global wishlist, the current session and
//! the injected [`Clock`] and [`PasswordHasher`]. All operations take
//! `&self` or `&mut self` and complete synchronously; interfaces that serve
//! several callers share it as a [`SharedLibrary`] and hold the lock for one
//! whole operation, so turns never interleave.
//!
//! ## Submodules
//!
//! - [`builder`]: [`LibraryBuilder`] for configuration and seeding
//! - `session_ops`: login, sign-up, logout
//! - `book_ops`: add, borrow, return, expire
//! - `views`: dashboard, marketplace, book cards, history
//! - `wishlist_ops` / `rating_ops`: wishlist editing and ratings
//! - [`sweep`]: the periodic expiry task
//!
//! # Examples
//!
//! ```rust
//! use cloudleaf_core::{
//!     auth::PlaintextHasher,
//!     params::{Credentials, Id},
//!     LibraryBuilder,
//! };
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut library = LibraryBuilder::new()
//!     .with_hasher(Arc::new(PlaintextHasher))
//!     .build()?;
//!
//! library.login(&Credentials {
//!     name: "alice".to_string(),
//!     password: "password123".to_string(),
//! })?;
//!
//! // Moby Dick belongs to Bob
//! let receipt = library.borrow_book(&Id { id: 1 })?;
//! println!("{receipt}");
//!
//! let transaction = library.return_book(&Id { id: 1 })?;
//! assert_eq!(transaction.lender.name, "Bob");
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use jiff::Timestamp;

use crate::{
    auth::PasswordHasher, clock::Clock, config::LendingConfig, store::EntityStore,
    wishlist::Wishlist,
};

pub mod builder;
mod book_ops;
mod rating_ops;
mod session_ops;
pub mod sweep;
mod views;
mod wishlist_ops;

#[cfg(test)]
mod tests;

pub use builder::LibraryBuilder;
pub use sweep::spawn_expiry_sweep;

/// A library shared between interface tasks and the expiry sweep.
pub type SharedLibrary = Arc<tokio::sync::Mutex<Library>>;

/// The lending circle: members, books, loans, wishlist and session.
pub struct Library {
    pub(crate) store: EntityStore,
    pub(crate) wishlist: Wishlist,
    pub(crate) current_user: Option<u64>,
    pub(crate) config: LendingConfig,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) hasher: Arc<dyn PasswordHasher>,
}

impl Library {
    pub(crate) fn new(
        store: EntityStore,
        config: LendingConfig,
        clock: Arc<dyn Clock>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            store,
            wishlist: Wishlist::new(config.initial_wishlist.iter().cloned()),
            current_user: None,
            config,
            clock,
            hasher,
        }
    }

    /// Wraps the library for sharing between tasks.
    pub fn into_shared(self) -> SharedLibrary {
        Arc::new(tokio::sync::Mutex::new(self))
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn config(&self) -> &LendingConfig {
        &self.config
    }

    /// Current time according to the injected clock.
    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }
}
