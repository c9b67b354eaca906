//! Core library for the CloudLeaf peer-to-peer book lending circle.
//!
//! Members list their own books, browse the books of others, borrow and
//! return them, rate each other after a loan, and keep a shared wishlist
//! that is matched against the marketplace. Everything lives in memory for
//! the lifetime of the process.
//!
//! # Layers
//!
//! - **Models** ([`models`]): users, books, loan receipts and transactions
//! - **Store** ([`store`]): the in-memory collections plus the sample data
//! - **Engines** ([`auth`], [`lending`], [`wishlist`]): credential checks,
//!   the loan state machine and the wishlist matcher
//! - **Facade** ([`library`]): the [`Library`] value every interface drives
//! - **Summaries** ([`summary`]): book summaries from a text-generation
//!   service
//! - **Display** ([`display`]): markdown output shared by the CLI and the
//!   MCP server
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use cloudleaf_core::{
//!     auth::PlaintextHasher,
//!     params::{Credentials, Id},
//!     LibraryBuilder,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut library = LibraryBuilder::new()
//!     .with_hasher(Arc::new(PlaintextHasher))
//!     .build()?;
//!
//! library.login(&Credentials {
//!     name: "Alice".to_string(),
//!     password: "password123".to_string(),
//! })?;
//!
//! println!("{}", library.marketplace()?);
//! let receipt = library.borrow_book(&Id { id: 1 })?;
//! println!("{receipt}");
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod lending;
pub mod library;
pub mod models;
pub mod params;
pub mod store;
pub mod summary;
pub mod wishlist;

// Re-export commonly used types
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::LendingConfig;
pub use display::{
    BookCard, Books, CreateResult, Dashboard, History, Marketplace, OperationStatus,
    RatingResult, ReturnResult, SummaryPanel, SweepResult, WishlistMatches,
};
pub use error::{LendingError, Result, SummaryError};
pub use library::{spawn_expiry_sweep, Library, LibraryBuilder, SharedLibrary};
pub use models::{Book, BookStatus, LoanRequest, RequestStatus, Transaction, User};
pub use params::{AddBook, Credentials, Id, RateTransaction, Wish};
pub use summary::{
    GeminiClient, SummaryAssistant, SummaryConfig, SummaryView, TextGenerator,
};
pub use wishlist::{find_matches, Wishlist};
