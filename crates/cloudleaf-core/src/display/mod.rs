//! Markdown presentation of the lending circle.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! everything that needs context beyond a single model, such as who is
//! looking or what time it is, is a wrapper type in this module. The CLI
//! renders the markdown for the terminal and the MCP server returns it
//! verbatim, so both interfaces show the same text.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrapper Types   │    │    Markdown     │
//! │ (Book, User...) │───▶│ (BookCard,      │───▶│ (Terminal/MCP)  │
//! │                 │    │  Dashboard...)  │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`card`]: a single book as seen by one viewer, and its summary area
//! - [`collections`]: book lists, marketplace, dashboard, history
//! - [`results`]: outcomes of create, return, sweep and rating operations
//! - [`status`]: one-line success or failure messages
//! - [`datetime`]: timestamp formatting

pub mod card;
pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use card::{BookCard, SummaryPanel};
pub use collections::{Books, Dashboard, History, Marketplace, WishlistMatches};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, RatingResult, ReturnResult, SweepResult};
pub use status::OperationStatus;
