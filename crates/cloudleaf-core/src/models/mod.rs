//! Data models for users, books, loans and transactions.
//!
//! This module contains the core domain models of the CloudLeaf lending
//! system. Display implementations for these models are located in
//! [`crate::display::models`] to keep data structures and presentation
//! separate.
//!
//! # Loan State
//!
//! A [`Book`] carries its loan state in three fields that always move
//! together: `status`, `borrower_id` and `loan_end_date`. The only way to
//! change them is through [`Book::lend_to`] and [`Book::mark_returned`],
//! which keep the three in step:
//!
//! ```text
//!   Available ──lend_to──▶ OnLoan ──mark_returned──▶ Available
//! ```
//!
//! [`BookStatus::Requested`] is part of the status vocabulary but no
//! transition assigns it.
//!
//! # Examples
//!
//! ```rust
//! use cloudleaf_core::models::{Book, BookStatus};
//! use jiff::Timestamp;
//!
//! let book = Book::new(1, "Moby Dick", "Herman Melville", "Adventure", 2);
//! assert_eq!(book.status, BookStatus::Available);
//! assert!(book.is_available());
//! assert!(book.check_invariants().is_ok());
//! assert_eq!(book.days_left(Timestamp::UNIX_EPOCH), None);
//! ```

pub mod book;
pub mod loan;
pub mod status;
pub mod user;

#[cfg(test)]
mod tests;

pub use book::Book;
pub use loan::{LoanRequest, Transaction};
pub use status::{BookStatus, RequestStatus};
pub use user::User;
