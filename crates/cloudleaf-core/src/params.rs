//! Parameter structures for CloudLeaf operations
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces (CLI shell, MCP server) without framework-specific
//! derives. Interface layers add their own wrappers (clap `Args`) and convert
//! into these types; the MCP server deserializes them directly when the
//! `schema` feature is enabled.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Shell Args    │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Validation that mirrors the forms of the original interface (empty names,
//! empty passwords, incomplete book details) lives on the parameter types as
//! `validate` methods, so every interface rejects the same inputs with the
//! same messages.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{LendingError, Result};

/// Generic parameters for operations requiring just an ID.
///
/// Used for operations like show_book, borrow_book, return_book and
/// book_summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Name and password, used for both login and sign-up.
#[derive(Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Credentials {
    /// Display name (matched ignoring case)
    pub name: String,
    /// Password
    pub password: String,
}

impl Credentials {
    /// Rejects blank names and empty passwords.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(LendingError::invalid_input("name").with_reason("Name cannot be empty."));
        }
        if self.password.is_empty() {
            return Err(
                LendingError::invalid_input("password").with_reason("Password cannot be empty.")
            );
        }
        Ok(())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Parameters for listing a new book.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddBook {
    /// Title of the book (required)
    pub title: String,
    /// Author of the book (required)
    pub author: String,
    /// Genre, free text (required)
    pub genre: String,
}

impl AddBook {
    /// Requires every field to contain something other than whitespace.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("title", &self.title),
            ("author", &self.author),
            ("genre", &self.genre),
        ] {
            if value.trim().is_empty() {
                return Err(LendingError::invalid_input(field)
                    .with_reason(format!("Book {field} cannot be empty.")));
            }
        }
        Ok(())
    }
}

/// A wishlist entry to add or remove.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Wish {
    /// Title, or part of a title, to look out for
    pub text: String,
}

impl Wish {
    pub fn validate(&self) -> Result<()> {
        if self.text.trim().is_empty() {
            return Err(
                LendingError::invalid_input("text").with_reason("Wishlist entry cannot be empty.")
            );
        }
        Ok(())
    }
}

/// Parameters for rating the other party of a finished loan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RateTransaction {
    /// ID of the transaction to rate
    pub transaction_id: u64,
    /// Score from 1 to 5
    pub score: u8,
}
