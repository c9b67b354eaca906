//! Error types for the lending library.

use thiserror::Error;

use crate::models::BookStatus;

/// Comprehensive error type for all lending operations.
#[derive(Error, Debug)]
pub enum LendingError {
    /// Name/password pair did not match any user
    #[error("Login failed. Invalid name or password.")]
    InvalidCredentials,
    /// Sign-up attempted with a name already taken (case-insensitive)
    #[error("Sign up failed. User already exists.")]
    UserExists { name: String },
    /// Operation requires a logged-in user
    #[error("No user is logged in")]
    NotLoggedIn,
    /// User not found for the given ID
    #[error("User with ID {id} not found")]
    UserNotFound { id: u64 },
    /// Book not found for the given ID
    #[error("Book with ID {id} not found")]
    BookNotFound { id: u64 },
    /// Transaction not found for the given ID
    #[error("Transaction with ID {id} not found")]
    TransactionNotFound { id: u64 },
    /// Owners cannot borrow their own books
    #[error("Book {book_id} belongs to you and cannot be borrowed")]
    OwnBook { book_id: u64 },
    /// Borrow attempted on a book that is not available
    #[error("Book {book_id} is not available (status: {status})")]
    NotAvailable { book_id: u64, status: BookStatus },
    /// Return attempted by someone other than the current borrower
    #[error("Book {book_id} is not borrowed by you")]
    NotBorrower { book_id: u64 },
    /// Rating attempted by someone outside the transaction
    #[error("You did not take part in transaction {transaction_id}")]
    NotParticipant { transaction_id: u64 },
    /// The counterparty of a transaction was already rated
    #[error("Transaction {transaction_id} has already been rated by you")]
    AlreadyRated { transaction_id: u64 },
    /// Invalid input validation errors
    #[error("{reason}")]
    InvalidInput { field: String, reason: String },
    /// Password hashing or verification failed
    #[error("Credential error: {message}")]
    Credential { message: String },
    /// Date arithmetic overflowed
    #[error("Date calculation error: {source}")]
    Time {
        #[from]
        source: jiff::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> LendingError {
        LendingError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl LendingError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Whether the error was caused by the caller rather than by the system.
    ///
    /// Interfaces print these inline and keep going.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, Self::Credential { .. } | Self::Time { .. })
    }
}

/// Errors raised at the text-generation boundary.
#[derive(Error, Debug)]
pub enum SummaryError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The service answered with a non-2xx status code
    #[error("Text generation service returned HTTP {0}")]
    HttpStatus(u16),
    /// The service answered without any text
    #[error("Text generation service returned no text")]
    EmptyResponse,
    /// The generator is missing required configuration
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Result type alias for lending operations
pub type Result<T> = std::result::Result<T, LendingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_messages_match_form_text() {
        assert_eq!(
            LendingError::InvalidCredentials.to_string(),
            "Login failed. Invalid name or password."
        );
        let exists = LendingError::UserExists {
            name: "alice".to_string(),
        };
        assert_eq!(exists.to_string(), "Sign up failed. User already exists.");
    }

    #[test]
    fn test_invalid_input_builder() {
        let err = LendingError::invalid_input("title").with_reason("Title cannot be empty.");
        match &err {
            LendingError::InvalidInput { field, reason } => {
                assert_eq!(field, "title");
                assert_eq!(reason, "Title cannot be empty.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.to_string(), "Title cannot be empty.");
        assert!(err.is_user_error());
    }

    #[test]
    fn test_not_available_mentions_status() {
        let err = LendingError::NotAvailable {
            book_id: 8,
            status: BookStatus::OnLoan,
        };
        assert_eq!(err.to_string(), "Book 8 is not available (status: On Loan)");
    }

    #[test]
    fn test_credential_errors_are_not_user_errors() {
        let err = LendingError::Credential {
            message: "bad hash".to_string(),
        };
        assert!(!err.is_user_error());
    }
}
