//! Loan request receipts and the transaction log entry.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Book, RequestStatus, User};

/// Receipt of a borrow request.
///
/// Requests are approved synchronously, so the receipt handed back by a
/// borrow always has [`RequestStatus::Approved`] and a book snapshot taken
/// after the loan started.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoanRequest {
    pub id: u64,
    pub book: Book,
    pub requester: User,
    pub status: RequestStatus,
}

/// A completed loan, recorded when the book comes back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Unique identifier for the transaction
    pub id: u64,

    /// The book as it was just before the return
    pub book: Book,

    /// Owner of the book
    pub lender: User,

    /// User who had the book
    pub borrower: User,

    /// When the book was returned
    pub return_date: Timestamp,

    /// The lender has received a rating for this loan
    pub lender_rated: bool,

    /// The borrower has received a rating for this loan
    pub borrower_rated: bool,
}

impl Transaction {
    pub fn involves(&self, user_id: u64) -> bool {
        self.lender.id == user_id || self.borrower.id == user_id
    }
}
