//! Book model definition and loan-state helpers.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::BookStatus;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// A physical book listed by its owner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// Unique identifier for the book
    pub id: u64,

    /// Title of the book
    pub title: String,

    /// Author of the book
    pub author: String,

    /// Free-text genre
    pub genre: String,

    /// User who listed the book; never changes
    pub owner_id: u64,

    /// Current loan status
    #[serde(default)]
    pub status: BookStatus,

    /// User holding the book, set iff the book is on loan
    #[serde(default)]
    pub borrower_id: Option<u64>,

    /// When the loan ends, set iff the book is on loan
    #[serde(default)]
    pub loan_end_date: Option<Timestamp>,
}

impl Book {
    /// Creates an available book.
    pub fn new(
        id: u64,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        owner_id: u64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            owner_id,
            status: BookStatus::Available,
            borrower_id: None,
            loan_end_date: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == BookStatus::Available
    }

    pub fn is_on_loan(&self) -> bool {
        self.status == BookStatus::OnLoan
    }

    pub fn is_owned_by(&self, user_id: u64) -> bool {
        self.owner_id == user_id
    }

    pub fn is_borrowed_by(&self, user_id: u64) -> bool {
        self.borrower_id == Some(user_id)
    }

    /// True when the book is on loan and its end date is strictly before
    /// `now`.
    pub fn is_overdue(&self, now: Timestamp) -> bool {
        self.is_on_loan() && self.loan_end_date.is_some_and(|end| end < now)
    }

    /// Whole days until the loan ends, rounded up.
    ///
    /// Returns `None` when the book is not on loan. Overdue loans yield zero
    /// or a negative count.
    pub fn days_left(&self, now: Timestamp) -> Option<i64> {
        let end = self.loan_end_date?;
        let remaining = end.as_millisecond() - now.as_millisecond();
        let days = remaining.div_euclid(MILLIS_PER_DAY);
        if remaining.rem_euclid(MILLIS_PER_DAY) == 0 {
            Some(days)
        } else {
            Some(days + 1)
        }
    }

    /// Puts the book on loan. Callers validate the preconditions.
    pub(crate) fn lend_to(&mut self, borrower_id: u64, loan_end_date: Timestamp) {
        self.status = BookStatus::OnLoan;
        self.borrower_id = Some(borrower_id);
        self.loan_end_date = Some(loan_end_date);
    }

    /// Makes the book available again and clears the loan fields.
    pub(crate) fn mark_returned(&mut self) {
        self.status = BookStatus::Available;
        self.borrower_id = None;
        self.loan_end_date = None;
    }

    /// Checks the loan-state invariants.
    ///
    /// `OnLoan` holds exactly when both `borrower_id` and `loan_end_date`
    /// are set, and the borrower is never the owner.
    pub fn check_invariants(&self) -> Result<(), String> {
        let on_loan = self.is_on_loan();
        if on_loan != self.borrower_id.is_some() || on_loan != self.loan_end_date.is_some() {
            return Err(format!(
                "Book {} has status {} but borrower {:?} and end date {:?}",
                self.id, self.status, self.borrower_id, self.loan_end_date
            ));
        }
        if self.borrower_id == Some(self.owner_id) {
            return Err(format!(
                "Book {} is borrowed by its own owner {}",
                self.id, self.owner_id
            ));
        }
        Ok(())
    }
}
