//! Display implementations for domain models.
//!
//! The models carry no presentation logic of their own; everything that
//! turns a [`Book`], [`User`] or [`Transaction`] into markdown lives here.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Book, BookStatus, LoanRequest, RequestStatus, Transaction, User};

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- **{}** by {} (ID: {}, {}, {})",
            self.title,
            self.author,
            self.id,
            self.genre,
            self.status.with_icon()
        )
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "**{}** (ID: {})", self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "- ★ {} Trust Score", self.trust_score)?;
        match self.average_rating() {
            Some(avg) => writeln!(
                f,
                "- Rated {avg:.1} on average over {} rating(s)",
                self.ratings.len()
            ),
            None => writeln!(f, "- No ratings yet"),
        }
    }
}

impl fmt::Display for LoanRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            RequestStatus::Approved => writeln!(
                f,
                "Your request for \"{}\" has been sent and auto-approved!",
                self.book.title
            )?,
            _ => writeln!(
                f,
                "Your request for \"{}\" is {}.",
                self.book.title,
                self.status.as_str().to_lowercase()
            )?,
        }
        if let Some(end) = &self.book.loan_end_date {
            writeln!(f)?;
            writeln!(f, "- Due back: {}", LocalDateTime(end))?;
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- #{} **{}** lent by {} to {}, returned {}",
            self.id,
            self.book.title,
            self.lender.name,
            self.borrower.name,
            LocalDateTime(&self.return_date)
        )?;
        writeln!(
            f,
            "  - Lender rated: {}, borrower rated: {}",
            yes_no(self.lender_rated),
            yes_no(self.borrower_rated)
        )
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_status_display() {
        assert_eq!(BookStatus::Available.to_string(), "Available");
        assert_eq!(BookStatus::OnLoan.to_string(), "On Loan");
        assert_eq!(BookStatus::Requested.to_string(), "Requested");
    }

    #[test]
    fn test_book_line() {
        let book = Book::new(1, "Moby Dick", "Herman Melville", "Adventure", 2);
        assert_eq!(
            book.to_string(),
            "- **Moby Dick** by Herman Melville (ID: 1, Adventure, ○ Available)\n"
        );
    }

    #[test]
    fn test_approved_receipt_message() {
        let requester = User {
            id: 1,
            name: "Alice".to_string(),
            credential: String::new(),
            avatar: String::new(),
            trust_score: 4.8,
            ratings: vec![],
        };
        let receipt = LoanRequest {
            id: 1,
            book: Book::new(1, "Moby Dick", "Herman Melville", "Adventure", 2),
            requester,
            status: RequestStatus::Approved,
        };
        assert!(receipt
            .to_string()
            .starts_with("Your request for \"Moby Dick\" has been sent and auto-approved!"));
    }

    #[test]
    fn test_user_without_ratings() {
        let user = User {
            id: 5,
            name: "Eve".to_string(),
            credential: String::new(),
            avatar: String::new(),
            trust_score: 4.0,
            ratings: vec![],
        };
        let output = user.to_string();
        assert!(output.contains("**Eve** (ID: 5)"));
        assert!(output.contains("★ 4 Trust Score"));
        assert!(output.contains("No ratings yet"));
    }
}
