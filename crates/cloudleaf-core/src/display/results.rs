//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{Book, Transaction, User};

/// Wrapper for displaying something that was just created.
///
/// # Examples
///
/// ```rust
/// use cloudleaf_core::{display::CreateResult, models::Book};
///
/// let result = CreateResult::new(Book::new(9, "Emma", "Jane Austen", "Romance", 1));
/// assert!(result.to_string().starts_with("Added book with ID: 9"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Book> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Added book with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<User> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Signed up and logged in as {}.", self.resource.name)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper for a manual return.
pub struct ReturnResult(pub Transaction);

impl fmt::Display for ReturnResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Returned \"{}\" to {}.",
            self.0.book.title, self.0.lender.name
        )?;
        writeln!(f)?;
        write!(f, "{}", self.0)
    }
}

/// Wrapper for the loans closed by an expiry sweep.
pub struct SweepResult(pub Vec<Transaction>);

impl fmt::Display for SweepResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No loans have expired.");
        }
        writeln!(f, "Auto-returned {} expired loan(s):", self.0.len())?;
        writeln!(f)?;
        for transaction in &self.0 {
            write!(f, "{transaction}")?;
        }
        Ok(())
    }
}

/// Wrapper for a rating left on a transaction.
pub struct RatingResult {
    pub transaction: Transaction,
    pub rated: User,
    pub score: u8,
}

impl fmt::Display for RatingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Rated {} {}/5 for \"{}\".",
            self.rated.name, self.score, self.transaction.book.title
        )?;
        writeln!(f)?;
        write!(f, "{}", self.rated)
    }
}
