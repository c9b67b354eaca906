//! Book card, the detailed view of one book as seen by one viewer.

use std::fmt;

use jiff::Timestamp;

use crate::{models::Book, summary::SummaryView};

/// A book together with what the viewer needs to act on it.
///
/// The loan countdown is shown to the owner of an on-loan book and to its
/// borrower, rounded up to whole days.
///
/// # Examples
///
/// ```rust
/// use cloudleaf_core::{display::BookCard, models::Book};
/// use jiff::Timestamp;
///
/// let book = Book::new(1, "Moby Dick", "Herman Melville", "Adventure", 2);
/// let card = BookCard::new(book, "Bob", Some(1), Timestamp::UNIX_EPOCH);
/// let output = card.to_string();
/// assert!(output.contains("### Moby Dick"));
/// assert!(output.contains("borrow 1"));
/// ```
#[derive(Debug, Clone)]
pub struct BookCard {
    pub book: Book,
    pub owner_name: String,
    pub viewer_id: Option<u64>,
    pub now: Timestamp,
}

impl BookCard {
    pub fn new(
        book: Book,
        owner_name: impl Into<String>,
        viewer_id: Option<u64>,
        now: Timestamp,
    ) -> Self {
        Self {
            book,
            owner_name: owner_name.into(),
            viewer_id,
            now,
        }
    }

    fn viewer_is_owner(&self) -> bool {
        self.viewer_id.is_some_and(|id| self.book.is_owned_by(id))
    }

    fn viewer_is_borrower(&self) -> bool {
        self.viewer_id.is_some_and(|id| self.book.is_borrowed_by(id))
    }
}

impl fmt::Display for BookCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let book = &self.book;
        writeln!(f, "### {}", book.title)?;
        writeln!(f)?;
        writeln!(f, "*by {}*", book.author)?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", book.id)?;
        writeln!(f, "- Genre: {}", book.genre)?;
        writeln!(f, "- Owner: {}", self.owner_name)?;
        writeln!(f, "- Status: {}", book.status.with_icon())?;

        let days_left = book.days_left(self.now);
        if self.viewer_is_owner() && book.is_on_loan() {
            if let Some(days) = days_left {
                writeln!(f, "- ⏱ On loan, returns in {days} day(s)")?;
            }
        }
        if self.viewer_is_borrower() {
            if let Some(days) = days_left {
                writeln!(f, "- ⏱ Returns in {days} day(s)")?;
            }
        }
        writeln!(f)?;

        if self.viewer_is_borrower() {
            writeln!(f, "`return {}` to give it back now", book.id)?;
        } else if self.viewer_is_owner() {
            if !book.is_on_loan() {
                writeln!(f, "*Your Book*")?;
            }
        } else if self.viewer_id.is_some() && book.is_available() {
            writeln!(f, "`borrow {}` to borrow it", book.id)?;
        }
        Ok(())
    }
}

/// The summary area of a book card.
pub struct SummaryPanel<'a> {
    pub book: &'a Book,
    pub view: &'a SummaryView,
}

impl fmt::Display for SummaryPanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### Summary of {}", self.book.title)?;
        writeln!(f)?;
        match self.view {
            SummaryView::Hidden => writeln!(f, "*Summary hidden.*"),
            SummaryView::Loading => writeln!(f, "*Generating summary...*"),
            SummaryView::Ready(text) => writeln!(f, "{text}"),
            SummaryView::Failed(message) => writeln!(f, "{message}"),
            SummaryView::Discarded => writeln!(f, "*Summary no longer needed.*"),
        }
    }
}
