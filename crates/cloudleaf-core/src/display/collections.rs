//! Collection wrapper types for displaying groups of domain objects.
//!
//! Every wrapper handles its empty case with a one-line message so callers
//! never have to check before printing.

use std::{fmt, ops::Index};

use super::BookCard;
use crate::{
    models::{Book, Transaction, User},
    wishlist::Wishlist,
};

/// Newtype wrapper for displaying a list of book cards.
///
/// # Examples
///
/// ```rust
/// use cloudleaf_core::{
///     display::{BookCard, Books},
///     models::Book,
/// };
/// use jiff::Timestamp;
///
/// let book = Book::new(1, "Moby Dick", "Herman Melville", "Adventure", 2);
/// let books = Books(vec![BookCard::new(book, "Bob", None, Timestamp::UNIX_EPOCH)]);
/// assert!(books.to_string().contains("Moby Dick"));
/// assert_eq!(Books(vec![]).to_string(), "No books found.\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Books(pub Vec<BookCard>);

impl Books {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BookCard> {
        self.0.iter()
    }

    fn fmt_cards(&self, f: &mut fmt::Formatter<'_>, empty: &str) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "{empty}");
        }
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl Index<usize> for Books {
    type Output = BookCard;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Books {
    type Item = BookCard;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Books {
    type Item = &'a BookCard;
    type IntoIter = std::slice::Iter<'a, BookCard>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Books {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_cards(f, "No books found.")
    }
}

/// Available books owned by other members.
#[derive(Debug, Clone, Default)]
pub struct Marketplace(pub Books);

impl fmt::Display for Marketplace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Marketplace")?;
        writeln!(f)?;
        self.0
            .fmt_cards(f, "No books are available from other members right now.")
    }
}

/// Marketplace books that satisfy the wishlist.
#[derive(Debug, Clone, Default)]
pub struct WishlistMatches(pub Vec<Book>);

impl WishlistMatches {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for WishlistMatches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No wishlist matches right now.");
        }
        writeln!(f, "## Wishlist Matches Found!")?;
        writeln!(f)?;
        for book in &self.0 {
            writeln!(
                f,
                "- **{}** by {} (`borrow {}`)",
                book.title, book.author, book.id
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for Wishlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## My Wishlist")?;
        writeln!(f)?;
        if self.is_empty() {
            return writeln!(f, "Your wishlist is empty.");
        }
        for entry in self.entries() {
            writeln!(f, "- {entry}")?;
        }
        Ok(())
    }
}

/// Transactions the viewer took part in, oldest first.
#[derive(Debug, Clone, Default)]
pub struct History(pub Vec<Transaction>);

impl History {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Lending History")?;
        writeln!(f)?;
        if self.0.is_empty() {
            return writeln!(f, "No completed loans yet.");
        }
        for transaction in &self.0 {
            write!(f, "{transaction}")?;
        }
        Ok(())
    }
}

/// Everything the home screen shows for the logged-in member.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub user: User,
    /// Preview of wishlist matches, already cut to the preview limit
    pub matches: WishlistMatches,
    pub my_books: Books,
    pub borrowed_books: Books,
    pub wishlist: Wishlist,
}

impl fmt::Display for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Welcome, {}", self.user.name)?;
        writeln!(f)?;
        writeln!(f, "★ {} Trust Score", self.user.trust_score)?;
        writeln!(f)?;

        if !self.matches.is_empty() {
            write!(f, "{}", self.matches)?;
            writeln!(f)?;
        }

        writeln!(f, "## My Books ({})", self.my_books.len())?;
        writeln!(f)?;
        self.my_books
            .fmt_cards(f, "You haven't listed any books yet.")?;
        writeln!(f)?;

        writeln!(f, "## Borrowed Books ({})", self.borrowed_books.len())?;
        writeln!(f)?;
        self.borrowed_books
            .fmt_cards(f, "You haven't borrowed any books yet.")?;
        writeln!(f)?;

        write!(f, "{}", self.wishlist)
    }
}
