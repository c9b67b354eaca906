//! Wishlist and the marketplace matcher.
//!
//! Matches are never stored. [`find_matches`] is a pure function of the
//! current books, the wishlist and the viewer, and callers run it whenever
//! they build a view, so the result always reflects the latest change.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::Book;

/// Titles (or fragments of titles) the circle is looking out for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wishlist {
    entries: Vec<String>,
}

impl Wishlist {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds a trimmed entry unless an equal one (ignoring case) exists.
    ///
    /// Returns whether the wishlist changed.
    pub fn add(&mut self, text: &str) -> bool {
        let text = text.trim();
        if self.position(text).is_some() {
            return false;
        }
        self.entries.push(text.to_string());
        true
    }

    /// Removes the entry equal to `text` ignoring case.
    ///
    /// Returns whether the wishlist changed.
    pub fn remove(&mut self, text: &str) -> bool {
        match self.position(text.trim()) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// True when some entry is a case-insensitive substring of `title`.
    pub fn wants(&self, title: &str) -> bool {
        let title = title.to_lowercase();
        self.entries
            .iter()
            .any(|wish| title.contains(&wish.to_lowercase()))
    }

    fn position(&self, text: &str) -> Option<usize> {
        let text = text.to_lowercase();
        self.entries.iter().position(|e| e.to_lowercase() == text)
    }
}

/// Books a viewer could borrow right now that satisfy the wishlist.
///
/// A book matches when it is available, is not owned by the viewer, and
/// its title contains a wishlist entry ignoring case. Store order is kept.
pub fn find_matches<'a>(books: &'a [Book], wishlist: &Wishlist, viewer_id: u64) -> Vec<&'a Book> {
    let matches: Vec<&Book> = books
        .iter()
        .filter(|b| b.is_available() && !b.is_owned_by(viewer_id) && wishlist.wants(&b.title))
        .collect();
    debug!(
        "Wishlist matches for user {viewer_id}: {} of {} books",
        matches.len(),
        books.len()
    );
    matches
}
