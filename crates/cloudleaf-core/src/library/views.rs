//! Read-only views for the Library that return display wrappers.
//!
//! Views are rebuilt from the store on every call, so they always reflect
//! the latest borrow, return or wishlist change.

use super::Library;
use crate::{
    display::{BookCard, Books, Dashboard, History, Marketplace, WishlistMatches},
    error::Result,
    models::Book,
    params::Id,
    wishlist::find_matches,
};

impl Library {
    /// Books owned by the current member, in store order.
    pub fn my_books(&self) -> Result<Vec<&Book>> {
        let viewer_id = self.require_user_id()?;
        Ok(self
            .store
            .books()
            .iter()
            .filter(|b| b.is_owned_by(viewer_id))
            .collect())
    }

    /// Books the current member is borrowing.
    pub fn borrowed_books(&self) -> Result<Vec<&Book>> {
        let viewer_id = self.require_user_id()?;
        Ok(self
            .store
            .books()
            .iter()
            .filter(|b| b.is_borrowed_by(viewer_id))
            .collect())
    }

    /// Available books owned by other members.
    pub fn marketplace_books(&self) -> Result<Vec<&Book>> {
        let viewer_id = self.require_user_id()?;
        Ok(self
            .store
            .books()
            .iter()
            .filter(|b| !b.is_owned_by(viewer_id) && b.is_available())
            .collect())
    }

    /// All wishlist matches for the current member.
    ///
    /// Empty without a session.
    pub fn wishlist_matches(&self) -> Vec<&Book> {
        match self.current_user {
            Some(viewer_id) => find_matches(self.store.books(), &self.wishlist, viewer_id),
            None => Vec::new(),
        }
    }

    /// A single book as seen by the current member (or by nobody).
    pub fn book_card(&self, params: &Id) -> Result<BookCard> {
        let book = self.store.book(params.id)?;
        self.card_for(book)
    }

    pub fn marketplace(&self) -> Result<Marketplace> {
        let books = self.marketplace_books()?;
        Ok(Marketplace(self.cards_for(books)?))
    }

    /// Home screen: match preview, own books, borrowed books and wishlist.
    pub fn dashboard(&self) -> Result<Dashboard> {
        let user = self.require_user()?.clone();
        let matches = self
            .wishlist_matches()
            .into_iter()
            .take(self.config.match_preview_limit)
            .cloned()
            .collect();

        Ok(Dashboard {
            user,
            matches: WishlistMatches(matches),
            my_books: self.cards_for(self.my_books()?)?,
            borrowed_books: self.cards_for(self.borrowed_books()?)?,
            wishlist: self.wishlist.clone(),
        })
    }

    /// Every wishlist match, not just the dashboard preview.
    pub fn wishlist_match_list(&self) -> Result<WishlistMatches> {
        self.require_user()?;
        Ok(WishlistMatches(
            self.wishlist_matches().into_iter().cloned().collect(),
        ))
    }

    /// Transactions the current member took part in, oldest first.
    pub fn history(&self) -> Result<History> {
        let viewer_id = self.require_user_id()?;
        Ok(History(
            self.store
                .transactions()
                .iter()
                .filter(|t| t.involves(viewer_id))
                .cloned()
                .collect(),
        ))
    }

    fn card_for(&self, book: &Book) -> Result<BookCard> {
        let owner = self.store.user(book.owner_id)?;
        Ok(BookCard::new(
            book.clone(),
            owner.name.clone(),
            self.current_user,
            self.clock.now(),
        ))
    }

    fn cards_for(&self, books: Vec<&Book>) -> Result<Books> {
        books
            .into_iter()
            .map(|b| self.card_for(b))
            .collect::<Result<Vec<_>>>()
            .map(Books)
    }
}
