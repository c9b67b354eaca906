//! Book and loan operations for the Library.

use log::info;

use super::Library;
use crate::{
    error::Result,
    lending,
    models::{Book, LoanRequest, Transaction},
    params::{AddBook, Id},
};

impl Library {
    /// Lists a new book owned by the current member.
    ///
    /// Title, author and genre are trimmed and must not be empty.
    pub fn add_book(&mut self, params: &AddBook) -> Result<Book> {
        params.validate()?;
        let owner_id = self.require_user_id()?;

        let book = Book::new(
            self.store.next_book_id(),
            params.title.trim(),
            params.author.trim(),
            params.genre.trim(),
            owner_id,
        );
        info!("User {owner_id} added \"{}\" as book {}", book.title, book.id);
        self.store.insert_book(book.clone());
        Ok(book)
    }

    pub fn book(&self, id: u64) -> Result<&Book> {
        self.store.book(id)
    }

    pub fn get_book(&self, params: &Id) -> Result<&Book> {
        self.book(params.id)
    }

    /// Borrows a book for the configured loan period.
    ///
    /// The request is approved on the spot; the returned receipt always has
    /// status `Approved`.
    pub fn borrow_book(&mut self, params: &Id) -> Result<LoanRequest> {
        let actor_id = self.require_user_id()?;
        let now = self.clock.now();
        lending::borrow(
            &mut self.store,
            actor_id,
            params.id,
            now,
            self.config.loan_period,
        )
    }

    /// Returns a book the current member is borrowing.
    pub fn return_book(&mut self, params: &Id) -> Result<Transaction> {
        let actor_id = self.require_user_id()?;
        let now = self.clock.now();
        lending::return_book(&mut self.store, actor_id, params.id, now)
    }

    /// Returns every loan whose end date has passed.
    ///
    /// Needs no session; each transaction records the book's own borrower.
    pub fn expire_overdue_loans(&mut self) -> Result<Vec<Transaction>> {
        let now = self.clock.now();
        lending::sweep_expired(&mut self.store, now)
    }
}
