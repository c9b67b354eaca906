//! In-memory entity store for users, books and the transaction log.
//!
//! The store owns every [`User`], [`Book`] and [`Transaction`] for the
//! lifetime of the process. Nothing is ever deleted: users and books only
//! grow, books change through the lending engine, and transactions are
//! append-only. Identifiers are allocated densely from 1, so "count + 1" is
//! always a fresh id.

use crate::{
    error::{LendingError, Result},
    models::{Book, Transaction, User},
};

pub mod seed;


/// Process-lifetime collections of users, books and transactions.
#[derive(Debug, Default)]
pub struct EntityStore {
    users: Vec<User>,
    books: Vec<Book>,
    transactions: Vec<Transaction>,
    requests_issued: u64,
}

impl EntityStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn user(&self, id: u64) -> Result<&User> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .ok_or(LendingError::UserNotFound { id })
    }

    pub(crate) fn user_mut(&mut self, id: u64) -> Result<&mut User> {
        self.users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(LendingError::UserNotFound { id })
    }

    /// Finds a user by name, ignoring case.
    pub fn find_user_by_name(&self, name: &str) -> Option<&User> {
        self.users.iter().find(|u| u.matches_name(name))
    }

    pub fn book(&self, id: u64) -> Result<&Book> {
        self.books
            .iter()
            .find(|b| b.id == id)
            .ok_or(LendingError::BookNotFound { id })
    }

    pub(crate) fn book_mut(&mut self, id: u64) -> Result<&mut Book> {
        self.books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(LendingError::BookNotFound { id })
    }

    pub fn transaction(&self, id: u64) -> Result<&Transaction> {
        self.transactions
            .iter()
            .find(|t| t.id == id)
            .ok_or(LendingError::TransactionNotFound { id })
    }

    pub(crate) fn transaction_mut(&mut self, id: u64) -> Result<&mut Transaction> {
        self.transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(LendingError::TransactionNotFound { id })
    }

    pub fn next_user_id(&self) -> u64 {
        self.users.len() as u64 + 1
    }

    pub fn next_book_id(&self) -> u64 {
        self.books.len() as u64 + 1
    }

    pub fn next_transaction_id(&self) -> u64 {
        self.transactions.len() as u64 + 1
    }

    /// Hands out the id for the next loan request receipt.
    pub(crate) fn issue_request_id(&mut self) -> u64 {
        self.requests_issued += 1;
        self.requests_issued
    }

    pub(crate) fn insert_user(&mut self, user: User) {
        self.users.push(user);
    }

    pub(crate) fn insert_book(&mut self, book: Book) {
        self.books.push(book);
    }

    pub(crate) fn append_transaction(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// Checks the loan-state invariants of every book.
    pub fn verify_invariants(&self) -> std::result::Result<(), String> {
        self.books.iter().try_for_each(Book::check_invariants)
    }
}
