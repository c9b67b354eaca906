//! Loan lifecycle engine.
//!
//! Every book moves between two states:
//!
//! ```text
//!             borrow (actor ≠ owner)
//!   Available ──────────────────────▶ OnLoan
//!       ▲                               │
//!       └───────────────────────────────┘
//!        return (actor = borrower) or expiry sweep
//! ```
//!
//! Borrowing is approved on the spot; the returned [`LoanRequest`] is only
//! a receipt. Each transition validates its preconditions before touching
//! the store, so a rejected call leaves everything as it was. A return
//! appends its [`Transaction`] and frees the book under the same mutable
//! borrow of the store.
//!
//! The expiry sweep records the book's actual borrower on the transaction,
//! independent of who (if anyone) is logged in.

use jiff::{SignedDuration, Timestamp};
use log::{info, warn};

use crate::{
    error::{LendingError, Result},
    models::{LoanRequest, RequestStatus, Transaction},
    store::EntityStore,
};


/// Lends `book_id` to `actor_id` until `now + loan_period`.
///
/// # Errors
///
/// - [`LendingError::BookNotFound`] / [`LendingError::UserNotFound`]
/// - [`LendingError::OwnBook`] when the actor owns the book
/// - [`LendingError::NotAvailable`] when the book is not available
pub fn borrow(
    store: &mut EntityStore,
    actor_id: u64,
    book_id: u64,
    now: Timestamp,
    loan_period: SignedDuration,
) -> Result<LoanRequest> {
    let requester = store.user(actor_id)?.clone();
    let book = store.book(book_id)?;

    if book.is_owned_by(actor_id) {
        warn!("User {actor_id} tried to borrow their own book {book_id}");
        return Err(LendingError::OwnBook { book_id });
    }
    if !book.is_available() {
        warn!(
            "User {actor_id} tried to borrow book {book_id} while it is {}",
            book.status
        );
        return Err(LendingError::NotAvailable {
            book_id,
            status: book.status,
        });
    }
    let owner_name = store.user(book.owner_id)?.name.clone();

    let loan_end_date = now.checked_add(loan_period)?;
    let request_id = store.issue_request_id();
    let book = store.book_mut(book_id)?;
    book.lend_to(actor_id, loan_end_date);
    info!(
        "{} borrowed \"{}\" from {} until {}",
        requester.name, book.title, owner_name, loan_end_date
    );

    Ok(LoanRequest {
        id: request_id,
        book: book.clone(),
        requester,
        status: RequestStatus::Approved,
    })
}

/// Returns `book_id` on behalf of `actor_id`, who must be its borrower.
pub fn return_book(
    store: &mut EntityStore,
    actor_id: u64,
    book_id: u64,
    now: Timestamp,
) -> Result<Transaction> {
    let book = store.book(book_id)?;
    if !book.is_on_loan() || !book.is_borrowed_by(actor_id) {
        warn!("User {actor_id} tried to return book {book_id} they do not hold");
        return Err(LendingError::NotBorrower { book_id });
    }
    let transaction = complete_loan(store, book_id, now)?;
    info!(
        "{} returned \"{}\" to {}",
        transaction.borrower.name, transaction.book.title, transaction.lender.name
    );
    Ok(transaction)
}

/// Returns every book whose loan ended strictly before `now`.
///
/// Books are processed in store order; the transactions are returned in
/// the order they were recorded.
pub fn sweep_expired(store: &mut EntityStore, now: Timestamp) -> Result<Vec<Transaction>> {
    let overdue: Vec<u64> = store
        .books()
        .iter()
        .filter(|b| b.is_overdue(now))
        .map(|b| b.id)
        .collect();

    let mut returned = Vec::with_capacity(overdue.len());
    for book_id in overdue {
        let transaction = complete_loan(store, book_id, now)?;
        info!(
            "Loan for \"{}\" expired. Auto-returned from {} to {}",
            transaction.book.title, transaction.borrower.name, transaction.lender.name
        );
        returned.push(transaction);
    }
    Ok(returned)
}

/// Records the transaction for an on-loan book and makes it available.
///
/// All lookups happen before the first mutation.
fn complete_loan(store: &mut EntityStore, book_id: u64, now: Timestamp) -> Result<Transaction> {
    let book = store.book(book_id)?.clone();
    let borrower_id = book
        .borrower_id
        .ok_or(LendingError::NotBorrower { book_id })?;
    let lender = store.user(book.owner_id)?.clone();
    let borrower = store.user(borrower_id)?.clone();

    let transaction = Transaction {
        id: store.next_transaction_id(),
        book,
        lender,
        borrower,
        return_date: now,
        lender_rated: false,
        borrower_rated: false,
    };

    store.book_mut(book_id)?.mark_returned();
    store.append_transaction(transaction.clone());

    Ok(transaction)
}

/// Rates the counterparty of a transaction on behalf of `actor_id`.
///
/// The lender rates the borrower and the borrower rates the lender, once
/// each. The score is appended to the counterparty's ratings.
pub fn rate_counterparty(
    store: &mut EntityStore,
    actor_id: u64,
    transaction_id: u64,
    score: u8,
) -> Result<Transaction> {
    let transaction = store.transaction(transaction_id)?;
    let (counterparty_id, already_rated) = if transaction.lender.id == actor_id {
        (transaction.borrower.id, transaction.borrower_rated)
    } else if transaction.borrower.id == actor_id {
        (transaction.lender.id, transaction.lender_rated)
    } else {
        return Err(LendingError::NotParticipant { transaction_id });
    };
    if already_rated {
        return Err(LendingError::AlreadyRated { transaction_id });
    }

    store.user_mut(counterparty_id)?.add_rating(score)?;

    let transaction = store.transaction_mut(transaction_id)?;
    if transaction.lender.id == actor_id {
        transaction.borrower_rated = true;
    } else {
        transaction.lender_rated = true;
    }
    info!("User {actor_id} rated user {counterparty_id} with {score} for transaction {transaction_id}");

    Ok(transaction.clone())
}
