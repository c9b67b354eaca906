//! Sample members and books loaded at startup.

use jiff::{SignedDuration, Timestamp};

use super::EntityStore;
use crate::{
    auth::PasswordHasher,
    error::Result,
    models::{user::avatar_url, Book, User},
};

/// Password shared by every sample member.
pub const SEED_PASSWORD: &str = "password123";

/// Remaining loan time of the one book that starts out on loan.
const SEED_LOAN_REMAINING: SignedDuration = SignedDuration::from_hours(3 * 24);

struct SeedUser {
    name: &'static str,
    trust_score: f64,
    ratings: &'static [u8],
}

const USERS: [SeedUser; 4] = [
    SeedUser {
        name: "Alice",
        trust_score: 4.8,
        ratings: &[5, 5, 4],
    },
    SeedUser {
        name: "Bob",
        trust_score: 4.5,
        ratings: &[4, 5],
    },
    SeedUser {
        name: "Charlie",
        trust_score: 4.9,
        ratings: &[5, 5, 5, 4],
    },
    SeedUser {
        name: "Diana",
        trust_score: 4.2,
        ratings: &[4, 4],
    },
];

/// (title, author, genre, owner id)
const BOOKS: [(&str, &str, &str, u64); 8] = [
    ("Moby Dick", "Herman Melville", "Adventure", 2),
    ("Pride and Prejudice", "Jane Austen", "Romance", 1),
    ("The Adventures of Tom Sawyer", "Mark Twain", "Adventure", 3),
    ("Frankenstein", "Mary Shelley", "Gothic", 1),
    ("A Tale of Two Cities", "Charles Dickens", "Historical", 4),
    ("Dracula", "Bram Stoker", "Horror", 2),
    ("The Scarlet Letter", "Nathaniel Hawthorne", "Romance", 3),
    ("War and Peace", "Leo Tolstoy", "Historical", 1),
];

/// War and Peace is lent to Diana when the store is seeded.
const SEED_LOAN: (u64, u64) = (8, 4);

/// Fills `store` with the sample members and their books.
///
/// Passwords go through `hasher` like any sign-up would.
pub fn seed(
    store: &mut EntityStore,
    hasher: &dyn PasswordHasher,
    avatar_base_url: &str,
    now: Timestamp,
) -> Result<()> {
    for seed in &USERS {
        let user = User {
            id: store.next_user_id(),
            name: seed.name.to_string(),
            credential: hasher.hash(SEED_PASSWORD)?,
            avatar: avatar_url(avatar_base_url, seed.name),
            trust_score: seed.trust_score,
            ratings: seed.ratings.to_vec(),
        };
        store.insert_user(user);
    }

    for (title, author, genre, owner_id) in BOOKS {
        let book = Book::new(store.next_book_id(), title, author, genre, owner_id);
        store.insert_book(book);
    }

    let (book_id, borrower_id) = SEED_LOAN;
    let due = now.checked_add(SEED_LOAN_REMAINING)?;
    store.book_mut(book_id)?.lend_to(borrower_id, due);

    Ok(())
}
