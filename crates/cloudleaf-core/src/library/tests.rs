//! Tests for the library module.

use std::{sync::Arc, time::Duration};

use jiff::{SignedDuration, Timestamp};

use super::*;
use crate::{
    auth::PlaintextHasher,
    clock::ManualClock,
    error::LendingError,
    models::BookStatus,
    params::{AddBook, Credentials, Id, RateTransaction, Wish},
};

fn start() -> Timestamp {
    "2024-03-01T12:00:00Z".parse().unwrap()
}

/// Helper function to create a seeded library on a manual clock
fn create_test_library() -> (Arc<ManualClock>, Library) {
    let clock = Arc::new(ManualClock::new(start()));
    let library = LibraryBuilder::new()
        .with_clock(clock.clone())
        .with_hasher(Arc::new(PlaintextHasher))
        .build()
        .expect("Failed to create library");
    (clock, library)
}

fn credentials(name: &str, password: &str) -> Credentials {
    Credentials {
        name: name.to_string(),
        password: password.to_string(),
    }
}

fn login_as(library: &mut Library, name: &str) {
    library
        .login(&credentials(name, "password123"))
        .expect("Failed to log in");
}

#[test]
fn test_operations_require_login() {
    let (_clock, mut library) = create_test_library();

    assert!(matches!(
        library.borrow_book(&Id { id: 1 }),
        Err(LendingError::NotLoggedIn)
    ));
    assert!(matches!(library.dashboard(), Err(LendingError::NotLoggedIn)));
    assert!(matches!(
        library.add_book(&AddBook {
            title: "Emma".to_string(),
            author: "Jane Austen".to_string(),
            genre: "Romance".to_string(),
        }),
        Err(LendingError::NotLoggedIn)
    ));
    assert!(library.wishlist_matches().is_empty());
    assert!(library.book(1).is_ok_and(|b| b.is_available()));
}

#[test]
fn test_login_is_case_insensitive_on_name_only() {
    let (_clock, mut library) = create_test_library();

    let user = library.login(&credentials("ALICE", "password123")).unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(library.current_user().map(|u| u.id), Some(1));

    let err = library
        .login(&credentials("Alice", "PASSWORD123"))
        .unwrap_err();
    assert_eq!(err.to_string(), "Login failed. Invalid name or password.");
}

#[test]
fn test_sign_up_creates_and_logs_in_member() {
    let (_clock, mut library) = create_test_library();

    let user = library.sign_up(&credentials("Eve", "secret")).unwrap();

    assert_eq!(user.id, 5);
    assert_eq!(user.trust_score, 4.0);
    assert!(user.ratings.is_empty());
    assert_eq!(user.avatar, "https://i.pravatar.cc/150?u=eve");
    assert_eq!(library.current_user().map(|u| u.id), Some(5));

    library.logout();
    assert!(library.current_user().is_none());
    assert_eq!(library.login(&credentials("eve", "secret")).unwrap().id, 5);
}

#[test]
fn test_sign_up_rejects_case_variant_of_existing_name() {
    let (_clock, mut library) = create_test_library();

    let err = library.sign_up(&credentials("bOB", "whatever")).unwrap_err();

    assert!(matches!(err, LendingError::UserExists { .. }));
    assert_eq!(err.to_string(), "Sign up failed. User already exists.");
    assert_eq!(library.store().users().len(), 4);
    assert!(library.current_user().is_none());
}

#[test]
fn test_empty_credentials_are_rejected() {
    let (_clock, mut library) = create_test_library();

    let err = library.login(&credentials("   ", "password123")).unwrap_err();
    assert_eq!(err.to_string(), "Name cannot be empty.");
    let err = library.sign_up(&credentials("Eve", "")).unwrap_err();
    assert_eq!(err.to_string(), "Password cannot be empty.");
}

#[test]
fn test_logout_keeps_loans_and_wishlist() {
    let (_clock, mut library) = create_test_library();
    login_as(&mut library, "Alice");
    library.borrow_book(&Id { id: 1 }).unwrap();
    library
        .add_wish(&Wish {
            text: "Dracula".to_string(),
        })
        .unwrap();

    let who = library.logout();

    assert_eq!(who.map(|u| u.name), Some("Alice".to_string()));
    assert!(library.book(1).unwrap().is_borrowed_by(1));
    assert_eq!(library.wishlist().entries().len(), 3);
    assert!(library.logout().is_none());
}

#[test]
fn test_add_book_gets_next_id_and_trimmed_fields() {
    let (_clock, mut library) = create_test_library();
    login_as(&mut library, "Charlie");

    let book = library
        .add_book(&AddBook {
            title: "  Emma ".to_string(),
            author: "Jane Austen".to_string(),
            genre: "Romance".to_string(),
        })
        .unwrap();

    assert_eq!(book.id, 9);
    assert_eq!(book.title, "Emma");
    assert_eq!(book.owner_id, 3);
    assert_eq!(book.status, BookStatus::Available);
    assert_eq!(library.my_books().unwrap().len(), 3);
}

#[test]
fn test_add_book_rejects_missing_fields() {
    let (_clock, mut library) = create_test_library();
    login_as(&mut library, "Charlie");

    let err = library
        .add_book(&AddBook {
            title: "Emma".to_string(),
            author: " ".to_string(),
            genre: "Romance".to_string(),
        })
        .unwrap_err();

    assert!(matches!(err, LendingError::InvalidInput { .. }));
    assert_eq!(library.store().books().len(), 8);
}

#[test]
fn test_views_for_alice() {
    let (_clock, mut library) = create_test_library();
    login_as(&mut library, "Alice");

    let mine: Vec<u64> = library.my_books().unwrap().iter().map(|b| b.id).collect();
    assert_eq!(mine, vec![2, 4, 8]);
    assert!(library.borrowed_books().unwrap().is_empty());

    let market: Vec<u64> = library
        .marketplace_books()
        .unwrap()
        .iter()
        .map(|b| b.id)
        .collect();
    assert_eq!(market, vec![1, 3, 5, 6, 7]);
}

#[test]
fn test_diana_sees_her_borrowed_book_countdown() {
    let (_clock, mut library) = create_test_library();
    login_as(&mut library, "Diana");

    let borrowed = library.borrowed_books().unwrap();
    assert_eq!(borrowed.len(), 1);
    assert_eq!(borrowed[0].title, "War and Peace");

    let dashboard = library.dashboard().unwrap().to_string();
    assert!(dashboard.contains("## Borrowed Books (1)"));
    assert!(dashboard.contains("Returns in 3 day(s)"));
}

#[test]
fn test_dashboard_previews_at_most_three_matches() {
    let (_clock, mut library) = create_test_library();
    login_as(&mut library, "Alice");
    for wish in ["Moby", "Tom Sawyer", "Dracula", "Scarlet"] {
        library
            .add_wish(&Wish {
                text: wish.to_string(),
            })
            .unwrap();
    }

    assert_eq!(library.wishlist_matches().len(), 4);
    let dashboard = library.dashboard().unwrap();
    assert_eq!(dashboard.matches.len(), 3);
    assert_eq!(library.wishlist_match_list().unwrap().len(), 4);
}

#[test]
fn test_matches_follow_borrow_and_return() {
    let (_clock, mut library) = create_test_library();
    login_as(&mut library, "Alice");
    library
        .add_wish(&Wish {
            text: "moby".to_string(),
        })
        .unwrap();
    assert_eq!(library.wishlist_matches().len(), 1);

    library.borrow_book(&Id { id: 1 }).unwrap();
    assert!(library.wishlist_matches().is_empty());

    library.return_book(&Id { id: 1 }).unwrap();
    assert_eq!(library.wishlist_matches().len(), 1);
}

#[test]
fn test_wishlist_edit_requires_text() {
    let (_clock, mut library) = create_test_library();
    login_as(&mut library, "Bob");

    assert!(library
        .remove_wish(&Wish {
            text: "1984".to_string()
        })
        .unwrap());
    assert!(!library
        .remove_wish(&Wish {
            text: "1984".to_string()
        })
        .unwrap());
    let err = library
        .add_wish(&Wish {
            text: "  ".to_string(),
        })
        .unwrap_err();
    assert_eq!(err.to_string(), "Wishlist entry cannot be empty.");
}

#[test]
fn test_borrow_uses_clock_for_due_date() {
    let (clock, mut library) = create_test_library();
    clock.advance(SignedDuration::from_hours(5));
    login_as(&mut library, "Alice");

    let receipt = library.borrow_book(&Id { id: 1 }).unwrap();

    let expected = start()
        .checked_add(SignedDuration::from_hours(5 + 14 * 24))
        .unwrap();
    assert_eq!(receipt.book.loan_end_date, Some(expected));
}

#[test]
fn test_expire_overdue_loans_without_session() {
    let (clock, mut library) = create_test_library();
    clock.advance(SignedDuration::from_hours(73));

    let returned = library.expire_overdue_loans().unwrap();

    assert_eq!(returned.len(), 1);
    assert_eq!(returned[0].borrower.name, "Diana");
    assert!(library.book(8).unwrap().is_available());
}

#[test]
fn test_rate_transaction_through_library() {
    let (_clock, mut library) = create_test_library();
    login_as(&mut library, "Alice");
    library.borrow_book(&Id { id: 1 }).unwrap();
    let transaction = library.return_book(&Id { id: 1 }).unwrap();

    let result = library
        .rate_transaction(&RateTransaction {
            transaction_id: transaction.id,
            score: 4,
        })
        .unwrap();

    assert_eq!(result.rated.name, "Bob");
    assert_eq!(result.rated.ratings, vec![4, 5, 4]);
    assert!(result.transaction.lender_rated);
    assert_eq!(library.history().unwrap().len(), 1);
}

#[test]
fn test_book_card_without_session() {
    let (_clock, library) = create_test_library();

    let card = library.book_card(&Id { id: 8 }).unwrap();

    assert_eq!(card.owner_name, "Alice");
    assert!(!card.to_string().contains("day(s)"));
    assert!(matches!(
        library.book_card(&Id { id: 42 }),
        Err(LendingError::BookNotFound { id: 42 })
    ));
}

#[test]
fn test_without_seed_data_starts_empty() {
    let library = LibraryBuilder::new()
        .with_hasher(Arc::new(PlaintextHasher))
        .without_seed_data()
        .build()
        .unwrap();

    assert!(library.store().users().is_empty());
    assert!(library.store().books().is_empty());
    assert_eq!(library.wishlist().entries(), ["The Great Gatsby", "1984"]);
}

#[tokio::test(start_paused = true)]
async fn test_sweep_task_returns_expired_loans_after_one_tick() {
    let (clock, library) = create_test_library();
    let shared = library.into_shared();
    let handle = spawn_expiry_sweep(shared.clone(), Duration::from_secs(60));

    clock.advance(SignedDuration::from_hours(96));
    tokio::time::sleep(Duration::from_secs(30)).await;
    assert!(shared.lock().await.book(8).unwrap().is_on_loan());

    tokio::time::sleep(Duration::from_secs(31)).await;
    {
        let library = shared.lock().await;
        assert!(library.book(8).unwrap().is_available());
        assert_eq!(library.store().transactions().len(), 1);
    }

    handle.abort();
}

#[tokio::test(start_paused = true)]
async fn test_sweep_task_leaves_current_loans() {
    let (_clock, library) = create_test_library();
    let shared = library.into_shared();
    let handle = spawn_expiry_sweep(shared.clone(), Duration::from_secs(60));

    tokio::time::sleep(Duration::from_secs(180)).await;

    let library = shared.lock().await;
    assert!(library.book(8).unwrap().is_on_loan());
    assert!(library.store().transactions().is_empty());
    drop(library);
    handle.abort();
}
