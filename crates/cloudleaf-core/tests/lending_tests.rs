mod common;

use std::sync::Arc;

use cloudleaf_core::{
    auth::Argon2Hasher, BookStatus, Credentials, Id, LendingError, LibraryBuilder, RequestStatus,
};
use common::{create_test_library, start};
use jiff::SignedDuration;

fn credentials(name: &str, password: &str) -> Credentials {
    Credentials {
        name: name.to_string(),
        password: password.to_string(),
    }
}

#[test]
fn test_alice_borrows_and_returns_moby_dick() {
    let (clock, mut library) = create_test_library();
    library
        .login(&credentials("Alice", "password123"))
        .expect("Failed to log in");

    let receipt = library
        .borrow_book(&Id { id: 1 })
        .expect("Failed to borrow");
    assert_eq!(receipt.status, RequestStatus::Approved);

    let book = library.book(1).unwrap();
    assert_eq!(book.status, BookStatus::OnLoan);
    assert_eq!(book.borrower_id, Some(1));
    assert_eq!(
        book.loan_end_date,
        Some(start().checked_add(SignedDuration::from_hours(14 * 24)).unwrap())
    );

    clock.advance(SignedDuration::from_hours(50));
    let transaction = library
        .return_book(&Id { id: 1 })
        .expect("Failed to return");

    let book = library.book(1).unwrap();
    assert_eq!(book.status, BookStatus::Available);
    assert_eq!(book.borrower_id, None);
    assert_eq!(book.loan_end_date, None);

    let log = library.store().transactions();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0], transaction);
    assert_eq!(transaction.lender.name, "Bob");
    assert_eq!(transaction.borrower.name, "Alice");
    assert_eq!(
        transaction.return_date,
        start().checked_add(SignedDuration::from_hours(50)).unwrap()
    );
    assert!(library.store().verify_invariants().is_ok());
}

#[test]
fn test_rejected_transitions_change_nothing() {
    let (_clock, mut library) = create_test_library();
    library.login(&credentials("Bob", "password123")).unwrap();
    let books_before = library.store().books().to_vec();

    assert!(matches!(
        library.borrow_book(&Id { id: 1 }),
        Err(LendingError::OwnBook { book_id: 1 })
    ));
    assert!(matches!(
        library.borrow_book(&Id { id: 8 }),
        Err(LendingError::NotAvailable { book_id: 8, .. })
    ));
    assert!(matches!(
        library.return_book(&Id { id: 8 }),
        Err(LendingError::NotBorrower { book_id: 8 })
    ));

    assert_eq!(library.store().books(), books_before.as_slice());
    assert!(library.store().transactions().is_empty());
}

#[test]
fn test_invariants_hold_across_a_busy_afternoon() {
    let (clock, mut library) = create_test_library();
    let steps: [(&str, u64, bool); 6] = [
        ("Alice", 1, true),
        ("Bob", 3, true),
        ("Charlie", 1, false),
        ("Diana", 2, true),
        ("Alice", 1, false),
        ("Bob", 3, false),
    ];

    for (name, book_id, borrow) in steps {
        library.login(&credentials(name, "password123")).unwrap();
        let outcome = if borrow {
            library.borrow_book(&Id { id: book_id }).map(|_| ())
        } else {
            library.return_book(&Id { id: book_id }).map(|_| ())
        };
        // Charlie never borrowed Moby Dick.
        if name == "Charlie" {
            assert!(outcome.is_err());
        } else {
            outcome.unwrap();
        }
        assert!(library.store().verify_invariants().is_ok());
        clock.advance(SignedDuration::from_hours(1));
    }

    assert_eq!(library.store().transactions().len(), 2);
    assert!(library.book(2).unwrap().is_borrowed_by(4));
}

#[test]
fn test_sweep_after_due_date_returns_to_actual_borrower() {
    let (clock, mut library) = create_test_library();
    library.login(&credentials("Bob", "password123")).unwrap();
    clock.advance(SignedDuration::from_hours(4 * 24));

    let returned = library.expire_overdue_loans().unwrap();

    assert_eq!(returned.len(), 1);
    assert_eq!(returned[0].borrower.name, "Diana");
    assert_eq!(returned[0].lender.name, "Alice");
    assert!(library.book(8).unwrap().is_available());
}

#[test]
fn test_argon2_login_round_trip() {
    let mut library = LibraryBuilder::new()
        .with_hasher(Arc::new(Argon2Hasher))
        .build()
        .unwrap();

    assert!(library.login(&credentials("diana", "password123")).is_ok());
    assert!(matches!(
        library.login(&credentials("diana", "password124")),
        Err(LendingError::InvalidCredentials)
    ));
    library.sign_up(&credentials("Frank", "hunter2")).unwrap();
    library.logout();
    assert_eq!(
        library.login(&credentials("FRANK", "hunter2")).unwrap().id,
        5
    );
}
