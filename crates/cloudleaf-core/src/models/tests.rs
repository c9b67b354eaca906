use jiff::{SignedDuration, Timestamp};

use super::*;
use crate::models::user::avatar_url;

fn at(hours: i64) -> Timestamp {
    Timestamp::UNIX_EPOCH
        .checked_add(SignedDuration::from_hours(hours))
        .unwrap()
}

fn member(ratings: Vec<u8>) -> User {
    User {
        id: 1,
        name: "Alice".to_string(),
        credential: "secret-hash".to_string(),
        avatar: avatar_url("https://i.pravatar.cc/150?u=", "Alice"),
        trust_score: 4.8,
        ratings,
    }
}

#[test]
fn test_lend_and_return_keep_fields_in_step() {
    let mut book = Book::new(1, "Moby Dick", "Herman Melville", "Adventure", 2);

    book.lend_to(1, at(24));
    assert!(book.is_on_loan());
    assert!(book.is_borrowed_by(1));
    assert!(book.check_invariants().is_ok());

    book.mark_returned();
    assert!(book.is_available());
    assert_eq!(book.borrower_id, None);
    assert_eq!(book.loan_end_date, None);
    assert!(book.check_invariants().is_ok());
}

#[test]
fn test_owner_as_borrower_breaks_invariants() {
    let mut book = Book::new(1, "Moby Dick", "Herman Melville", "Adventure", 2);
    book.lend_to(2, at(24));
    assert!(book.check_invariants().is_err());
}

#[test]
fn test_overdue_is_strict() {
    let mut book = Book::new(1, "Moby Dick", "Herman Melville", "Adventure", 2);
    assert!(!book.is_overdue(at(100)));

    book.lend_to(1, at(10));
    assert!(!book.is_overdue(at(9)));
    assert!(!book.is_overdue(at(10)));
    assert!(book.is_overdue(at(11)));
}

#[test]
fn test_days_left_rounds_up() {
    let mut book = Book::new(1, "Moby Dick", "Herman Melville", "Adventure", 2);
    book.lend_to(1, at(14 * 24));

    assert_eq!(book.days_left(at(0)), Some(14));
    assert_eq!(book.days_left(at(1)), Some(14));
    assert_eq!(book.days_left(at(13 * 24)), Some(1));
    assert_eq!(book.days_left(at(14 * 24)), Some(0));
    assert_eq!(book.days_left(at(14 * 24 + 1)), Some(0));
    assert_eq!(book.days_left(at(15 * 24 + 1)), Some(-1));
}

#[test]
fn test_book_status_parsing_and_labels() {
    assert_eq!("on loan".parse::<BookStatus>(), Ok(BookStatus::OnLoan));
    assert_eq!("Available".parse::<BookStatus>(), Ok(BookStatus::Available));
    assert!("lost".parse::<BookStatus>().is_err());
    assert_eq!(BookStatus::OnLoan.with_icon(), "➤ On Loan");
    assert_eq!(
        serde_json::to_string(&BookStatus::OnLoan).unwrap(),
        "\"On Loan\""
    );
}

#[test]
fn test_average_rating() {
    assert_eq!(member(vec![]).average_rating(), None);
    let avg = member(vec![5, 5, 4]).average_rating().unwrap();
    assert!((avg - 14.0 / 3.0).abs() < f64::EPSILON);
}

#[test]
fn test_add_rating_checks_range() {
    let mut user = member(vec![]);
    assert!(user.add_rating(0).is_err());
    assert!(user.add_rating(6).is_err());
    user.add_rating(5).unwrap();
    assert_eq!(user.ratings, vec![5]);
}

#[test]
fn test_user_hides_credential() {
    let user = member(vec![5]);
    assert!(!format!("{user:?}").contains("secret-hash"));
    let json = serde_json::to_string(&user).unwrap();
    assert!(!json.contains("secret-hash"));
    assert!(json.contains("https://i.pravatar.cc/150?u=alice"));
}

#[test]
fn test_transaction_involves_both_sides() {
    let lender = User {
        id: 2,
        name: "Bob".to_string(),
        ..member(vec![])
    };
    let transaction = Transaction {
        id: 1,
        book: Book::new(1, "Moby Dick", "Herman Melville", "Adventure", 2),
        lender,
        borrower: member(vec![]),
        return_date: at(0),
        lender_rated: false,
        borrower_rated: false,
    };
    assert!(transaction.involves(1));
    assert!(transaction.involves(2));
    assert!(!transaction.involves(3));
}
