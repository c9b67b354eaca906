use std::sync::Arc;

use cloudleaf_core::{auth::PlaintextHasher, Library, LibraryBuilder, ManualClock};
use jiff::Timestamp;

/// Fixed starting instant for scenario tests
pub fn start() -> Timestamp {
    "2024-03-01T12:00:00Z".parse().expect("valid timestamp")
}

/// Helper function to create a seeded library on a manual clock
pub fn create_test_library() -> (Arc<ManualClock>, Library) {
    let clock = Arc::new(ManualClock::new(start()));
    let library = LibraryBuilder::new()
        .with_clock(clock.clone())
        .with_hasher(Arc::new(PlaintextHasher))
        .build()
        .expect("Failed to create library");
    (clock, library)
}
