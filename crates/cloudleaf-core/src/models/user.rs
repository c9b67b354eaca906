//! User model definition.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LendingError, Result};

/// Lowest score a rating may carry.
pub const MIN_RATING: u8 = 1;
/// Highest score a rating may carry.
pub const MAX_RATING: u8 = 5;

/// A registered member of the lending circle.
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Unique identifier for the user
    pub id: u64,

    /// Display name, unique ignoring case
    pub name: String,

    /// Stored credential as produced by the configured password hasher
    #[serde(skip)]
    pub(crate) credential: String,

    /// Avatar image URL
    pub avatar: String,

    /// Informational trust score
    pub trust_score: f64,

    /// Ratings received, oldest first
    #[serde(default)]
    pub ratings: Vec<u8>,
}

impl User {
    /// Case-insensitive name comparison used by login and sign-up.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Mean of all ratings received, if any.
    pub fn average_rating(&self) -> Option<f64> {
        if self.ratings.is_empty() {
            return None;
        }
        let total: u32 = self.ratings.iter().map(|&r| u32::from(r)).sum();
        Some(f64::from(total) / self.ratings.len() as f64)
    }

    /// Appends a rating after checking it lies within 1–5.
    pub(crate) fn add_rating(&mut self, score: u8) -> Result<()> {
        if !(MIN_RATING..=MAX_RATING).contains(&score) {
            return Err(LendingError::invalid_input("score").with_reason(format!(
                "Rating must be between {MIN_RATING} and {MAX_RATING}, got {score}"
            )));
        }
        self.ratings.push(score);
        Ok(())
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("credential", &"<redacted>")
            .field("avatar", &self.avatar)
            .field("trust_score", &self.trust_score)
            .field("ratings", &self.ratings)
            .finish()
    }
}

/// Builds the avatar URL for a user name.
pub fn avatar_url(base: &str, name: &str) -> String {
    format!("{base}{}", name.to_lowercase())
}
