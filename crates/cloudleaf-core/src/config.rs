//! Tunable constants of the lending circle.

use std::time::Duration;

use jiff::SignedDuration;

/// Length of a loan: 14 days.
pub const DEFAULT_LOAN_PERIOD: SignedDuration = SignedDuration::from_hours(14 * 24);
/// How often expired loans are swept back to available.
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(60);
/// Trust score given to newly registered users.
pub const DEFAULT_TRUST_SCORE: f64 = 4.0;
/// Prefix for generated avatar URLs; the lowercased name is appended.
pub const DEFAULT_AVATAR_BASE_URL: &str = "https://i.pravatar.cc/150?u=";
/// Number of wishlist matches shown on the dashboard.
pub const DEFAULT_MATCH_PREVIEW_LIMIT: usize = 3;

/// Settings for a [`crate::Library`].
#[derive(Debug, Clone)]
pub struct LendingConfig {
    pub loan_period: SignedDuration,
    pub sweep_interval: Duration,
    pub default_trust_score: f64,
    pub avatar_base_url: String,
    pub match_preview_limit: usize,
    pub initial_wishlist: Vec<String>,
}

impl Default for LendingConfig {
    fn default() -> Self {
        Self {
            loan_period: DEFAULT_LOAN_PERIOD,
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
            default_trust_score: DEFAULT_TRUST_SCORE,
            avatar_base_url: DEFAULT_AVATAR_BASE_URL.to_string(),
            match_preview_limit: DEFAULT_MATCH_PREVIEW_LIMIT,
            initial_wishlist: vec!["The Great Gatsby".to_string(), "1984".to_string()],
        }
    }
}
