//! Rating the counterparty of a completed loan.

use super::Library;
use crate::{display::RatingResult, error::Result, lending, params::RateTransaction};

impl Library {
    /// Rates the other side of a transaction the current member took part
    /// in. Each side may rate once.
    pub fn rate_transaction(&mut self, params: &RateTransaction) -> Result<RatingResult> {
        let actor_id = self.require_user_id()?;
        let transaction = lending::rate_counterparty(
            &mut self.store,
            actor_id,
            params.transaction_id,
            params.score,
        )?;
        let rated_id = if transaction.lender.id == actor_id {
            transaction.borrower.id
        } else {
            transaction.lender.id
        };
        let rated = self.store.user(rated_id)?.clone();
        Ok(RatingResult {
            transaction,
            rated,
            score: params.score,
        })
    }
}
