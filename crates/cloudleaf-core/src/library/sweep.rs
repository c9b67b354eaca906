//! Periodic expiry sweep.
//!
//! Every `period` the sweep locks the library and returns all loans whose
//! end date has passed. The first sweep runs one period after spawning.
//! A failed sweep is logged and the next tick tries again.

use std::time::Duration;

use log::{debug, error, info};
use tokio::{
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};

use super::SharedLibrary;

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Spawns the sweep on the current tokio runtime.
///
/// The task runs until aborted or until the runtime shuts down.
pub fn spawn_expiry_sweep(library: SharedLibrary, period: Duration) -> JoinHandle<()> {
    let period = period.max(MIN_PERIOD);
    tokio::spawn(async move {
        let mut tick = interval_at(Instant::now() + period, period);
        tick.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            tick.tick().await;
            let mut library = library.lock().await;
            match library.expire_overdue_loans() {
                Ok(returned) if returned.is_empty() => debug!("Expiry sweep: nothing overdue"),
                Ok(returned) => info!("Expiry sweep returned {} book(s)", returned.len()),
                Err(e) => error!("Expiry sweep failed: {e}"),
            }
        }
    })
}
