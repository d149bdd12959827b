//! On-demand and periodic reminder triggers.

use std::time::Duration;

use mynotes_common::models::ReminderPayload;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, sleep, Instant, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use crate::dispatcher::{DispatchReport, Dispatcher};
use crate::sender::PushError;

/// Waits `delay`, then broadcasts `payload` once.
///
/// Every call schedules its own broadcast; concurrent calls are not coalesced.
pub async fn send_after(
    dispatcher: &Dispatcher,
    delay: Duration,
    payload: &ReminderPayload,
) -> Result<DispatchReport, PushError> {
    if !delay.is_zero() {
        debug!("Delaying broadcast by {:?}", delay);
        sleep(delay).await;
    }
    dispatcher.broadcast(payload).await
}

/// One tick of the periodic reminder. Does nothing when the store is empty.
///
/// Never returns an error: failures are logged so the timer keeps running.
pub async fn run_periodic_tick(
    dispatcher: &Dispatcher,
    payload: &ReminderPayload,
) -> Option<DispatchReport> {
    match dispatcher.store().is_empty().await {
        Ok(true) => {
            debug!("Periodic reminder skipped: no subscriptions");
            return None;
        }
        Ok(false) => {}
        Err(err) => {
            error!("Periodic reminder could not read subscriptions: {}", err);
            return None;
        }
    }

    info!("Sending periodic reminders to all subscribers");
    match dispatcher.broadcast(payload).await {
        Ok(report) => Some(report),
        Err(err) => {
            error!("Periodic reminder failed: {}", err);
            None
        }
    }
}

/// Spawns the periodic reminder for the lifetime of the runtime.
///
/// The first broadcast happens one full `period` after spawning. A zero period
/// is raised to one second.
pub fn spawn_periodic(
    dispatcher: Dispatcher,
    period: Duration,
    payload: ReminderPayload,
) -> JoinHandle<()> {
    let period = if period.is_zero() {
        warn!("Reminder interval of zero raised to 1s");
        Duration::from_secs(1)
    } else {
        period
    };

    tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        info!("Periodic reminder every {:?}", period);
        loop {
            ticker.tick().await;
            run_periodic_tick(&dispatcher, &payload).await;
        }
    })
}
