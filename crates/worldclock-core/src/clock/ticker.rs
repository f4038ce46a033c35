use std::time::Duration;

use chrono::{DateTime, Utc};
use log::debug;
use tokio::{
    runtime::Handle,
    sync::mpsc::{self, error::TrySendError},
    task::JoinHandle,
    time::{MissedTickBehavior, interval}
};

/// Period of the refresh tick.
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Spawns a fixed-rate ticker publishing the current instant every `period`.
///
/// The first tick is emitted one full period after spawning. Ticks that find
/// the previous one still unconsumed are dropped, so consumers never see a
/// burst. The task stops once the receiver is dropped.
pub fn spawn_ticker(
    handle: &Handle,
    period: Duration
) -> (JoinHandle<()>, mpsc::Receiver<DateTime<Utc>>) {
    let (sender, receiver) = mpsc::channel(1);

    let task = handle.spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // Consume the immediate first tick.
        ticker.tick().await;

        loop {
            ticker.tick().await;

            match sender.try_send(Utc::now()) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => {
                    debug!("Previous tick still pending, skipping");
                }
                Err(TrySendError::Closed(_)) => {
                    debug!("Tick receiver dropped, stopping ticker");
                    break;
                }
            }
        }
    });

    (task, receiver)
}
