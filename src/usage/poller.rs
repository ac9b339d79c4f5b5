use std::time::Duration;

use tokio::sync::watch;
use tokio::task::{JoinError, JoinHandle};
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::network::sampler::CounterSampler;
use crate::types::Snapshot;
use crate::usage::tracker::UsageTracker;

/// One tick per second.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Background task that ticks the tracker and publishes each snapshot
/// into a single-slot watch channel.
pub struct Poller<S> {
    shutdown: CancellationToken,
    task: JoinHandle<UsageTracker<S>>,
}

impl<S: CounterSampler> Poller<S> {
    /// Spawn onto the current tokio runtime. `tracker` should already be
    /// initialized; `initial` is what receivers see before the first tick.
    pub fn spawn(tracker: UsageTracker<S>, initial: Snapshot) -> (Self, watch::Receiver<Snapshot>) {
        Self::spawn_with_period(tracker, initial, TICK_PERIOD)
    }

    fn spawn_with_period(
        mut tracker: UsageTracker<S>,
        initial: Snapshot,
        period: Duration,
    ) -> (Self, watch::Receiver<Snapshot>) {
        let (tx, rx) = watch::channel(initial);
        let shutdown = CancellationToken::new();
        let cancelled = shutdown.child_token();

        let task = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            info!("Polling network counters every {:?}", period);

            loop {
                tokio::select! {
                    _ = cancelled.cancelled() => break,
                    _ = interval.tick() => match tracker.tick() {
                        Ok(snapshot) => {
                            tx.send_replace(snapshot);
                        }
                        Err(err) => warn!("Skipping tick: {}", err),
                    },
                }
            }

            debug!("Polling stopped");
            tracker
        });

        (Self { shutdown, task }, rx)
    }

    /// Cancel the loop and hand the tracker back once the task has finished.
    pub async fn stop(self) -> Result<UsageTracker<S>, JoinError> {
        self.shutdown.cancel();
        self.task.await
    }

    /// Stop polling, then persist the final total. Failures are logged and
    /// never propagated so closing always proceeds. Returns whether the
    /// total was written.
    pub async fn stop_and_persist(self) -> bool {
        let tracker = match self.stop().await {
            Ok(tracker) => tracker,
            Err(err) => {
                error!("Polling task ended abnormally, usage not saved: {}", err);
                return false;
            }
        };
        match tracker.shutdown() {
            Ok(()) => true,
            Err(err) => {
                error!(
                    "Failed to save usage data ({:.2} MB): {}",
                    tracker.usage().total_received_mb,
                    err
                );
                false
            }
        }
    }
}
