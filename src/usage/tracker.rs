use tracing::{debug, info, warn};

use crate::error::{StoreError, TrackerError};
use crate::network::sampler::CounterSampler;
use crate::types::{ByteCounterSample, Snapshot, UsageState};
use crate::usage::store::UsageStore;

enum TrackerState {
    Uninitialized,
    /// `previous` is `None` only if the baseline sample could not be taken.
    Running { previous: Option<ByteCounterSample> },
}

/// Turns successive counter samples into rates and a persisted running total.
pub struct UsageTracker<S> {
    sampler: S,
    store: UsageStore,
    usage: UsageState,
    state: TrackerState,
    last: Snapshot,
}

impl<S: CounterSampler> UsageTracker<S> {
    pub fn new(sampler: S, store: UsageStore) -> Self {
        Self {
            sampler,
            store,
            usage: UsageState::default(),
            state: TrackerState::Uninitialized,
            last: Snapshot::default(),
        }
    }

    /// Restore the saved total and take the baseline sample.
    ///
    /// Never fails: a missing or unreadable file starts from zero and a failed
    /// baseline is retaken on the next tick. Calling it again is a no-op.
    pub fn initialize(&mut self) -> Snapshot {
        if self.is_running() {
            debug!("Usage tracker already initialized");
            return self.last.clone();
        }

        let total = match self.store.load() {
            Ok(Some(total)) => {
                info!("Restored total downloaded: {:.2} MB", total);
                total
            }
            Ok(None) => {
                info!(
                    "No saved data found at {}, starting from zero",
                    self.store.path().display()
                );
                0.0
            }
            Err(err) => {
                warn!("Ignoring saved data: {}", err);
                0.0
            }
        };
        self.usage = UsageState::new(total);

        let previous = match self.sampler.sample() {
            Ok(sample) => Some(sample),
            Err(err) => {
                warn!("Baseline sample failed, retrying on next tick: {}", err);
                None
            }
        };
        self.state = TrackerState::Running { previous };
        self.last = Snapshot::idle(self.usage, previous.map(|s| s.taken_at));
        self.last.clone()
    }

    /// Sample once and derive the snapshot for the last interval.
    ///
    /// On error nothing changes: the baseline, the total and the last
    /// snapshot stay as they were.
    pub fn tick(&mut self) -> Result<Snapshot, TrackerError> {
        let previous = match &mut self.state {
            TrackerState::Uninitialized => return Err(TrackerError::NotInitialized),
            TrackerState::Running { previous } => previous,
        };

        let current = self.sampler.sample()?;
        let snapshot = match previous.replace(current) {
            Some(prev) => {
                let delta = current.delta_since(&prev);
                self.usage.add_received(delta.received);
                debug!(sent = delta.sent, received = delta.received, "tick");
                Snapshot::from_delta(delta, self.usage, current.taken_at)
            }
            None => {
                info!("Baseline sample taken");
                Snapshot::idle(self.usage, Some(current.taken_at))
            }
        };

        self.last = snapshot.clone();
        Ok(snapshot)
    }

    /// Persist the current total. Safe to call any number of times; before
    /// `initialize` there is nothing to save and the file is left alone.
    pub fn shutdown(&self) -> Result<(), StoreError> {
        if !self.is_running() {
            debug!("Usage tracker never initialized, nothing to persist");
            return Ok(());
        }
        self.store.save(self.usage.total_received_mb)?;
        info!(
            "Saved total downloaded: {:.2} MB to {}",
            self.usage.total_received_mb,
            self.store.path().display()
        );
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, TrackerState::Running { .. })
    }

    pub fn usage(&self) -> UsageState {
        self.usage
    }
}
