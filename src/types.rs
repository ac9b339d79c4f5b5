use chrono::{DateTime, Local};

use crate::utils::{bytes_to_kbps, bytes_to_mb, format_speed, format_total};

// ─── Counter sample ──────────────────────────────────────────────────────────

/// Cumulative bytes sent/received since boot, summed over all interfaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ByteCounterSample {
    pub bytes_sent: u64,
    pub bytes_received: u64,
    pub taken_at: DateTime<Local>,
}

impl ByteCounterSample {
    pub fn new(bytes_sent: u64, bytes_received: u64) -> Self {
        Self {
            bytes_sent,
            bytes_received,
            taken_at: Local::now(),
        }
    }

    /// Bytes moved since `previous`. A counter that went backwards
    /// (reboot, interface reset, wraparound) yields zero for that direction.
    pub fn delta_since(&self, previous: &Self) -> CounterDelta {
        CounterDelta {
            sent: self.bytes_sent.saturating_sub(previous.bytes_sent),
            received: self.bytes_received.saturating_sub(previous.bytes_received),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CounterDelta {
    pub sent: u64,
    pub received: u64,
}

// ─── Durable usage ───────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UsageState {
    pub total_received_mb: f64,
}

impl UsageState {
    pub fn new(total_received_mb: f64) -> Self {
        Self { total_received_mb }
    }

    pub fn add_received(&mut self, bytes: u64) {
        self.total_received_mb += bytes_to_mb(bytes);
    }
}

// ─── Snapshot ────────────────────────────────────────────────────────────────

/// Immutable per-tick view handed from the poller to the UI.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    pub upload_rate_kbps: f64,
    pub download_rate_kbps: f64,
    pub total_received_mb: f64,
    /// When the underlying sample was taken. `None` until the first sample.
    pub taken_at: Option<DateTime<Local>>,
}

impl Snapshot {
    /// Zero rates with a known total, shown before any traffic is measured.
    pub fn idle(usage: UsageState, taken_at: Option<DateTime<Local>>) -> Self {
        Self {
            upload_rate_kbps: 0.0,
            download_rate_kbps: 0.0,
            total_received_mb: usage.total_received_mb,
            taken_at,
        }
    }

    pub fn from_delta(delta: CounterDelta, usage: UsageState, taken_at: DateTime<Local>) -> Self {
        Self {
            upload_rate_kbps: bytes_to_kbps(delta.sent),
            download_rate_kbps: bytes_to_kbps(delta.received),
            total_received_mb: usage.total_received_mb,
            taken_at: Some(taken_at),
        }
    }

    pub fn upload_label(&self) -> String {
        format_speed(self.upload_rate_kbps, "Upload")
    }

    pub fn download_label(&self) -> String {
        format_speed(self.download_rate_kbps, "Download")
    }

    pub fn total_label(&self) -> String {
        format_total(self.total_received_mb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(sent: u64, received: u64) -> ByteCounterSample {
        ByteCounterSample::new(sent, received)
    }

    #[test]
    fn delta_is_difference_when_counters_grow() {
        for (a, b) in [(0, 0), (0, 1), (1000, 1800), (7, u64::MAX)] {
            let delta = sample(b, b).delta_since(&sample(a, a));
            assert_eq!(delta.sent, b - a);
            assert_eq!(delta.received, b - a);
        }
    }

    #[test]
    fn delta_clamps_to_zero_when_counters_go_backwards() {
        let delta = sample(10, 5_000).delta_since(&sample(9_000, 200));
        assert_eq!(delta, CounterDelta { sent: 0, received: 4_800 });

        let delta = sample(0, 0).delta_since(&sample(u64::MAX, u64::MAX));
        assert_eq!(delta, CounterDelta::default());
    }

    #[test]
    fn usage_accumulates_megabytes() {
        let mut usage = UsageState::new(1.5);
        usage.add_received(1024 * 1024);
        usage.add_received(512 * 1024);
        assert_eq!(usage.total_received_mb, 3.0);
    }

    #[test]
    fn idle_snapshot_labels() {
        let snapshot = Snapshot::idle(UsageState::new(12.346), None);
        assert_eq!(snapshot.upload_label(), "Upload Speed: 0.00 Kbps");
        assert_eq!(snapshot.download_label(), "Download Speed: 0.00 Kbps");
        assert_eq!(snapshot.total_label(), "Total Downloaded: 12.35 MB");
    }
}
