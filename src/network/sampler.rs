use sysinfo::Networks;

use crate::error::OsQueryError;
use crate::types::ByteCounterSample;

/// Source of cumulative host network counters.
pub trait CounterSampler: Send + 'static {
    fn sample(&mut self) -> Result<ByteCounterSample, OsQueryError>;
}

/// Reads counters from the OS through `sysinfo`, aggregated across all interfaces.
pub struct SysinfoSampler {
    networks: Networks,
}

impl SysinfoSampler {
    pub fn new() -> Self {
        Self {
            networks: Networks::new_with_refreshed_list(),
        }
    }
}

impl CounterSampler for SysinfoSampler {
    fn sample(&mut self) -> Result<ByteCounterSample, OsQueryError> {
        // Re-list so interfaces added after startup are included.
        self.networks.refresh_list();
        aggregate(
            self.networks
                .iter()
                .map(|(_, data)| (data.total_transmitted(), data.total_received())),
        )
    }
}

/// Sum per-interface `(sent, received)` totals into one sample.
fn aggregate<I>(counters: I) -> Result<ByteCounterSample, OsQueryError>
where
    I: IntoIterator<Item = (u64, u64)>,
{
    let mut total_sent: u64 = 0;
    let mut total_recv: u64 = 0;
    let mut interfaces = 0usize;

    for (sent, recv) in counters {
        total_sent = total_sent
            .checked_add(sent)
            .ok_or(OsQueryError::CounterOverflow { direction: "sent" })?;
        total_recv = total_recv
            .checked_add(recv)
            .ok_or(OsQueryError::CounterOverflow { direction: "received" })?;
        interfaces += 1;
    }

    if interfaces == 0 {
        return Err(OsQueryError::NoInterfaces);
    }
    Ok(ByteCounterSample::new(total_sent, total_recv))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregate_sums_all_interfaces() {
        let sample = aggregate([(100, 2_000), (0, 0), (23, 500)]).unwrap();
        assert_eq!(sample.bytes_sent, 123);
        assert_eq!(sample.bytes_received, 2_500);
    }

    #[test]
    fn interface_that_appears_later_is_counted() {
        let before = aggregate([(1_000, 5_000), (10, 10)]).unwrap();
        let after = aggregate([(1_100, 5_400), (10, 10), (352, 2_048)]).unwrap();

        let delta = after.delta_since(&before);
        assert_eq!(delta.sent, 100 + 352);
        assert_eq!(delta.received, 400 + 2_048);
    }

    #[test]
    fn interface_that_vanishes_clamps_for_one_tick() {
        let before = aggregate([(1_000, 5_000), (800, 900)]).unwrap();
        let gone = aggregate([(1_200, 5_100)]).unwrap();
        let later = aggregate([(1_300, 5_300)]).unwrap();

        assert_eq!(gone.delta_since(&before).sent, 0);
        assert_eq!(gone.delta_since(&before).received, 0);
        let delta = later.delta_since(&gone);
        assert_eq!((delta.sent, delta.received), (100, 200));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn sample_picks_up_interfaces_missing_from_the_initial_list() {
        let mut sampler = SysinfoSampler {
            networks: Networks::new(),
        };

        assert!(sampler.sample().is_ok());
        assert_eq!(
            sampler.networks.iter().count(),
            Networks::new_with_refreshed_list().iter().count()
        );
    }

    #[test]
    fn aggregate_without_interfaces_fails() {
        let err = aggregate(std::iter::empty()).unwrap_err();
        assert!(matches!(err, OsQueryError::NoInterfaces));
    }

    #[test]
    fn aggregate_reports_overflow() {
        let err = aggregate([(1, 0), (u64::MAX, 0)]).unwrap_err();
        assert!(matches!(err, OsQueryError::CounterOverflow { direction: "sent" }));

        let err = aggregate([(0, u64::MAX), (0, 1)]).unwrap_err();
        assert!(matches!(err, OsQueryError::CounterOverflow { direction: "received" }));
    }
}
