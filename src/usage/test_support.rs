use std::collections::VecDeque;

use crate::error::OsQueryError;
use crate::network::sampler::CounterSampler;
use crate::types::ByteCounterSample;

/// Replays a fixed script of `(sent, received)` counters; `None` entries
/// fail like an OS query error. Once the script is exhausted the last
/// counters repeat.
pub struct ScriptedSampler {
    script: VecDeque<Option<(u64, u64)>>,
    last: Option<(u64, u64)>,
}

impl ScriptedSampler {
    pub fn new<I>(script: I) -> Self
    where
        I: IntoIterator<Item = Option<(u64, u64)>>,
    {
        Self {
            script: script.into_iter().collect(),
            last: None,
        }
    }
}

impl CounterSampler for ScriptedSampler {
    fn sample(&mut self) -> Result<ByteCounterSample, OsQueryError> {
        let next = match self.script.pop_front() {
            Some(step) => step,
            None => self.last,
        };
        let (sent, recv) = next.ok_or(OsQueryError::NoInterfaces)?;
        self.last = Some((sent, recv));
        Ok(ByteCounterSample::new(sent, recv))
    }
}

/// Counters that grow by a fixed step on every sample.
pub struct SteadySampler {
    step: u64,
    sent: u64,
    recv: u64,
}

impl SteadySampler {
    pub fn new(step: u64) -> Self {
        Self { step, sent: 0, recv: 0 }
    }
}

impl CounterSampler for SteadySampler {
    fn sample(&mut self) -> Result<ByteCounterSample, OsQueryError> {
        let sample = ByteCounterSample::new(self.sent, self.recv);
        self.sent += self.step;
        self.recv += self.step * 2;
        Ok(sample)
    }
}

/// Never manages to read counters.
pub struct FailingSampler;

impl CounterSampler for FailingSampler {
    fn sample(&mut self) -> Result<ByteCounterSample, OsQueryError> {
        Err(OsQueryError::NoInterfaces)
    }
}
