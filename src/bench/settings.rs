use super::errors::SettingsError;
use crate::stats::LatencyUnit;

use std::time::Duration;

pub const READ_THROTTLE: Duration = Duration::from_micros(1);
pub const WRITE_THROTTLE: Duration = Duration::from_micros(1);
pub const READ_TIMEOUT: Duration = Duration::from_millis(1);
pub const READERS: usize = 4;
pub const WORKERS: usize = 4;
pub const READ_BATCH: usize = 1_000_000;
pub const READ_ITERS: usize = 100_000_000;
pub const WRITE_BATCH: usize = 1000;
pub const WRITE_ITERS: usize = 10_000_000;

///
/// Parameters of a single benchmark run.
///
/// Defaults are the published constants of this module. Runs only start with settings that
/// passed [Settings::validate].
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub read_throttle: Duration,
    pub write_throttle: Duration,
    pub read_timeout: Duration,
    pub readers: usize,
    /// Worker slots of the pool the units are scheduled on.
    pub workers: usize,
    pub read_batch: usize,
    pub read_iters: usize,
    pub write_batch: usize,
    pub write_iters: usize,
    pub latency_unit: LatencyUnit,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            read_throttle: READ_THROTTLE,
            write_throttle: WRITE_THROTTLE,
            read_timeout: READ_TIMEOUT,
            readers: READERS,
            workers: WORKERS,
            read_batch: READ_BATCH,
            read_iters: READ_ITERS,
            write_batch: WRITE_BATCH,
            write_iters: WRITE_ITERS,
            latency_unit: LatencyUnit::default(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        let counts = [
            ("readers", self.readers),
            ("workers", self.workers),
            ("read_batch", self.read_batch),
            ("read_iters", self.read_iters),
            ("write_batch", self.write_batch),
            ("write_iters", self.write_iters),
        ];

        match counts.iter().find(|(_, v)| *v == 0) {
            Some((name, _)) => Err(SettingsError::NotPositive(*name)),
            None => Ok(()),
        }
    }
}
