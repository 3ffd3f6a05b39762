use std::fmt;
use std::time::Duration;

///
/// Unit latency samples are reported in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LatencyUnit {
    /// Nanosecond delta converted to milliseconds.
    Millis,
    /// Nanosecond delta multiplied by `10e-6`, which is what the historical output of this
    /// benchmark printed as milliseconds. Values are ten times the real millisecond latency.
    Legacy,
}

impl Default for LatencyUnit {
    fn default() -> Self {
        LatencyUnit::Millis
    }
}

impl LatencyUnit {
    #[inline]
    pub fn scale(self, elapsed: Duration) -> f64 {
        let nanos = elapsed.as_nanos() as f64;
        match self {
            LatencyUnit::Millis => nanos / 1_000_000_f64,
            LatencyUnit::Legacy => nanos * 10e-6,
        }
    }
}

///
/// Latency statistics of a single reader.
///
/// Owned exclusively by the reader that records into it, so it needs no synchronization.
/// Sums are kept in exact nanoseconds and only converted at [ReaderStats::snapshot].
#[derive(Clone, Debug)]
pub struct ReaderStats {
    count: u64,
    total: Duration,
    max: Duration,
    timeouts: u64,
    timeout: Duration,
    unit: LatencyUnit,
}

impl ReaderStats {
    ///
    /// Empty statistics. Reads slower than `timeout` are counted as timeouts.
    pub fn new(timeout: Duration, unit: LatencyUnit) -> Self {
        Self {
            count: 0,
            total: Duration::ZERO,
            max: Duration::ZERO,
            timeouts: 0,
            timeout,
            unit,
        }
    }

    #[inline]
    pub fn record(&mut self, elapsed: Duration) {
        self.count += 1;
        self.total += elapsed;
        if elapsed > self.max {
            self.max = elapsed;
        }
        if elapsed > self.timeout {
            self.timeouts += 1;
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn max(&self) -> Duration {
        self.max
    }

    pub fn timeouts(&self) -> u64 {
        self.timeouts
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        let total = self.unit.scale(self.total);
        let avg = if self.count == 0 {
            0_f64
        } else {
            total / self.count as f64
        };

        StatsSnapshot {
            count: self.count,
            total,
            avg,
            max: self.unit.scale(self.max),
            timeouts: self.timeouts,
        }
    }
}

///
/// Point-in-time view of [ReaderStats], latencies already in the reporting unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatsSnapshot {
    pub count: u64,
    pub total: f64,
    pub avg: f64,
    pub max: f64,
    pub timeouts: u64,
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Count: {} Avg:{:.6}ms Max:{:.6}ms Timeouts: {}",
            self.count, self.avg, self.max, self.timeouts
        )
    }
}
