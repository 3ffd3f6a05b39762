use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::Duration;

///
/// Yield policy of a unit of work: every `batch` operations it reaches a checkpoint, reports,
/// and suspends for `pause`.
///
/// Checkpoints are the only points where a unit gives its worker slot back to the scheduler.
/// They are a scheduling hint; correctness never depends on them.
#[derive(Clone, Copy, Debug)]
pub struct Throttle {
    batch: usize,
    pause: Duration,
}

impl Throttle {
    ///
    /// `batch` of zero is treated as one.
    pub fn new(batch: usize, pause: Duration) -> Self {
        Self {
            batch: batch.max(1),
            pause,
        }
    }

    pub fn batch(&self) -> usize {
        self.batch
    }

    #[inline]
    pub fn is_checkpoint(&self, i: usize) -> bool {
        i % self.batch == 0
    }

    /// Suspend the calling task. A zero pause still yields to the scheduler once.
    pub async fn pause(&self) {
        if self.pause.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(self.pause).await;
        }
    }
}

///
/// Shared flag asking every unit of a run to stop at its next checkpoint.
#[derive(Clone, Debug, Default)]
pub struct StopSignal {
    stopped: Arc<AtomicBool>,
}

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkpoints_every_batch() {
        let throttle = Throttle::new(100, Duration::ZERO);
        let checkpoints: Vec<usize> = (0..1_000).filter(|i| throttle.is_checkpoint(*i)).collect();

        assert_eq!(checkpoints.len(), 10);
        assert_eq!(checkpoints[0], 0);
        assert_eq!(checkpoints[9], 900);
    }

    #[test]
    fn zero_batch_checkpoints_everything() {
        let throttle = Throttle::new(0, Duration::ZERO);
        assert_eq!(throttle.batch(), 1);
        assert!((0..10).all(|i| throttle.is_checkpoint(i)));
    }

    #[test]
    fn stop_signal_is_shared_between_clones() {
        let signal = StopSignal::new();
        let unit = signal.clone();
        assert!(!unit.is_stopped());

        signal.stop();
        assert!(unit.is_stopped());
    }

    #[tokio::test]
    async fn pause_returns() {
        Throttle::new(1, Duration::ZERO).pause().await;
        Throttle::new(1, Duration::from_micros(1)).pause().await;
    }
}
