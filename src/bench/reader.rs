use super::throttle::{StopSignal, Throttle};
use crate::stats::{ReaderStats, StatsSnapshot};
use crate::table::prelude::*;

use log::*;
use std::sync::Arc;
use std::time::Instant;

///
/// What a reader saw at one of its checkpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Checkpoint {
    pub key: u64,
    pub value: Option<u64>,
    pub stats: StatsSnapshot,
}

///
/// Outcome of a finished reader unit.
#[derive(Clone, Debug, PartialEq)]
pub struct ReaderReport {
    /// Reader identifier, starting from 1.
    pub reader: usize,
    pub stats: StatsSnapshot,
    /// One entry per checkpoint, in iteration order.
    pub checkpoints: Vec<Checkpoint>,
    pub stopped: bool,
}

impl ReaderReport {
    pub fn reads(&self) -> u64 {
        self.stats.count
    }
}

///
/// Reader unit of work: looks up every key in `0..read_iters` in increasing order and times
/// each lookup into `stats`.
///
/// Only the `get` call itself is inside the timed region.
pub async fn read<C>(
    cache: Arc<C>,
    reader: usize,
    read_iters: usize,
    throttle: Throttle,
    mut stats: ReaderStats,
    stop: StopSignal,
) -> ReaderReport
where
    C: SharedCache<u64, u64> + ?Sized,
{
    let mut stopped = false;
    let mut checkpoints = Vec::with_capacity(read_iters / throttle.batch() + 1);

    for i in 0..read_iters {
        let start = Instant::now();
        let v = cache.get(&(i as u64));
        stats.record(start.elapsed());

        if throttle.is_checkpoint(i) {
            let checkpoint = Checkpoint {
                key: i as u64,
                value: v,
                stats: stats.snapshot(),
            };
            info!("Reader {}: Got {}:{:?} {}", reader, i, v, checkpoint.stats);
            checkpoints.push(checkpoint);

            if stop.is_stopped() {
                warn!("Reader {} stopped after {} reads", reader, stats.count());
                stopped = true;
                break;
            }
            throttle.pause().await;
        }
    }

    let report = ReaderReport {
        reader,
        stats: stats.snapshot(),
        checkpoints,
        stopped,
    };
    debug!("Reader {} done: {}", reader, report.stats);

    report
}
