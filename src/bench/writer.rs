use super::throttle::{StopSignal, Throttle};
use crate::table::prelude::*;

use log::*;
use std::sync::Arc;

///
/// Writer unit of work: puts `key * 100` for every key in `0..write_iters`, in order.
///
/// Returns the number of puts performed, which is `write_iters` unless the run was stopped.
pub async fn write<C>(
    cache: Arc<C>,
    write_iters: usize,
    throttle: Throttle,
    stop: StopSignal,
) -> usize
where
    C: SharedCache<u64, u64> + ?Sized,
{
    let mut puts = 0_usize;

    for i in 0..write_iters {
        let key = i as u64;
        cache.put(key, key * 100);
        puts += 1;

        if throttle.is_checkpoint(i) {
            info!("Writer {}", i);
            if stop.is_stopped() {
                warn!("Writer stopped after {} puts", puts);
                break;
            }
            throttle.pause().await;
        }
    }

    info!("Writer done: {} puts, cache holds {} items", puts, cache.len());
    puts
}
