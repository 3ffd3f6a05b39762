use rwbench::bench::{reader, writer};
use rwbench::prelude::*;

use std::sync::Arc;
use std::time::Duration;

fn small(readers: usize) -> Settings {
    Settings {
        readers,
        workers: 4,
        read_batch: 100,
        read_iters: 1_000,
        write_batch: 100,
        write_iters: 1_000,
        ..Settings::default()
    }
}

#[test]
fn harness_small_run_terminates() {
    for cache in vec![
        Arc::new(ShardedCache::<u64, u64>::new()) as Arc<dyn SharedCache<u64, u64>>,
        Arc::new(LockedCache::<u64, u64>::new()) as Arc<dyn SharedCache<u64, u64>>,
        Arc::new(DashCache::<u64, u64>::new()) as Arc<dyn SharedCache<u64, u64>>,
    ] {
        let harness = Harness::new(small(2), cache).unwrap();
        let report = harness.run().unwrap();

        assert_eq!(report.writes, 1_000);
        assert_eq!(report.readers.len(), 2);
        assert!(report.readers.iter().all(|r| r.reads() == 1_000));
        assert!(report.readers.iter().all(|r| !r.stopped));
    }
}

#[test]
fn readers_only_observe_written_values() {
    let settings = Settings {
        read_throttle: Duration::ZERO,
        write_throttle: Duration::ZERO,
        read_batch: 10,
        read_iters: 2_000,
        write_batch: 10,
        write_iters: 1_000,
        ..small(4)
    };

    for cache in vec![
        Arc::new(ShardedCache::<u64, u64>::with_shards(8)) as Arc<dyn SharedCache<u64, u64>>,
        Arc::new(LockedCache::<u64, u64>::new()) as Arc<dyn SharedCache<u64, u64>>,
        Arc::new(DashCache::<u64, u64>::with_shards(8)) as Arc<dyn SharedCache<u64, u64>>,
    ] {
        let harness = Harness::new(settings.clone(), cache).unwrap();
        let report = harness.run().unwrap();

        for r in report.readers.iter() {
            assert_eq!(r.checkpoints.len(), 200);

            let mut max = 0_f64;
            for c in r.checkpoints.iter() {
                if let Some(v) = c.value {
                    assert_eq!(v, c.key * 100);
                }
                if c.key >= 1_000 {
                    assert_eq!(c.value, None);
                }

                assert!(c.stats.max >= max);
                max = c.stats.max;
                assert_eq!(c.stats.avg, c.stats.total / c.stats.count as f64);
            }
        }
    }
}

#[test]
fn more_units_than_workers() {
    let settings = Settings {
        workers: 1,
        ..small(4)
    };
    let cache = Arc::new(ShardedCache::<u64, u64>::with_shards(8));
    let harness = Harness::new(settings, cache).unwrap();

    let report = harness.run().unwrap();

    assert_eq!(report.writes, 1_000);
    assert_eq!(report.readers.len(), 4);
    assert!(report.readers.iter().all(|r| r.reads() == 1_000));
}

#[test]
fn stopped_run_reports_partial_work() {
    let settings = Settings {
        read_iters: 1_000_000,
        write_iters: 1_000_000,
        ..small(2)
    };
    let harness = Harness::new(settings, Arc::new(ShardedCache::<u64, u64>::new())).unwrap();
    harness.stop_signal().stop();

    let report = harness.run().unwrap();

    assert!(report.stopped);
    assert!(report.writes < 1_000_000);
    assert!(report.readers.iter().all(|r| r.stopped && r.reads() < 1_000_000));
}

#[tokio::test]
async fn written_keys_visible_unwritten_absent() {
    let cache = Arc::new(ShardedCache::<u64, u64>::new());
    let stop = StopSignal::new();

    let puts = writer::write(
        cache.clone(),
        5,
        Throttle::new(1, Duration::ZERO),
        stop.clone(),
    )
    .await;
    assert_eq!(puts, 5);

    // Writer done, reader not started yet.
    assert_eq!(cache.get(&3), Some(300));
    assert_eq!(cache.get(&7), None);

    let report = reader::read(
        cache.clone(),
        1,
        10,
        Throttle::new(1, Duration::ZERO),
        ReaderStats::new(READ_TIMEOUT, LatencyUnit::Millis),
        stop,
    )
    .await;
    assert_eq!(report.reads(), 10);

    // Reads never mutate.
    for _ in 0..100 {
        assert_eq!(cache.get(&3), Some(300));
    }
    assert_eq!(cache.len(), 5);
}

#[test]
fn racing_readers_only_see_final_values() {
    const WRITES: u64 = 10_000;
    const READS: u64 = 20_000;

    let cache = ShardedCache::<u64, u64>::with_shards(16);

    crossbeam_utils::thread::scope(|s| {
        s.spawn(|_| {
            for k in 0..WRITES {
                cache.put(k, k * 100);
            }
        });

        for _ in 0..4 {
            s.spawn(|_| {
                for k in 0..READS {
                    if let Some(v) = cache.get(&k) {
                        assert_eq!(v, k * 100);
                    }
                    if k >= WRITES {
                        assert_eq!(cache.get(&k), None);
                    }
                }
            });
        }
    })
    .unwrap();

    assert_eq!(cache.len(), WRITES as usize);
    assert!((0..WRITES).all(|k| cache.get(&k) == Some(k * 100)));
}
