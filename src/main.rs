//! rwbench
//!
//! Measures read latency of a shared cache while a single writer keeps inserting into it.
//!
//! ```text
//! rwbench --readers 4 --workers 4 --cache sharded
//! RUST_LOG=debug rwbench --read-iters 1000000 --legacy-latency
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::*;
use std::sync::Arc;
use std::time::Duration;

use rwbench::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Backend {
    /// Hash-partitioned shards, each behind its own read-write lock
    Sharded,
    /// One map behind one mutex
    Locked,
    /// DashMap, shard count rounded up to a power of two
    Dash,
}

/// Read latency of a shared cache under concurrent write pressure
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Cache implementation under test
    #[arg(long, value_enum, default_value_t = Backend::Sharded)]
    cache: Backend,

    /// Shard count of the sharded and dash caches
    #[arg(long, default_value_t = 64)]
    shards: usize,

    /// Number of concurrent reader units
    #[arg(long, default_value_t = READERS)]
    readers: usize,

    /// Worker threads the units are scheduled on
    #[arg(long, default_value_t = WORKERS)]
    workers: usize,

    /// Lookups per reader
    #[arg(long, default_value_t = READ_ITERS)]
    read_iters: usize,

    /// Lookups between two reader checkpoints
    #[arg(long, default_value_t = READ_BATCH)]
    read_batch: usize,

    /// Reader suspension per checkpoint, in microseconds
    #[arg(long, default_value_t = READ_THROTTLE.as_micros() as u64)]
    read_throttle_us: u64,

    /// Reads slower than this are counted as timeouts, in microseconds
    #[arg(long, default_value_t = READ_TIMEOUT.as_micros() as u64)]
    read_timeout_us: u64,

    /// Puts performed by the writer
    #[arg(long, default_value_t = WRITE_ITERS)]
    write_iters: usize,

    /// Puts between two writer checkpoints
    #[arg(long, default_value_t = WRITE_BATCH)]
    write_batch: usize,

    /// Writer suspension per checkpoint, in microseconds
    #[arg(long, default_value_t = WRITE_THROTTLE.as_micros() as u64)]
    write_throttle_us: u64,

    /// Report latencies with the historical 10e-6 scaling instead of milliseconds
    #[arg(long)]
    legacy_latency: bool,
}

impl Args {
    ///
    /// Settings of the run, validated together with the cache parameters.
    fn settings(&self) -> Result<Settings, SettingsError> {
        if self.shards == 0 {
            return Err(SettingsError::NotPositive("shards"));
        }

        let settings = Settings {
            read_throttle: Duration::from_micros(self.read_throttle_us),
            write_throttle: Duration::from_micros(self.write_throttle_us),
            read_timeout: Duration::from_micros(self.read_timeout_us),
            readers: self.readers,
            workers: self.workers,
            read_batch: self.read_batch,
            read_iters: self.read_iters,
            write_batch: self.write_batch,
            write_iters: self.write_iters,
            latency_unit: if self.legacy_latency {
                LatencyUnit::Legacy
            } else {
                LatencyUnit::Millis
            },
        };
        settings.validate()?;

        Ok(settings)
    }

    fn cache(&self) -> Arc<dyn SharedCache<u64, u64>> {
        match self.cache {
            Backend::Sharded => Arc::new(ShardedCache::<u64, u64>::with_shards(self.shards)),
            Backend::Locked => Arc::new(LockedCache::<u64, u64>::new()),
            Backend::Dash => Arc::new(DashCache::<u64, u64>::with_shards(self.shards)),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = args.settings().context("refusing to start benchmark")?;
    let harness = Harness::new(settings, args.cache()).context("refusing to start benchmark")?;

    let settings = harness.settings();
    info!(
        "Starting: {:?} cache, 1 writer, {} readers on {} workers",
        args.cache, settings.readers, settings.workers
    );
    let report = harness.run().context("benchmark run failed")?;

    info!(
        "Writer: {} puts, cache holds {} items",
        report.writes,
        harness.cache().len()
    );
    for r in report.readers.iter() {
        info!("Reader {} final: {}", r.reader, r.stats);
    }
    if report.stopped {
        warn!("Run was interrupted before completion");
    }

    Ok(())
}
