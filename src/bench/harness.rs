use super::errors::BenchResult;
use super::reader::{self, ReaderReport};
use super::settings::Settings;
use super::throttle::{StopSignal, Throttle};
use super::writer;
use crate::stats::ReaderStats;
use crate::table::prelude::*;

use log::*;
use std::sync::Arc;
use tokio::task::{JoinError, JoinHandle};

///
/// Outcome of a whole run.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchReport {
    /// Puts performed by the writer.
    pub writes: usize,
    /// One report per reader, ordered by reader identifier.
    pub readers: Vec<ReaderReport>,
    /// Whether the run was interrupted through its [StopSignal].
    pub stopped: bool,
}

///
/// Runs one writer and `settings.readers` readers concurrently against a shared cache.
///
/// Units are spawned on a pool of `settings.workers` worker threads. With the defaults that is
/// five units on four workers, so at least two of them always take turns on one worker,
/// switching only at their throttle checkpoints.
pub struct Harness<C>
where
    C: SharedCache<u64, u64> + ?Sized + 'static,
{
    settings: Settings,
    cache: Arc<C>,
    stop: StopSignal,
}

impl<C> Harness<C>
where
    C: SharedCache<u64, u64> + ?Sized + 'static,
{
    ///
    /// Settings are validated here, so an invalid run never launches a single unit.
    pub fn new(settings: Settings, cache: Arc<C>) -> BenchResult<Self> {
        settings.validate()?;

        Ok(Self {
            settings,
            cache,
            stop: StopSignal::new(),
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn cache(&self) -> &Arc<C> {
        &self.cache
    }

    /// Handle that interrupts the run at every unit's next checkpoint.
    pub fn stop_signal(&self) -> StopSignal {
        self.stop.clone()
    }

    ///
    /// Spawn every unit on the current runtime and wait for all of them.
    ///
    /// A unit that panics is fatal: the remaining units are asked to stop, every unit is
    /// awaited, and the first failure is returned.
    pub async fn launch(&self) -> BenchResult<BenchReport> {
        let s = &self.settings;

        let writer: JoinHandle<usize> = tokio::spawn(writer::write(
            self.cache.clone(),
            s.write_iters,
            Throttle::new(s.write_batch, s.write_throttle),
            self.stop.clone(),
        ));

        let readers: Vec<JoinHandle<ReaderReport>> = (1..=s.readers)
            .map(|r| {
                tokio::spawn(reader::read(
                    self.cache.clone(),
                    r,
                    s.read_iters,
                    Throttle::new(s.read_batch, s.read_throttle),
                    ReaderStats::new(s.read_timeout, s.latency_unit),
                    self.stop.clone(),
                ))
            })
            .collect();

        debug!("Launched 1 writer and {} readers", readers.len());

        let mut failure = None;

        let writes = self.join(writer, &mut failure).await.unwrap_or(0);

        let mut reports = Vec::with_capacity(readers.len());
        for t in readers {
            if let Some(report) = self.join(t, &mut failure).await {
                reports.push(report);
            }
        }

        if let Some(e) = failure {
            return Err(e.into());
        }

        Ok(BenchReport {
            writes,
            readers: reports,
            stopped: self.stop.is_stopped(),
        })
    }

    ///
    /// Build the worker pool, run to completion and tear the pool down.
    ///
    /// Ctrl-C raises the stop signal while the run is in progress.
    pub fn run(&self) -> BenchResult<BenchReport> {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.settings.workers)
            .thread_name("rwbench-worker")
            .enable_all()
            .build()?;

        rt.block_on(async {
            let stop = self.stop_signal();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    warn!("Interrupted, stopping units at their next checkpoint");
                    stop.stop();
                }
            });

            self.launch().await
        })
    }

    // Every handle is awaited even after a failure, so no unit outlives the run. Only the
    // first failure is kept.
    async fn join<T>(&self, handle: JoinHandle<T>, failure: &mut Option<JoinError>) -> Option<T> {
        match handle.await {
            Ok(v) => Some(v),
            Err(e) => {
                error!("Unit of work failed: {}", e);
                self.stop.stop();
                failure.get_or_insert(e);
                None
            }
        }
    }
}
