//!
//! Read latency under write pressure.
//!
//! One writer fills a shared cache with sequential keys while several readers look up the same
//! key space, each timing its own lookups. Units of work share a small worker pool and only
//! yield at their throttle checkpoints.
//!
//! ```no_run
//! use rwbench::prelude::*;
//! use std::sync::Arc;
//!
//! let cache = Arc::new(ShardedCache::<u64, u64>::new());
//! let harness = Harness::new(Settings::default(), cache).unwrap();
//! let report = harness.run().unwrap();
//!
//! for r in report.readers.iter() {
//!     println!("Reader {}: {}", r.reader, r.stats);
//! }
//! ```

/// Benchmark harness, writer and reader units
pub mod bench;
/// Latency statistics
pub mod stats;
/// Shared cache implementations
pub mod table;

/// Prelude of rwbench
pub mod prelude {
    pub use crate::bench::prelude::*;
    pub use crate::stats::*;
    pub use crate::table::prelude::*;
}
