/// Benchmark errors
pub mod errors;
/// Orchestration of the writer and reader units
pub mod harness;
/// Reader unit of work
pub mod reader;
/// Run parameters and their defaults
pub mod settings;
/// Checkpoint, suspension and stop policy shared by all units
pub mod throttle;
/// Writer unit of work
pub mod writer;

/// Prelude of the benchmark harness
pub mod prelude {
    pub use super::errors::*;
    pub use super::harness::*;
    pub use super::reader::{Checkpoint, ReaderReport};
    pub use super::settings::*;
    pub use super::throttle::*;
}
