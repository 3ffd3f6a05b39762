/// Per reader latency accumulation
pub mod latency;

pub use latency::*;
