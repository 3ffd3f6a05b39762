/// Shared cache interface used by writers and readers
pub mod shared;
/// Cache sharded over independently locked partitions
pub mod sharded;
/// Cache behind a single lock
pub mod locked;
/// Cache over a DashMap
pub mod dash;

/// Prelude for shared cache implementations
pub mod prelude {
    pub use super::dash::*;
    pub use super::locked::*;
    pub use super::shared::*;
    pub use super::sharded::*;
}
