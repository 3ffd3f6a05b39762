use super::shared::SharedCache;

use dashmap::DashMap;
use std::fmt;
use std::hash::Hash;

///
/// Shared cache over a [DashMap].
///
/// DashMap shards internally as well; the shard amount is always a power of two greater
/// than one, so requested shard counts are rounded up to the next one that qualifies.
pub struct DashCache<K, V>
where
    K: Eq + Hash,
{
    latch: DashMap<K, V>,
}

impl<K, V> DashCache<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            latch: DashMap::new(),
        }
    }

    pub fn with_shards(shards: usize) -> Self {
        Self {
            latch: DashMap::with_shard_amount(shards.max(2).next_power_of_two()),
        }
    }

    pub fn shards(&self) -> usize {
        self.latch.shards().len()
    }
}

impl<K, V> Default for DashCache<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> SharedCache<K, V> for DashCache<K, V>
where
    K: Eq + Hash + Send + Sync,
    V: Clone + Send + Sync,
{
    #[inline]
    fn put(&self, key: K, value: V) {
        self.latch.insert(key, value);
    }

    #[inline]
    fn get(&self, key: &K) -> Option<V> {
        self.latch.get(key).map(|v| v.value().clone())
    }

    fn len(&self) -> usize {
        self.latch.len()
    }
}

impl<K, V> fmt::Debug for DashCache<K, V>
where
    K: Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DashCache")
            .field("shards", &self.latch.shards().len())
            .field("items", &self.latch.len())
            .finish()
    }
}
