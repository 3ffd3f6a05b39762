use super::shared::SharedCache;

use parking_lot::RwLock;
use std::collections::hash_map::RandomState;
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};

const DEFAULT_SHARDS: usize = 64;

///
/// Shared cache split into a fixed number of independently locked shards.
///
/// Every key is hashed to exactly one shard. Readers only ever take the shard's read lock, so
/// lookups on distinct shards never contend with each other and only contend with the writer
/// while it holds the one shard it is inserting into.
pub struct ShardedCache<K, V, S = RandomState>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    latch: Vec<RwLock<HashMap<K, V>>>,
    hash_builder: S,
}

impl<K, V> ShardedCache<K, V, RandomState>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self::with_shards(DEFAULT_SHARDS)
    }

    pub fn with_shards(shards: usize) -> Self {
        Self::with_shards_and_hasher(shards, RandomState::new())
    }
}

impl<K, V> Default for ShardedCache<K, V, RandomState>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> ShardedCache<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    ///
    /// Build a cache with `shards` shards, at least one.
    pub fn with_shards_and_hasher(shards: usize, hasher: S) -> ShardedCache<K, V, S> {
        let shards = shards.max(1);

        Self {
            latch: (0..shards).map(|_| RwLock::new(HashMap::new())).collect(),
            hash_builder: hasher,
        }
    }

    pub fn shards(&self) -> usize {
        self.latch.len()
    }

    fn hash(&self, key: &K) -> usize {
        let mut hasher = self.hash_builder.build_hasher();
        key.hash(&mut hasher);
        hasher.finish() as usize % self.latch.len()
    }

    #[inline]
    fn seek_shard(&self, key: &K) -> &RwLock<HashMap<K, V>> {
        &self.latch[self.hash(key)]
    }
}

impl<K, V, S> SharedCache<K, V> for ShardedCache<K, V, S>
where
    K: Eq + Hash + Send + Sync,
    V: Clone + Send + Sync,
    S: BuildHasher + Send + Sync,
{
    #[inline]
    fn put(&self, key: K, value: V) {
        self.seek_shard(&key).write().insert(key, value);
    }

    #[inline]
    fn get(&self, key: &K) -> Option<V> {
        self.seek_shard(key).read().get(key).cloned()
    }

    fn len(&self) -> usize {
        self.latch.iter().map(|shard| shard.read().len()).sum()
    }
}

impl<K, V, S> fmt::Debug for ShardedCache<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShardedCache")
            .field("shards", &self.latch.len())
            .field(
                "items",
                &self.latch.iter().map(|s| s.read().len()).sum::<usize>(),
            )
            .finish()
    }
}
