use super::shared::SharedCache;

use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

///
/// Shared cache behind a single mutual exclusion lock.
///
/// Every access serializes on the same lock. This is the baseline the sharded cache is
/// measured against.
pub struct LockedCache<K, V>
where
    K: Eq + Hash,
{
    latch: Mutex<HashMap<K, V>>,
}

impl<K, V> LockedCache<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            latch: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            latch: Mutex::new(HashMap::with_capacity(cap)),
        }
    }
}

impl<K, V> Default for LockedCache<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> SharedCache<K, V> for LockedCache<K, V>
where
    K: Eq + Hash + Send,
    V: Clone + Send,
{
    #[inline]
    fn put(&self, key: K, value: V) {
        self.latch.lock().insert(key, value);
    }

    #[inline]
    fn get(&self, key: &K) -> Option<V> {
        self.latch.lock().get(key).cloned()
    }

    fn len(&self) -> usize {
        self.latch.lock().len()
    }
}

impl<K, V> fmt::Debug for LockedCache<K, V>
where
    K: Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LockedCache")
            .field("items", &self.latch.lock().len())
            .finish()
    }
}
