///
/// Key-value storage shared between one writer and any number of readers.
///
/// Implementations must make a `put` eventually visible to concurrent `get`s without ever
/// exposing a partially written value. A missing key is a normal outcome of `get`, never
/// an error, and `get` never waits for a future write.
pub trait SharedCache<K, V>: Send + Sync {
    ///
    /// Insert or overwrite the mapping for `key`.
    fn put(&self, key: K, value: V);

    ///
    /// Currently visible value for `key`, if any write for it became visible.
    fn get(&self, key: &K) -> Option<V>;

    ///
    /// Number of entries currently visible.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
