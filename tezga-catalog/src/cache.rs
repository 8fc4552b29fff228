//! Keyed memoization store with wholesale invalidation
use std::collections::HashMap;
use std::hash::Hash;

/// A small key-value memo used for query results, rendered card templates
/// and formatted strings. Entries never expire individually; the owner
/// clears the whole cache when the underlying data changes.
#[derive(Debug, Clone)]
pub struct KeyedCache<K, V> {
    entries: HashMap<K, V>,
}

impl<K: Eq + Hash, V> KeyedCache<K, V> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: K, value: V) {
        self.entries.insert(key, value);
    }

    /// Look up `key`, computing and storing the value on a miss.
    pub fn get_or_insert_with(&mut self, key: K, compute: impl FnOnce() -> V) -> &V {
        self.entries.entry(key).or_insert_with(compute)
    }

    /// Drop every entry. Called whenever the data the values were derived
    /// from is replaced.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Eq + Hash, V> Default for KeyedCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
