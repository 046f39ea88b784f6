//! Keyed time-to-live cache.
//!
//! Entries are stamped with [`tokio::time::Instant`] so tests can drive
//! expiry with tokio's paused clock.

use std::{collections::HashMap, hash::Hash, time::Duration};

use tokio::time::Instant;

// ---

/// Default lifetime of a cached dataset.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    data: V,
    fetched_at: Instant,
}

/// A map whose entries are only readable while younger than the TTL.
#[derive(Debug)]
pub struct TtlCache<K, V> {
    ttl: Duration,
    entries: HashMap<K, CacheEntry<V>>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the cached value if it is still live.
    ///
    /// An expired entry is evicted and reported as absent.
    pub fn get(&mut self, key: &K) -> Option<V> {
        // ---
        match self.entries.get(key) {
            Some(entry) if entry.fetched_at.elapsed() < self.ttl => Some(entry.data.clone()),
            Some(_) => {
                self.entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Store `data` under `key`, stamped now, replacing any previous entry.
    pub fn set(&mut self, key: K, data: V) {
        self.entries.insert(
            key,
            CacheEntry {
                data,
                fetched_at: Instant::now(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_entry_expires_after_ttl() {
        // ---
        let mut cache = TtlCache::new(Duration::from_secs(60));
        cache.set("ocean_data", 7);

        tokio::time::advance(Duration::from_secs(59)).await;
        assert_eq!(cache.get(&"ocean_data"), Some(7));

        tokio::time::advance(Duration::from_secs(1)).await;
        assert_eq!(cache.get(&"ocean_data"), None);
        assert!(cache.is_empty(), "expired entry should be evicted");
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_overwrites_and_restamps() {
        // ---
        let mut cache = TtlCache::new(Duration::from_secs(60));
        cache.set("k", 1);
        tokio::time::advance(Duration::from_secs(45)).await;
        cache.set("k", 2);
        tokio::time::advance(Duration::from_secs(45)).await;

        assert_eq!(cache.get(&"k"), Some(2));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_missing_key() {
        let mut cache: TtlCache<String, u8> = TtlCache::new(DEFAULT_TTL);
        assert_eq!(cache.get(&"nothing".to_string()), None);
    }
}
