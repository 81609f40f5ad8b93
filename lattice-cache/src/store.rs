//! Bounded in-memory cache built on moka.
//!
//! TinyLFU admission, size-aware eviction once the capacity ceiling is
//! exceeded, per-entry TTL measured from insertion. Reads never extend an
//! entry's lifetime; an expired entry is absent no matter how recently it
//! was read.

use std::time::Duration;

use moka::sync::Cache;

/// Generic bounded TTL cache keyed by derived strings.
pub struct TtlCache<V> {
    cache: Cache<String, V>,
}

impl<V: Clone + Send + Sync + 'static> TtlCache<V> {
    pub fn new(max_entries: u64, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(ttl)
            .build();
        Self { cache }
    }

    /// Get a value by key. Expired entries are treated as absent.
    pub fn get(&self, key: &str) -> Option<V> {
        self.cache.get(key)
    }

    /// Insert or overwrite, stamping the current time.
    pub fn insert(&self, key: String, value: V) {
        self.cache.insert(key, value);
    }

    /// Proactively process expirations and pending evictions.
    pub fn prune(&self) {
        self.cache.run_pending_tasks();
    }

    /// Remove every entry.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }

    /// Number of live entries. Call [`TtlCache::prune`] first for an exact
    /// count; moka maintains this lazily.
    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache(max: u64, ttl_ms: u64) -> TtlCache<String> {
        TtlCache::new(max, Duration::from_millis(ttl_ms))
    }

    #[test]
    fn insert_and_get() {
        let c = cache(16, 60_000);
        c.insert("k".into(), "v".into());
        assert_eq!(c.get("k"), Some("v".to_string()));
        // Idempotent: a second read returns the identical value.
        assert_eq!(c.get("k"), Some("v".to_string()));
    }

    #[test]
    fn miss_returns_none() {
        let c = cache(16, 60_000);
        assert_eq!(c.get("absent"), None);
    }

    #[test]
    fn overwrite_replaces_value() {
        let c = cache(16, 60_000);
        c.insert("k".into(), "old".into());
        c.insert("k".into(), "new".into());
        assert_eq!(c.get("k"), Some("new".to_string()));
    }

    #[test]
    fn entries_expire_after_ttl() {
        let c = cache(16, 50);
        c.insert("k".into(), "v".into());
        assert_eq!(c.get("k"), Some("v".to_string()));
        std::thread::sleep(Duration::from_millis(120));
        assert_eq!(c.get("k"), None);
    }

    #[test]
    fn reads_do_not_extend_ttl() {
        let c = cache(16, 80);
        c.insert("k".into(), "v".into());
        // Keep reading past half the TTL; the entry must still expire.
        std::thread::sleep(Duration::from_millis(50));
        assert!(c.get("k").is_some());
        std::thread::sleep(Duration::from_millis(60));
        assert_eq!(c.get("k"), None);
    }

    #[test]
    fn capacity_ceiling_is_enforced() {
        let c = cache(2, 60_000);
        for i in 0..10 {
            c.insert(format!("k{i}"), "v".into());
        }
        c.prune();
        assert!(c.len() <= 2, "expected at most 2 entries, got {}", c.len());
    }

    #[test]
    fn clear_empties_store() {
        let c = cache(16, 60_000);
        c.insert("a".into(), "1".into());
        c.insert("b".into(), "2".into());
        c.clear();
        c.prune();
        assert_eq!(c.get("a"), None);
        assert_eq!(c.get("b"), None);
        assert!(c.is_empty());
    }

    #[test]
    fn prune_drops_expired_entries() {
        let c = cache(16, 40);
        c.insert("a".into(), "1".into());
        std::thread::sleep(Duration::from_millis(100));
        c.prune();
        assert_eq!(c.len(), 0);
    }
}
