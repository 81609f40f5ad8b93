use std::time::Duration;

use lattice_cache::keys;
use lattice_cache::TtlCache;
use proptest::prelude::*;

proptest! {
    #[test]
    fn embedding_key_is_idempotent_under_normalization(s in ".{0,80}") {
        let once = keys::embedding_key(&s);
        let normalized = s.trim().to_lowercase();
        let twice = keys::embedding_key(&normalized);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn fingerprint_invariant_under_permutation(mut ids in prop::collection::vec("[a-z0-9]{1,12}", 0..20)) {
        let forward = keys::history_fingerprint(&ids);
        ids.reverse();
        let backward = keys::history_fingerprint(&ids);
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn get_returns_what_was_inserted(key in "[a-z0-9:]{1,32}", value in ".{0,64}") {
        let cache: TtlCache<String> = TtlCache::new(64, Duration::from_secs(60));
        cache.insert(key.clone(), value.clone());
        prop_assert_eq!(cache.get(&key), Some(value));
    }
}
