use crate::clock::Clock;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use std::hash::Hash;
use std::sync::Arc;

/// Collapses a burst of repeated triggers per key into one admission
/// per window. The browser fires 2-3 events (tab update, webNavigation,
/// tab created) for one logical navigation; only the first should
/// reach the full decision pipeline.
pub struct Debouncer<K: Eq + Hash> {
    window_ms: u64,
    last_admitted: DashMap<K, u64, FxBuildHasher>,
    clock: Arc<dyn Clock>,
}

impl<K: Eq + Hash> Debouncer<K> {
    pub fn new(window_ms: u64, clock: Arc<dyn Clock>) -> Self {
        Self {
            window_ms,
            last_admitted: DashMap::with_hasher(FxBuildHasher),
            clock,
        }
    }

    /// True when the caller should evaluate; false when the trigger
    /// falls inside the coalescing window of a previous admission.
    pub fn admit(&self, key: K) -> bool {
        let now = self.clock.now_ms();
        match self.last_admitted.entry(key) {
            Entry::Occupied(mut e) => {
                if now.saturating_sub(*e.get()) < self.window_ms {
                    false
                } else {
                    e.insert(now);
                    true
                }
            }
            Entry::Vacant(e) => {
                e.insert(now);
                true
            }
        }
    }

    pub fn clear(&self) {
        self.last_admitted.clear();
    }
}
