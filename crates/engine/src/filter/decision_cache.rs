use ahash::RandomState as AHashRandomState;
use dashmap::DashMap;
use focusgate_domain::Verdict;
use rustc_hash::FxBuildHasher;
use std::hash::{BuildHasher, Hash, Hasher};
use std::sync::OnceLock;

/// How long a cached decision is considered fresh by consumers.
pub const DECISION_TTL_MS: u64 = 5_000;

const CAPACITY: usize = 100;

static DECISION_HASH_STATE: OnceLock<AHashRandomState> = OnceLock::new();

#[inline]
fn decision_hash_state() -> &'static AHashRandomState {
    DECISION_HASH_STATE.get_or_init(|| {
        AHashRandomState::with_seeds(
            0xf4a5_f3e1_c2b0_a9d7,
            0x8e6b_4c2a_0f1d_e3c9,
            0x7a2c_1e5b_9d4f_6a8e,
            0x3c7a_2e4b_6f8d_0a1c,
        )
    })
}

#[inline]
pub fn decision_key(tab_id: i64, url: &str) -> u64 {
    let mut h = decision_hash_state().build_hasher();
    tab_id.hash(&mut h);
    url.hash(&mut h);
    h.finish()
}

#[derive(Debug, Clone)]
pub struct CachedDecision {
    pub verdict: Verdict,
    pub inserted_at_ms: u64,
}

impl CachedDecision {
    /// Staleness is evaluated by the consumer, not auto-expired.
    #[inline]
    pub fn is_fresh(&self, now_ms: u64, ttl_ms: u64) -> bool {
        now_ms.saturating_sub(self.inserted_at_ms) < ttl_ms
    }
}

/// Per-(tab, url) memo that collapses the 2-3 browser events fired for
/// one logical navigation into a single evaluation.
pub struct DecisionCache {
    inner: DashMap<u64, CachedDecision, FxBuildHasher>,
}

impl DecisionCache {
    pub fn new() -> Self {
        Self {
            inner: DashMap::with_capacity_and_hasher(CAPACITY, FxBuildHasher),
        }
    }

    #[inline]
    pub fn get(&self, key: u64) -> Option<CachedDecision> {
        self.inner.get(&key).map(|e| e.value().clone())
    }

    #[inline]
    pub fn set(&self, key: u64, verdict: Verdict, now_ms: u64) {
        if self.inner.len() >= CAPACITY {
            // Oldest-entry eviction; the cap is small enough that a
            // scan is cheaper than bookkeeping an ordering.
            if let Some(oldest) = self
                .inner
                .iter()
                .min_by_key(|e| e.value().inserted_at_ms)
                .map(|e| *e.key())
            {
                self.inner.remove(&oldest);
            }
        }
        self.inner.insert(
            key,
            CachedDecision {
                verdict,
                inserted_at_ms: now_ms,
            },
        );
    }

    pub fn clear(&self) {
        self.inner.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Default for DecisionCache {
    fn default() -> Self {
        Self::new()
    }
}
