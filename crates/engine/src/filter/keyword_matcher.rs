use crate::clock::Clock;
use aho_corasick::AhoCorasick;
use ahash::RandomState as AHashRandomState;
use regex::RegexBuilder;
use rustc_hash::FxBuildHasher;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash, Hasher};
use std::sync::{Arc, Mutex, OnceLock};
use tracing::warn;

const SCAN_CACHE_TTL_MS: u64 = 5 * 60 * 1000;
const SCAN_CACHE_CAP: usize = 500;

static SCAN_HASH_STATE: OnceLock<AHashRandomState> = OnceLock::new();

#[inline]
fn scan_hash_state() -> &'static AHashRandomState {
    SCAN_HASH_STATE.get_or_init(|| {
        AHashRandomState::with_seeds(
            0x9d3c_72e1_b4a8_06f5,
            0x5e1f_a93c_7d20_48bb,
            0x2b86_e04d_91c7_3afe,
            0x6fd4_180a_c5b9_2e37,
        )
    })
}

#[inline]
fn scan_key(text: &str, word_boundary: bool) -> u64 {
    let mut h = scan_hash_state().build_hasher();
    text.hash(&mut h);
    word_boundary.hash(&mut h);
    h.finish()
}

struct ScanCache {
    entries: HashMap<u64, (Option<Arc<str>>, u64), FxBuildHasher>,
}

impl ScanCache {
    fn new() -> Self {
        Self {
            entries: HashMap::with_hasher(FxBuildHasher),
        }
    }

    fn get(&self, key: u64, now_ms: u64) -> Option<Option<Arc<str>>> {
        let (result, inserted_at) = self.entries.get(&key)?;
        if now_ms.saturating_sub(*inserted_at) < SCAN_CACHE_TTL_MS {
            Some(result.clone())
        } else {
            None
        }
    }

    fn put(&mut self, key: u64, result: Option<Arc<str>>, now_ms: u64) {
        if self.entries.len() >= SCAN_CACHE_CAP {
            // Over cap: drop the oldest half rather than tracking
            // strict LRU order.
            let mut stamps: Vec<u64> = self.entries.values().map(|(_, at)| *at).collect();
            stamps.sort_unstable();
            let cutoff = stamps[stamps.len() / 2];
            self.entries.retain(|_, (_, at)| *at > cutoff);
        }
        self.entries.insert(key, (result, now_ms));
    }
}

/// Case-insensitive keyword scanner over URLs, titles, and search
/// queries.
///
/// Immutable once built: keyword mutations rebuild the matcher, which
/// drops the scan cache wholesale (cheaper and simpler than selective
/// invalidation).
pub struct KeywordMatcher {
    keywords: Vec<Arc<str>>,
    automaton: Option<AhoCorasick>,
    boundary: Option<regex::Regex>,
    cache: Mutex<ScanCache>,
    clock: Arc<dyn Clock>,
}

impl KeywordMatcher {
    pub fn new<S: AsRef<str>>(keywords: &[S], clock: Arc<dyn Clock>) -> Self {
        let mut normalized: Vec<Arc<str>> = keywords
            .iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| k.len() >= focusgate_domain::keyword::MIN_KEYWORD_LEN)
            .map(|k| Arc::from(k.as_str()))
            .collect();
        normalized.sort();
        normalized.dedup();

        let automaton = if normalized.is_empty() {
            None
        } else {
            match AhoCorasick::builder()
                .ascii_case_insensitive(true)
                .build(normalized.iter().map(|k| k.as_ref()))
            {
                Ok(ac) => Some(ac),
                Err(e) => {
                    warn!(error = %e, "Failed to build keyword automaton");
                    None
                }
            }
        };

        let boundary = if normalized.is_empty() {
            None
        } else {
            let alternation = normalized
                .iter()
                .map(|k| regex::escape(k))
                .collect::<Vec<_>>()
                .join("|");
            match RegexBuilder::new(&format!(r"\b(?:{alternation})\b"))
                .case_insensitive(true)
                .build()
            {
                Ok(re) => Some(re),
                Err(e) => {
                    warn!(error = %e, "Failed to build word-boundary keyword regex");
                    None
                }
            }
        };

        Self {
            keywords: normalized,
            automaton,
            boundary,
            cache: Mutex::new(ScanCache::new()),
            clock,
        }
    }

    /// Substring scan. Returns the first matched keyword, or `None`
    /// for empty/too-short input.
    pub fn find_in(&self, text: &str) -> Option<Arc<str>> {
        if text.len() < focusgate_domain::keyword::MIN_KEYWORD_LEN {
            return None;
        }
        let key = scan_key(text, false);
        let now = self.clock.now_ms();
        if let Ok(cache) = self.cache.lock() {
            if let Some(cached) = cache.get(key, now) {
                return cached;
            }
        }

        let hit = self.automaton.as_ref().and_then(|ac| {
            ac.find(text)
                .map(|m| self.keywords[m.pattern().as_usize()].clone())
        });

        if let Ok(mut cache) = self.cache.lock() {
            cache.put(key, hit.clone(), now);
        }
        hit
    }

    /// Word-boundary scan, for page titles and search queries where a
    /// keyword inside an unrelated word must not match.
    pub fn find_word_in(&self, text: &str) -> Option<Arc<str>> {
        if text.len() < focusgate_domain::keyword::MIN_KEYWORD_LEN {
            return None;
        }
        let key = scan_key(text, true);
        let now = self.clock.now_ms();
        if let Ok(cache) = self.cache.lock() {
            if let Some(cached) = cache.get(key, now) {
                return cached;
            }
        }

        let hit = self
            .boundary
            .as_ref()
            .and_then(|re| re.find(text))
            .map(|m| Arc::from(m.as_str().to_lowercase().as_str()));

        if let Ok(mut cache) = self.cache.lock() {
            cache.put(key, hit.clone(), now);
        }
        hit
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}
