use super::decision_cache::{decision_key, DecisionCache, DECISION_TTL_MS};
use super::domain_trie::DomainTrie;
use super::keyword_matcher::KeywordMatcher;
use super::search::extract_search_query;
use crate::clock::Clock;
use crate::debounce::Debouncer;
use arc_swap::ArcSwap;
use focusgate_application::ports::FilterEnginePort;
use focusgate_domain::{BlockHit, BlockReason, Settings, Verdict};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};
use url::Url;

/// Schemes that belong to the browser or the extension itself and are
/// never candidates for blocking.
const INTERNAL_SCHEMES: &[&str] = &[
    "about",
    "chrome",
    "chrome-extension",
    "moz-extension",
    "edge",
    "devtools",
    "view-source",
    "data",
    "blob",
];

const TAB_DEBOUNCE_MS: u64 = 100;

/// The navigation guard: combines the domain tries, the keyword
/// scanner, and the search-query inspection into one verdict.
///
/// Every live structure sits behind an `ArcSwap`, so reload builds the
/// replacement off to the side and swaps it in atomically — a reader
/// never observes a half-populated index mid-rebuild.
pub struct FilterEngine {
    community: ArcSwap<DomainTrie>,
    custom: ArcSwap<DomainTrie>,
    allowlist: ArcSwap<DomainTrie>,
    keywords: ArcSwap<KeywordMatcher>,
    active: AtomicBool,
    decision_cache: DecisionCache,
    debouncer: Debouncer<i64>,
    clock: Arc<dyn Clock>,
}

impl FilterEngine {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            community: ArcSwap::from_pointee(DomainTrie::new()),
            custom: ArcSwap::from_pointee(DomainTrie::new()),
            allowlist: ArcSwap::from_pointee(DomainTrie::new()),
            keywords: ArcSwap::from_pointee(KeywordMatcher::new::<&str>(&[], clock.clone())),
            active: AtomicBool::new(true),
            decision_cache: DecisionCache::new(),
            debouncer: Debouncer::new(TAB_DEBOUNCE_MS, clock.clone()),
            clock,
        }
    }

    pub fn from_settings(settings: &Settings, clock: Arc<dyn Clock>) -> Self {
        let engine = Self::new(clock);
        FilterEnginePort::reload(&engine, settings);
        engine
    }

    fn check_inner(&self, url_str: &str) -> Verdict {
        // Malformed input must never take navigation handling down;
        // anything unparseable is left to the browser.
        let Ok(url) = Url::parse(url_str) else {
            return Verdict::Allow;
        };
        if INTERNAL_SCHEMES.contains(&url.scheme()) {
            return Verdict::Allow;
        }

        let host = url.host_str().unwrap_or("");
        if !host.is_empty() && self.allowlist.load().check(host) {
            return Verdict::Allow;
        }

        // Domain match wins over keyword match: checked first,
        // short-circuits. Custom entries come first so user overrides
        // stay diagnosable independently of the community set.
        if !host.is_empty()
            && (self.custom.load().check(host) || self.community.load().check(host))
        {
            return Verdict::Block(BlockHit {
                reason: BlockReason::Domain,
                url: Arc::from(url_str),
                domain: Some(Arc::from(host)),
                keyword: None,
                query: None,
            });
        }

        let keywords = self.keywords.load();
        if let Some(keyword) = keywords.find_in(url_str) {
            return Verdict::Block(BlockHit {
                reason: BlockReason::Keyword,
                url: Arc::from(url_str),
                domain: None,
                keyword: Some(keyword),
                query: None,
            });
        }

        if let Some(query) = extract_search_query(&url) {
            if let Some(keyword) = keywords.find_word_in(&query) {
                return Verdict::Block(BlockHit {
                    reason: BlockReason::Search,
                    url: Arc::from(url_str),
                    domain: None,
                    keyword: Some(keyword),
                    query: Some(Arc::from(query.as_str())),
                });
            }
        }

        Verdict::Allow
    }
}

impl FilterEnginePort for FilterEngine {
    #[inline]
    fn evaluate(&self, _tab_id: i64, url: &str) -> Verdict {
        if !self.active.load(Ordering::Acquire) {
            return Verdict::Allow;
        }
        self.check_inner(url)
    }

    fn evaluate_tab_event(&self, tab_id: i64, url: &str) -> Verdict {
        if !self.active.load(Ordering::Acquire) {
            return Verdict::Allow;
        }

        let key = decision_key(tab_id, url);
        let now = self.clock.now_ms();
        if let Some(cached) = self.decision_cache.get(key) {
            if cached.is_fresh(now, DECISION_TTL_MS) {
                return cached.verdict;
            }
        }

        // Inside the coalescing window with no cached entry the event
        // is a duplicate of one already being handled; letting it pass
        // is safe because the first event performs the redirect.
        if !self.debouncer.admit(tab_id) {
            debug!(tab_id, "Navigation event debounced");
            return Verdict::Allow;
        }

        let verdict = self.check_inner(url);
        self.decision_cache.set(key, verdict.clone(), now);
        verdict
    }

    fn set_active(&self, active: bool) {
        self.active.store(active, Ordering::Release);
        self.decision_cache.clear();
        info!(active, "Filter engine kill switch set");
    }

    fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    fn reload(&self, settings: &Settings) {
        self.community
            .store(Arc::new(DomainTrie::from_domains(&settings.blocked_domains)));
        self.custom
            .store(Arc::new(DomainTrie::from_domains(&settings.custom_domains)));
        self.allowlist
            .store(Arc::new(DomainTrie::from_domains(&settings.allowed_domains)));
        self.keywords.store(Arc::new(KeywordMatcher::new(
            &settings.blocked_keywords,
            self.clock.clone(),
        )));
        self.active.store(settings.is_active, Ordering::Release);
        self.decision_cache.clear();
        self.debouncer.clear();

        info!(
            community = self.community.load().len(),
            custom = self.custom.load().len(),
            keywords = self.keywords.load().len(),
            active = settings.is_active,
            "Filter engine reloaded"
        );
    }

    fn install_community(&self, domains: &[String]) {
        self.community
            .store(Arc::new(DomainTrie::from_domains(domains)));
        self.decision_cache.clear();
        info!(domains = domains.len(), "Community domain set republished");
    }

    fn install_custom(&self, domains: &[String]) {
        self.custom
            .store(Arc::new(DomainTrie::from_domains(domains)));
        self.decision_cache.clear();
    }

    fn install_keywords(&self, keywords: &[String]) {
        self.keywords
            .store(Arc::new(KeywordMatcher::new(keywords, self.clock.clone())));
        self.decision_cache.clear();
    }

    fn install_allowlist(&self, domains: &[String]) {
        self.allowlist
            .store(Arc::new(DomainTrie::from_domains(domains)));
        self.decision_cache.clear();
    }

    fn community_len(&self) -> usize {
        self.community.load().len()
    }

    fn custom_len(&self) -> usize {
        self.custom.load().len()
    }
}
