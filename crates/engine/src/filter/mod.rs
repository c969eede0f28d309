mod decision_cache;
mod domain_trie;
mod engine;
mod keyword_matcher;
mod search;

pub use decision_cache::{decision_key, CachedDecision, DecisionCache, DECISION_TTL_MS};
pub use domain_trie::DomainTrie;
pub use engine::FilterEngine;
pub use keyword_matcher::KeywordMatcher;
pub use search::extract_search_query;
