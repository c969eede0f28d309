use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Why a navigation was blocked. Domain matches win over keyword
/// matches; search matches carry the offending query for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockReason {
    Domain,
    Keyword,
    Search,
}

impl BlockReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockReason::Domain => "domain",
            BlockReason::Keyword => "keyword",
            BlockReason::Search => "search",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockHit {
    pub reason: BlockReason,
    pub url: Arc<str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<Arc<str>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<Arc<str>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<Arc<str>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Allow,
    Block(BlockHit),
}

impl Verdict {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Verdict::Block(_))
    }

    pub fn hit(&self) -> Option<&BlockHit> {
        match self {
            Verdict::Allow => None,
            Verdict::Block(hit) => Some(hit),
        }
    }
}
