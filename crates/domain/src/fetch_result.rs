use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Outcome of one source during one orchestration run.
///
/// Superseded wholesale on every update; never merged incrementally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlocklistFetchResult {
    pub source_id: Arc<str>,
    pub success: bool,
    pub domain_count: usize,
    #[serde(default)]
    pub domains: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub last_updated: String,
}

impl BlocklistFetchResult {
    pub fn succeeded(source_id: Arc<str>, domains: Vec<String>, last_updated: String) -> Self {
        Self {
            source_id,
            success: true,
            domain_count: domains.len(),
            domains,
            error: None,
            last_updated,
        }
    }

    pub fn failed(source_id: Arc<str>, error: String, last_updated: String) -> Self {
        Self {
            source_id,
            success: false,
            domain_count: 0,
            domains: Vec::new(),
            error: Some(error),
            last_updated,
        }
    }
}

/// Result of a whole `updateBlocklists` run, as reported to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSummary {
    pub results: Vec<BlocklistFetchResult>,
    pub total_domains: usize,
    pub successful_sources: usize,
    pub total_sources: usize,
    pub message: String,
}
