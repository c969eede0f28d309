use crate::blocklist_source::{default_sources, BlocklistSource};
use crate::fetch_result::BlocklistFetchResult;
use crate::keyword::default_keywords;
use crate::stats::BlockStats;
use serde::{Deserialize, Serialize};

/// Maximum retained diagnostic entries.
pub const ERROR_LOG_CAP: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorLogEntry {
    pub timestamp: String,
    pub context: String,
    pub message: String,
}

/// The single flat persisted namespace.
///
/// Every field carries a serde default so settings written by older
/// versions deserialize cleanly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub pin: Option<String>,
    pub blocked_keywords: Vec<String>,
    pub custom_domains: Vec<String>,
    /// Consolidated community result, republished on every update run.
    pub blocked_domains: Vec<String>,
    pub allowed_domains: Vec<String>,
    pub blocklist_sources: Vec<BlocklistSource>,
    pub blocklist_results: Vec<BlocklistFetchResult>,
    pub is_active: bool,
    #[serde(flatten)]
    pub stats: BlockStats,
    pub offline_mode: bool,
    pub offline_expiry: Option<String>,
    pub offline_email: Option<String>,
    pub last_cloud_sync: Option<String>,
    pub error_log: Vec<ErrorLogEntry>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pin: None,
            blocked_keywords: default_keywords(),
            custom_domains: Vec::new(),
            blocked_domains: Vec::new(),
            allowed_domains: Vec::new(),
            blocklist_sources: default_sources(),
            blocklist_results: Vec::new(),
            is_active: true,
            stats: BlockStats::default(),
            offline_mode: false,
            offline_expiry: None,
            offline_email: None,
            last_cloud_sync: None,
            error_log: Vec::new(),
        }
    }
}

impl Settings {
    /// Appends a diagnostic entry, dropping the oldest past the cap.
    pub fn log_error(&mut self, timestamp: String, context: &str, message: String) {
        self.error_log.push(ErrorLogEntry {
            timestamp,
            context: context.to_string(),
            message,
        });
        if self.error_log.len() > ERROR_LOG_CAP {
            let excess = self.error_log.len() - ERROR_LOG_CAP;
            self.error_log.drain(..excess);
        }
    }

    pub fn source_by_id(&self, id: &str) -> Option<&BlocklistSource> {
        self.blocklist_sources.iter().find(|s| s.id.as_ref() == id)
    }

    pub fn result_for_source(&self, id: &str) -> Option<&BlocklistFetchResult> {
        self.blocklist_results
            .iter()
            .find(|r| r.source_id.as_ref() == id)
    }
}
