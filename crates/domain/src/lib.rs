//! Focusgate Domain Layer
pub mod blocklist_source;
pub mod config;
pub mod decision;
pub mod domain_name;
pub mod errors;
pub mod fetch_result;
pub mod keyword;
pub mod settings;
pub mod stats;

pub use blocklist_source::{default_sources, BlocklistSource};
pub use config::Config;
pub use decision::{BlockHit, BlockReason, Verdict};
pub use errors::FilterError;
pub use fetch_result::{BlocklistFetchResult, UpdateSummary};
pub use settings::{ErrorLogEntry, Settings, ERROR_LOG_CAP};
pub use stats::BlockStats;
