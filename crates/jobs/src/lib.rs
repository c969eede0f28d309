pub mod blocklist_refresh;
pub mod cloud_sync;
pub mod runner;

pub use blocklist_refresh::BlocklistRefreshJob;
pub use cloud_sync::CloudSyncJob;
pub use runner::JobRunner;
