mod blocklist_update;
mod cloud_sync;
mod filter_engine;
mod settings_store;

pub use blocklist_update::BlocklistUpdatePort;
pub use cloud_sync::CloudSyncProvider;
pub use filter_engine::FilterEnginePort;
pub use settings_store::SettingsStore;
