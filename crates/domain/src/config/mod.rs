mod blocking;
mod cloud;
mod errors;
mod fetch;
mod logging;
mod root;
mod storage;
mod update;

pub use blocking::BlockingConfig;
pub use cloud::CloudConfig;
pub use errors::ConfigError;
pub use fetch::FetchConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use storage::StorageConfig;
pub use update::UpdateConfig;
