mod activation;
mod blocked_page;
mod cloud;
mod custom_domains;
mod keywords;
mod sources;
mod stats;
mod update_blocklists;

pub use activation::SetActiveUseCase;
pub use blocked_page::GetBlockedPageUrlUseCase;
pub use cloud::SyncSettingsUseCase;
pub use custom_domains::{AddCustomDomainUseCase, RemoveCustomDomainUseCase};
pub use keywords::{AddKeywordUseCase, RemoveKeywordUseCase};
pub use sources::{AddSourceUseCase, RemoveSourceUseCase, ToggleSourceUseCase};
pub use stats::{GetStatsUseCase, RecordBlockUseCase};
pub use update_blocklists::{FetchBlocklistUseCase, UpdateBlocklistsUseCase};
