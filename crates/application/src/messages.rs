use focusgate_domain::{BlockHit, BlockReason, UpdateSummary};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::use_cases::{
    AddCustomDomainUseCase, FetchBlocklistUseCase, GetBlockedPageUrlUseCase,
    RemoveCustomDomainUseCase, SetActiveUseCase, UpdateBlocklistsUseCase,
};

/// Requests arriving from the UI surfaces (popup, options, content
/// script), tagged by `action` exactly as they travel over the
/// extension messaging channel.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Request {
    AddCustomDomain {
        domain: String,
    },
    RemoveCustomDomain {
        domain: String,
    },
    SetActive {
        active: bool,
    },
    FetchBlocklist {
        url: String,
    },
    UpdateBlocklists,
    ForceUpdateBlocklist,
    GetCurrentTab,
    #[serde(rename_all = "camelCase")]
    GetBlockedPageUrl {
        reason: BlockReason,
        #[serde(default)]
        domain: Option<String>,
        #[serde(default)]
        url: Option<String>,
        #[serde(default)]
        keyword: Option<String>,
        #[serde(default)]
        query: Option<String>,
    },
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Response {
    #[serde(rename_all = "camelCase")]
    Ack {
        success: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Fetched {
        success: bool,
        domains: Vec<String>,
        domain_count: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Updated {
        success: bool,
        #[serde(flatten)]
        summary: UpdateSummary,
    },
    #[serde(rename_all = "camelCase")]
    CurrentTab { url: Option<String> },
    #[serde(rename_all = "camelCase")]
    BlockedUrl { blocked_url: String },
}

impl Response {
    fn ok() -> Self {
        Response::Ack {
            success: true,
            error: None,
        }
    }

    fn err(error: impl ToString) -> Self {
        Response::Ack {
            success: false,
            error: Some(error.to_string()),
        }
    }
}

/// Request/response bridge between the UI surfaces and the engine.
///
/// One pending call at a time per caller; every request resolves to a
/// `Response` — failures fold into `{success: false, error}` so no
/// caller is ever left hanging.
pub struct MessageRouter {
    add_custom_domain: AddCustomDomainUseCase,
    remove_custom_domain: RemoveCustomDomainUseCase,
    set_active: SetActiveUseCase,
    fetch_blocklist: FetchBlocklistUseCase,
    update_blocklists: UpdateBlocklistsUseCase,
    blocked_page_url: GetBlockedPageUrlUseCase,
    current_tab: RwLock<Option<String>>,
}

impl MessageRouter {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        add_custom_domain: AddCustomDomainUseCase,
        remove_custom_domain: RemoveCustomDomainUseCase,
        set_active: SetActiveUseCase,
        fetch_blocklist: FetchBlocklistUseCase,
        update_blocklists: UpdateBlocklistsUseCase,
        blocked_page_url: GetBlockedPageUrlUseCase,
    ) -> Self {
        Self {
            add_custom_domain,
            remove_custom_domain,
            set_active,
            fetch_blocklist,
            update_blocklists,
            blocked_page_url,
            current_tab: RwLock::new(None),
        }
    }

    /// Records the URL of the most recently evaluated navigation, so
    /// `getCurrentTab` has something to answer with.
    pub async fn note_navigation(&self, url: &str) {
        *self.current_tab.write().await = Some(url.to_string());
    }

    #[instrument(skip(self))]
    pub async fn handle(&self, request: Request) -> Response {
        match request {
            Request::AddCustomDomain { domain } => {
                match self.add_custom_domain.execute(&domain).await {
                    Ok(()) => Response::ok(),
                    Err(e) => Response::err(e),
                }
            }
            Request::RemoveCustomDomain { domain } => {
                match self.remove_custom_domain.execute(&domain).await {
                    Ok(()) => Response::ok(),
                    Err(e) => Response::err(e),
                }
            }
            Request::SetActive { active } => match self.set_active.execute(active).await {
                Ok(()) => Response::ok(),
                Err(e) => Response::err(e),
            },
            Request::FetchBlocklist { url } => match self.fetch_blocklist.execute(&url).await {
                Ok(domains) => Response::Fetched {
                    success: true,
                    domain_count: domains.len(),
                    domains,
                    error: None,
                },
                Err(e) => Response::Fetched {
                    success: false,
                    domains: Vec::new(),
                    domain_count: 0,
                    error: Some(e.to_string()),
                },
            },
            Request::UpdateBlocklists => self.run_update(false).await,
            Request::ForceUpdateBlocklist => self.run_update(true).await,
            Request::GetCurrentTab => Response::CurrentTab {
                url: self.current_tab.read().await.clone(),
            },
            Request::GetBlockedPageUrl {
                reason,
                domain,
                url,
                keyword,
                query,
            } => {
                let hit = BlockHit {
                    reason,
                    url: Arc::from(url.unwrap_or_default().as_str()),
                    domain: domain.map(|d| Arc::from(d.as_str())),
                    keyword: keyword.map(|k| Arc::from(k.as_str())),
                    query: query.map(|q| Arc::from(q.as_str())),
                };
                Response::BlockedUrl {
                    blocked_url: self.blocked_page_url.execute(&hit),
                }
            }
        }
    }

    async fn run_update(&self, force: bool) -> Response {
        match self.update_blocklists.execute(force).await {
            Ok(summary) => Response::Updated {
                success: true,
                summary,
            },
            Err(e) => Response::err(e),
        }
    }
}
