use crate::clock::Clock;
use async_trait::async_trait;
use dashmap::DashMap;
use focusgate_domain::config::FetchConfig;
use focusgate_domain::FilterError;
use rustc_hash::FxBuildHasher;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Raw HTTP GET of a list URL. A trait so retry and caching behavior
/// can be exercised without the network.
#[async_trait]
pub trait FetchTransport: Send + Sync {
    async fn get_text(&self, url: &str) -> Result<String, FilterError>;
}

pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout_secs: u64) -> Result<Self, FilterError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(
                "Focusgate/",
                env!("CARGO_PKG_VERSION"),
                " (blocklist-sync)"
            ))
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| FilterError::Network(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl FetchTransport for ReqwestTransport {
    async fn get_text(&self, url: &str) -> Result<String, FilterError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FilterError::Timeout {
                    url: url.to_string(),
                }
            } else {
                FilterError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FilterError::Network(format!("HTTP {status} from {url}")));
        }

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                FilterError::Timeout {
                    url: url.to_string(),
                }
            } else {
                FilterError::Network(e.to_string())
            }
        })
    }
}

struct CachedBody {
    body: Arc<str>,
    fetched_at_ms: u64,
}

/// Downloads list content with retry, backoff, and a per-URL content
/// cache that doubles as a stale fallback when every attempt fails.
pub struct BlocklistFetcher<T: FetchTransport> {
    transport: T,
    cache: DashMap<Arc<str>, CachedBody, FxBuildHasher>,
    attempts: u32,
    base_backoff: Duration,
    min_bytes: usize,
    cache_ttl_ms: u64,
    clock: Arc<dyn Clock>,
}

impl<T: FetchTransport> BlocklistFetcher<T> {
    pub fn new(transport: T, config: &FetchConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            transport,
            cache: DashMap::with_hasher(FxBuildHasher),
            attempts: config.attempts.max(1),
            base_backoff: Duration::from_secs(1),
            min_bytes: config.min_bytes,
            cache_ttl_ms: config.cache_ttl_secs * 1000,
            clock,
        }
    }

    /// Fetches the raw body of `url`. `force` bypasses the fresh-cache
    /// check but still records the result for later fallback.
    pub async fn fetch(&self, url: &str, force: bool) -> Result<Arc<str>, FilterError> {
        let now = self.clock.now_ms();
        if !force {
            if let Some(entry) = self.cache.get(url) {
                if now.saturating_sub(entry.fetched_at_ms) < self.cache_ttl_ms {
                    debug!(url, "Serving blocklist from content cache");
                    return Ok(entry.body.clone());
                }
            }
        }

        let mut last_err = FilterError::Network(format!("no attempts made for {url}"));
        for attempt in 1..=self.attempts {
            if attempt > 1 {
                // Exponential backoff with jitter: 1s, 2s, 4s ... plus
                // up to 250ms so parallel retries do not align.
                let backoff = self.base_backoff * 2u32.pow(attempt - 2)
                    + Duration::from_millis(fastrand::u64(0..250));
                debug!(url, attempt, ?backoff, "Retrying blocklist fetch");
                tokio::time::sleep(backoff).await;
            }

            match self.attempt(url).await {
                Ok(body) => {
                    self.cache.insert(
                        Arc::from(url),
                        CachedBody {
                            body: body.clone(),
                            fetched_at_ms: self.clock.now_ms(),
                        },
                    );
                    info!(url, bytes = body.len(), attempt, "Fetched blocklist");
                    return Ok(body);
                }
                Err(e) => {
                    warn!(url, attempt, error = %e, "Blocklist fetch attempt failed");
                    last_err = e;
                }
            }
        }

        // Stale fallback keeps protection alive through source outages.
        if let Some(entry) = self.cache.get(url) {
            warn!(url, "All fetch attempts failed, serving stale cached content");
            return Ok(entry.body.clone());
        }
        Err(last_err)
    }

    async fn attempt(&self, url: &str) -> Result<Arc<str>, FilterError> {
        let body = self.transport.get_text(url).await?;
        if body.len() < self.min_bytes {
            return Err(FilterError::TruncatedResponse {
                url: url.to_string(),
                bytes: body.len(),
            });
        }
        Ok(Arc::from(body.as_str()))
    }
}
