use async_trait::async_trait;
use focusgate_application::ports::SettingsStore;
use focusgate_domain::{FilterError, Settings};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

const FLUSH_DELAY: Duration = Duration::from_millis(500);

struct StoreInner {
    path: PathBuf,
    /// Authoritative in-process state; the file trails it by at most
    /// one coalescing window.
    state: RwLock<Settings>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl StoreInner {
    async fn write_to_disk(&self) -> Result<(), FilterError> {
        let snapshot = self.state.read().await.clone();
        let json = serde_json::to_vec_pretty(&snapshot)
            .map_err(|e| FilterError::Serialization(e.to_string()))?;

        // Write-then-rename so a crash mid-write never leaves a
        // truncated settings file behind.
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &json)
            .await
            .map_err(|e| FilterError::Io(e.to_string()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| FilterError::Io(e.to_string()))?;
        debug!(path = %self.path.display(), bytes = json.len(), "Settings flushed");
        Ok(())
    }
}

/// File-backed settings store with write coalescing.
///
/// `store` updates the in-memory mirror synchronously and schedules a
/// single delayed disk write; bursts of mutations inside the window
/// collapse into one file write. `load` reads the mirror, so
/// read-after-write consistency holds even with a flush pending.
pub struct JsonFileStore {
    inner: Arc<StoreInner>,
}

impl JsonFileStore {
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, FilterError> {
        let path = path.as_ref().to_path_buf();
        let settings = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| FilterError::Serialization(e.to_string()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "No settings file, starting from defaults");
                Settings::default()
            }
            Err(e) => return Err(FilterError::Io(e.to_string())),
        };

        Ok(Self {
            inner: Arc::new(StoreInner {
                path,
                state: RwLock::new(settings),
                pending: Mutex::new(None),
            }),
        })
    }
}

#[async_trait]
impl SettingsStore for JsonFileStore {
    async fn load(&self) -> Result<Settings, FilterError> {
        Ok(self.inner.state.read().await.clone())
    }

    async fn store(&self, settings: Settings) -> Result<(), FilterError> {
        *self.inner.state.write().await = settings;

        let mut pending = self.inner.pending.lock().await;
        let flush_in_flight = pending.as_ref().is_some_and(|h| !h.is_finished());
        if !flush_in_flight {
            let inner = self.inner.clone();
            *pending = Some(tokio::spawn(async move {
                tokio::time::sleep(FLUSH_DELAY).await;
                if let Err(e) = inner.write_to_disk().await {
                    error!(error = %e, "Coalesced settings flush failed");
                }
            }));
        }
        Ok(())
    }

    async fn flush(&self) -> Result<(), FilterError> {
        let mut pending = self.inner.pending.lock().await;
        if let Some(handle) = pending.take() {
            handle.abort();
        }
        self.inner.write_to_disk().await
    }
}
