use async_trait::async_trait;
use focusgate_application::ports::CloudSyncProvider;
use focusgate_domain::{FilterError, Settings};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, instrument};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Bearer-token JSON sync against a configured endpoint.
pub struct HttpCloudSync {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl HttpCloudSync {
    pub fn new(endpoint: String, api_key: String) -> Result<Self, FilterError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| FilterError::Network(e.to_string()))?;
        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }

    fn map_status(status: StatusCode) -> FilterError {
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            FilterError::CloudAuth(format!("HTTP {status}"))
        } else {
            FilterError::CloudSync(format!("HTTP {status}"))
        }
    }
}

#[async_trait]
impl CloudSyncProvider for HttpCloudSync {
    fn is_configured(&self) -> bool {
        true
    }

    #[instrument(skip(self, settings))]
    async fn push(&self, settings: &Settings) -> Result<(), FilterError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(settings)
            .send()
            .await
            .map_err(|e| FilterError::CloudSync(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::map_status(response.status()));
        }
        debug!("Settings pushed to cloud");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn pull(&self) -> Result<Option<Settings>, FilterError> {
        let response = self
            .client
            .get(&self.endpoint)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| FilterError::CloudSync(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Self::map_status(response.status()));
        }

        let settings = response
            .json::<Settings>()
            .await
            .map_err(|e| FilterError::Serialization(e.to_string()))?;
        Ok(Some(settings))
    }
}
