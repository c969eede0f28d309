use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BlockingConfig {
    /// Base URL of the blocked page; verdict details are appended as
    /// query parameters.
    #[serde(default = "default_blocked_page")]
    pub blocked_page: String,
}

impl Default for BlockingConfig {
    fn default() -> Self {
        Self {
            blocked_page: default_blocked_page(),
        }
    }
}

fn default_blocked_page() -> String {
    "blocked.html".to_string()
}
