use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlocklistSource {
    pub id: Arc<str>,
    pub name: Arc<str>,
    pub url: Arc<str>,
    #[serde(default)]
    pub description: Option<Arc<str>>,
    pub enabled: bool,
    #[serde(default)]
    pub is_default: bool,
}

impl BlocklistSource {
    pub fn new(id: Arc<str>, name: Arc<str>, url: Arc<str>, enabled: bool) -> Self {
        Self {
            id,
            name,
            url,
            description: None,
            enabled,
            is_default: false,
        }
    }

    pub fn validate_name(name: &str) -> Result<(), String> {
        if name.trim().is_empty() {
            return Err("Blocklist source name cannot be empty".to_string());
        }
        if name.len() > 200 {
            return Err("Blocklist source name cannot exceed 200 characters".to_string());
        }
        Ok(())
    }

    pub fn validate_url(url: &str) -> Result<(), String> {
        if url.len() > 2048 {
            return Err("URL cannot exceed 2048 characters".to_string());
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err("URL must start with http:// or https://".to_string());
        }
        Ok(())
    }

    pub fn validate_description(description: &Option<Arc<str>>) -> Result<(), String> {
        if let Some(d) = description {
            if d.len() > 500 {
                return Err("Description cannot exceed 500 characters".to_string());
            }
        }
        Ok(())
    }
}

/// Community sources seeded at first run.
pub fn default_sources() -> Vec<BlocklistSource> {
    let defaults: [(&str, &str, &str, &str); 3] = [
        (
            "stevenblack-porn",
            "StevenBlack hosts (porn)",
            "https://raw.githubusercontent.com/StevenBlack/hosts/master/alternates/porn-only/hosts",
            "Community-maintained adult-content hosts file",
        ),
        (
            "stevenblack-gambling",
            "StevenBlack hosts (gambling)",
            "https://raw.githubusercontent.com/StevenBlack/hosts/master/alternates/gambling-only/hosts",
            "Community-maintained gambling hosts file",
        ),
        (
            "stevenblack-unified",
            "StevenBlack hosts (unified)",
            "https://raw.githubusercontent.com/StevenBlack/hosts/master/hosts",
            "Unified adware and malware hosts file",
        ),
    ];

    defaults
        .into_iter()
        .map(|(id, name, url, description)| BlocklistSource {
            id: Arc::from(id),
            name: Arc::from(name),
            url: Arc::from(url),
            description: Some(Arc::from(description)),
            enabled: true,
            is_default: true,
        })
        .collect()
}
