use crate::{PostFeedError, Result};
use reqwest::Url;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Collection endpoint; `_page=<n>` is appended per request
    pub endpoint: String,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// UI redraw / message poll interval
    pub tick_rate: Duration,
    /// Skip posts whose id was already loaded
    pub dedupe_by_id: bool,
    /// Log file; defaults to `postfeed.log` next to the executable
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout: Duration::from_secs(10),
            tick_rate: Duration::from_millis(50),
            dedupe_by_id: false,
            log_file: None,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.endpoint)
            .map_err(|e| PostFeedError::InvalidEndpoint(format!("{}: {}", self.endpoint, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(PostFeedError::InvalidEndpoint(format!(
                "{}: scheme must be http or https",
                self.endpoint
            )));
        }
        if self.request_timeout.is_zero() {
            return Err(PostFeedError::InvalidEndpoint(
                "request timeout must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}
