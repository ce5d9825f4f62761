//! Page sources. `HttpPostSource` talks to the real endpoint; tests plug in their own.

use crate::{PostFeedError, Post, Result};
use reqwest::blocking::Client;
use reqwest::Url;
use std::time::Duration;
use tracing::debug;

/// Anything that can produce one page of posts
pub trait PostSource: Send + Sync {
    fn fetch_page(&self, page: u32) -> Result<Vec<Post>>;
}

/// Fetches `GET <endpoint>?_page=<n>`
pub struct HttpPostSource {
    client: Client,
    endpoint: Url,
}

impl HttpPostSource {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| PostFeedError::InvalidEndpoint(format!("{}: {}", endpoint, e)))?;
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("postfeed/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, endpoint })
    }

    /// Endpoint with `_page` appended; an existing query string is kept
    pub fn page_url(&self, page: u32) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("_page", &page.to_string());
        url
    }
}

impl PostSource for HttpPostSource {
    fn fetch_page(&self, page: u32) -> Result<Vec<Post>> {
        let url = self.page_url(page);
        debug!(%url, page, "fetching page");

        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(PostFeedError::Status {
                page,
                status: status.as_u16(),
            });
        }
        let body = response.text()?;
        decode_page(&body)
    }
}

/// Decode a page body (a JSON array of posts)
pub fn decode_page(body: &str) -> Result<Vec<Post>> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(endpoint: &str) -> HttpPostSource {
        HttpPostSource::new(endpoint, Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn appends_page_parameter() {
        let s = source("https://example.com/posts");
        assert_eq!(s.page_url(1).as_str(), "https://example.com/posts?_page=1");
        assert_eq!(s.page_url(12).as_str(), "https://example.com/posts?_page=12");
    }

    #[test]
    fn keeps_existing_query() {
        let s = source("https://example.com/posts?_limit=5");
        assert_eq!(s.page_url(2).as_str(), "https://example.com/posts?_limit=5&_page=2");
    }

    #[test]
    fn rejects_bad_endpoint() {
        let err = HttpPostSource::new("not a url", Duration::from_secs(1))
            .err()
            .unwrap();
        assert!(matches!(err, PostFeedError::InvalidEndpoint(_)));
    }

    #[test]
    fn decode_rejects_non_array() {
        assert!(matches!(decode_page("{}"), Err(PostFeedError::Decode(_))));
        assert_eq!(decode_page("[]").unwrap(), Vec::<Post>::new());
    }
}
