use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use tokio::time::timeout;
use url::Url;

use crate::config::ClientConfig;
use crate::search::error::SearchError;
use crate::search::types::{Query, SearchEnvelope, SearchResult};

/// Longest slice of an error body kept for diagnostics.
const ERROR_BODY_LIMIT: usize = 512;

/// Source of search results.
///
/// `Ok(None)` means the backend reported no results (`null` or missing).
pub trait SearchBackend: Send + Sync + 'static {
    fn search(
        &self,
        query: &Query,
    ) -> impl Future<Output = Result<Option<Vec<SearchResult>>, SearchError>> + Send;
}

/// Search backend reached over HTTP with a GET per query.
pub struct HttpSearchBackend {
    client: Client,
    endpoint: Url,
    query_param: String,
    request_timeout: Duration,
}

impl HttpSearchBackend {
    pub fn new(config: &ClientConfig) -> Result<Self, SearchError> {
        let endpoint = endpoint_url(&config.base_url, &config.search_path)?;
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .build()
            .map_err(SearchError::Client)?;

        Ok(Self {
            client,
            endpoint,
            query_param: config.query_param.clone(),
            request_timeout: Duration::from_secs(config.timeout_seconds as u64),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Full request URL with the query percent-encoded as a query pair.
    pub fn request_url(&self, query: &Query) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair(&self.query_param, query.as_str());
        url
    }

    async fn do_search(&self, url: Url) -> Result<Option<Vec<SearchResult>>, SearchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SearchError::Transport {
                endpoint: self.endpoint.to_string(),
                source: e,
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| SearchError::Transport {
                endpoint: self.endpoint.to_string(),
                source: e,
            })?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body);
            return Err(SearchError::Status {
                status: status.as_u16(),
                body: truncate_body(&text),
            });
        }

        let envelope: SearchEnvelope = serde_json::from_slice(&body)?;
        Ok(envelope.results)
    }
}

impl SearchBackend for HttpSearchBackend {
    async fn search(&self, query: &Query) -> Result<Option<Vec<SearchResult>>, SearchError> {
        let url = self.request_url(query);
        tracing::debug!(url = %url, "Dispatching search request");

        match timeout(self.request_timeout, self.do_search(url)).await {
            Ok(result) => result,
            Err(_) => Err(SearchError::Timeout {
                duration: self.request_timeout.as_secs(),
            }),
        }
    }
}

/// Joins `search_path` onto the path of `base_url`, keeping any path prefix.
fn endpoint_url(base_url: &str, search_path: &str) -> Result<Url, SearchError> {
    let mut url = Url::parse(base_url).map_err(|e| SearchError::InvalidUrl {
        url: base_url.to_string(),
        source: e,
    })?;
    let path = format!("{}{}", url.path().trim_end_matches('/'), search_path);
    url.set_path(&path);
    url.set_query(None);
    Ok(url)
}

fn truncate_body(text: &str) -> String {
    if text.len() <= ERROR_BODY_LIMIT {
        return text.to_string();
    }
    let mut end = ERROR_BODY_LIMIT;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}
