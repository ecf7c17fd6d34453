// GitHub API HTTP client.
// Handles authentication, proxying, timeouts, and the repository search call.

use std::time::Duration;

use reqwest::{
    Client, Proxy, StatusCode,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{GhtrendError, Result};

use super::types::{Repository, SearchResponse};

pub const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Client identifier sent with every request.
pub fn user_agent() -> String {
    format!("ghtrend/{}", env!("CARGO_PKG_VERSION"))
}

/// GitHub API client for repository search.
pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    /// Create a client from the run configuration.
    ///
    /// A token that is not a valid header value or a proxy reqwest cannot
    /// parse is left out with a warning.
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));
        headers.insert(USER_AGENT, HeaderValue::from_str(&user_agent())?);

        if let Some(token) = &config.token {
            match HeaderValue::from_str(&format!("token {}", token)) {
                Ok(mut value) => {
                    value.set_sensitive(true);
                    headers.insert(AUTHORIZATION, value);
                    info!("Using GitHub token");
                }
                Err(_) => warn!("Ignoring GitHub token: not a valid header value"),
            }
        }

        let mut builder = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT);

        if let Some(proxy) = &config.proxy {
            match Proxy::all(proxy) {
                Ok(p) => {
                    builder = builder.proxy(p);
                    info!("Proxy → {}", proxy);
                }
                Err(e) => warn!("Ignoring proxy {}: {}", proxy, e),
            }
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: GITHUB_API_BASE.to_string(),
        })
    }

    /// Point the client at a different API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Search repositories, most-starred first.
    pub async fn search_repositories(&self, query: &str, limit: u32) -> Result<Vec<Repository>> {
        let url = format!("{}/search/repositories", self.base_url);
        let per_page = limit.to_string();
        let params = [
            ("q", query),
            ("sort", "stars"),
            ("order", "desc"),
            ("per_page", per_page.as_str()),
        ];

        debug!("GET {} q={}", url, query);
        let response = self.client.get(&url).query(&params).send().await?;

        match response.status() {
            StatusCode::OK => {}
            status => return Err(GhtrendError::Status(status.as_u16())),
        }

        let body = response.text().await?;
        let wrapper: SearchResponse = serde_json::from_str(&body)?;
        debug!(
            "search matched {} repositories, received {}",
            wrapper.total_count,
            wrapper.items.len()
        );
        Ok(wrapper.items)
    }
}
