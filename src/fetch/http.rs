//! HTTP fetch client for the DummyJSON-style recipes API.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use tokio::time::timeout;
use uuid::Uuid;

use crate::config::ApiConfig;
use crate::fetch::timeout::TimeoutConfig;
use crate::fetch::{FetchClient, FetchError};
use crate::item::Item;

/// Fields requested from the API; enough for list rows and the detail view.
const SELECT_FIELDS: &str =
    "name,rating,difficulty,tags,image,ingredients,instructions,prepTimeMinutes";

/// Envelope returned by both the listing and the search endpoint.
#[derive(Debug, Deserialize)]
struct RecipesPage {
    recipes: Vec<Item>,
    #[serde(default)]
    total: u64,
    #[serde(default)]
    skip: u64,
    #[serde(default)]
    limit: u64,
}

pub struct HttpFetchClient {
    client: Client,
    base_url: Url,
    timeouts: TimeoutConfig,
}

impl HttpFetchClient {
    pub fn new(api: &ApiConfig) -> Result<Self, FetchError> {
        let timeouts = TimeoutConfig::from(api);
        let client = Client::builder()
            .connect_timeout(timeouts.connect)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        // Url::join replaces the last segment unless the base ends with '/'.
        let mut base = api.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            timeouts,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, FetchError> {
        self.base_url
            .join(path)
            .map_err(|e| FetchError::InvalidUrl(e.to_string()))
    }

    async fn get_recipes(&self, url: Url) -> Result<Vec<Item>, FetchError> {
        let request_id = Uuid::new_v4().to_string();
        tracing::debug!(request_id = %request_id, url = %url, "Fetching recipes");

        match timeout(self.timeouts.request, self.send(&request_id, url)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(request_id = %request_id, "Fetch timed out");
                Err(FetchError::Timeout {
                    duration: self.timeouts.request.as_secs(),
                })
            }
        }
    }

    async fn send(&self, request_id: &str, url: Url) -> Result<Vec<Item>, FetchError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    duration: self.timeouts.connect.as_secs(),
                }
            } else {
                FetchError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(request_id = %request_id, status = status.as_u16(), "Non-success status");
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(format!("Failed to read response body: {}", e)))?;

        let page: RecipesPage =
            serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))?;

        tracing::debug!(
            request_id = %request_id,
            status = status.as_u16(),
            count = page.recipes.len(),
            total = page.total,
            skip = page.skip,
            limit = page.limit,
            "Fetched recipes"
        );

        Ok(page.recipes)
    }
}

#[async_trait]
impl FetchClient for HttpFetchClient {
    async fn fetch_page(&self, offset: usize, limit: usize) -> Result<Vec<Item>, FetchError> {
        let mut url = self.endpoint("recipes")?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("skip", &offset.to_string())
            .append_pair("select", SELECT_FIELDS);
        self.get_recipes(url).await
    }

    async fn fetch_search(&self, query: &str) -> Result<Vec<Item>, FetchError> {
        let mut url = self.endpoint("recipes/search")?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("select", SELECT_FIELDS);
        self.get_recipes(url).await
    }
}
