// ABOUTME: GoogleSearch - web search through the SerpApi Google engine.
// ABOUTME: Reduces organic results to title, link, and snippet.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{default_http_client, env_var};
use crate::error::{ConfigError, ToolError};
use crate::schema::{Field, InputSchema};
use crate::tool::{Describe, Descriptor, Tool};

const SERPAPI_URL: &str = "https://serpapi.com";
const RESULT_COUNT: u32 = 10;
const RESULTS_PREAMBLE: &str = "Here are the results from a google search. \
    The snippets give a brief insight into the information held on the website.";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GoogleSearchInput {
    pub query: String,
    pub location: Option<String>,
}

/// A single organic search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SerpResponse {
    #[serde(default)]
    organic_results: Option<Vec<SearchResult>>,
    #[serde(default)]
    error: Option<String>,
}

/// Searches Google via SerpApi.
pub struct GoogleSearch {
    descriptor: Descriptor,
    schema: InputSchema,
    api_key: String,
    base_url: String,
    http: reqwest::Client,
}

impl GoogleSearch {
    /// Create a new GoogleSearch with a SerpApi key.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            descriptor: Descriptor::new(
                "Google Search Tool",
                "use this to search the internet. Useful for gathering information that's not immediately available",
            ),
            schema: InputSchema::new()
                .field(Field::string("query").describe("the keyword search query"))
                .field(
                    Field::string("location")
                        .optional()
                        .describe("the Google encoded location you want to use for the search"),
                ),
            api_key: api_key.into(),
            base_url: SERPAPI_URL.to_string(),
            http: default_http_client()?,
        })
    }

    /// Create from the SERPAPI_API_KEY environment variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(env_var("SERPAPI_API_KEY")?)
    }

    /// Use a custom reqwest client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.http = client;
        self
    }

    /// Point at a different SerpApi-compatible endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    async fn search(&self, input: &GoogleSearchInput) -> Result<Vec<SearchResult>, anyhow::Error> {
        let num = RESULT_COUNT.to_string();
        let mut params = vec![
            ("engine", "google"),
            ("api_key", self.api_key.as_str()),
            ("q", input.query.as_str()),
            ("num", num.as_str()),
        ];
        if let Some(location) = &input.location {
            params.push(("location", location.as_str()));
        }

        let response = self
            .http
            .get(format!("{}/search.json", self.base_url))
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<SerpResponse>(&text)
                .ok()
                .and_then(|body| body.error)
                .unwrap_or(text);
            anyhow::bail!("SerpApi error ({}): {}", status.as_u16(), message);
        }

        let body: SerpResponse = response.json().await?;

        match body.organic_results {
            Some(results) if !results.is_empty() => Ok(results),
            _ => anyhow::bail!(
                "no organic results{}",
                body.error.map(|e| format!(": {e}")).unwrap_or_default()
            ),
        }
    }
}

/// Render results as the preamble followed by a JSON array.
fn format_results(results: &[SearchResult]) -> Result<String, serde_json::Error> {
    Ok(format!("{}\n{}", RESULTS_PREAMBLE, serde_json::to_string(results)?))
}

impl Describe for GoogleSearch {
    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    fn schema(&self) -> &InputSchema {
        &self.schema
    }
}

#[async_trait]
impl Tool for GoogleSearch {
    type Input = GoogleSearchInput;

    async fn invoke(&self, input: GoogleSearchInput) -> Result<String, ToolError> {
        let results = self.search(&input).await.and_then(|results| {
            debug!(query = %input.query, count = results.len(), "search completed");
            Ok(format_results(&results)?)
        });

        results.map_err(|e| {
            warn!(query = %input.query, error = %e, "search failed");
            ToolError::Search(e)
        })
    }
}
