//! Fibery GraphQL client.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::FiberyConfig;
use crate::fibery::models::FiberyInfo;
use crate::{Error, Result};

/// Longest response body quoted in a request error.
const MAX_ERROR_BODY: usize = 2048;

/// GraphQL request payload.
#[derive(Debug, Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
}

/// Location of a GraphQL error in the query text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphqlErrorLocation {
    pub line: u32,
    pub column: u32,
}

/// A single entry of a response's `errors[]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphqlError {
    pub message: String,
    #[serde(default)]
    pub locations: Vec<GraphqlErrorLocation>,
    #[serde(default)]
    pub path: Vec<serde_json::Value>,
}

/// GraphQL response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

impl<T> GraphqlResponse<T> {
    /// Message of the first error, if the server reported any.
    pub fn first_error(&self) -> Option<&str> {
        self.errors.first().map(|e| e.message.as_str())
    }
}

/// Client for a Fibery space's GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct FiberyClient {
    endpoint: String,
    http: reqwest::Client,
}

impl FiberyClient {
    /// Create a client for `endpoint` authenticating with `token`.
    pub fn new(endpoint: impl Into<String>, token: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut auth = HeaderValue::from_str(&format!("Token {}", token))
            .map_err(|_| Error::Config("Fibery token contains invalid characters".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into(),
            http,
        })
    }

    /// Create a client for the space described by `config`.
    pub fn from_config(config: &FiberyConfig) -> Result<Self> {
        let info = FiberyInfo::from_config(config);
        Self::new(info.graphql_url(), &config.token)
    }

    /// Create a client from `VINEAPP_FIBERY_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_config(&FiberyConfig::from_env()?)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Execute a query and return the raw JSON envelope.
    pub async fn execute(&self, query: &str) -> Result<GraphqlResponse<serde_json::Value>> {
        self.execute_as(query).await
    }

    /// Execute a query and deserialize `data` into `T`.
    ///
    /// A non-success HTTP status is an error; GraphQL `errors[]` are returned
    /// to the caller inside the envelope.
    pub async fn execute_as<T: DeserializeOwned>(&self, query: &str) -> Result<GraphqlResponse<T>> {
        debug!(endpoint = %self.endpoint, "Executing GraphQL query");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&GraphqlRequest { query })
            .send()
            .await
            .map_err(|e| Error::Request(format!("GraphQL request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Request(format!("Failed to read GraphQL response: {}", e)))?;

        if !status.is_success() {
            warn!(%status, "GraphQL endpoint returned an error status");
            return Err(Error::Request(format!(
                "GraphQL endpoint returned {}: {}",
                status,
                truncate_body(&body)
            )));
        }

        serde_json::from_slice(&body)
            .map_err(|e| Error::Malformed(format!("Unexpected API response format: {}", e)))
    }
}

fn truncate_body(bytes: &[u8]) -> String {
    let mut body = String::from_utf8_lossy(bytes).to_string();
    if body.len() > MAX_ERROR_BODY {
        let mut cut = MAX_ERROR_BODY;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        body.truncate(cut);
        body.push('…');
    }
    body
}
