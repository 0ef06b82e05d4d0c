//! HTTP client for the content hub API

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::instrument;
use url::Url;

use crate::error::{Error, Result};
use crate::types::{Endpoint, SearchQuery};

const LOGIN_PATH: &str = "/login/v1/basicauth";
/// Response header carrying the tenant id on a successful login
const TENANT_ID_HEADER: &str = "x-ibm-dx-tenant-id";

/// Client for a single content hub tenant
///
/// Holds the tenant base URL and a cookie-enabled HTTP client, so the
/// session established by [`ContentHubClient::login`] is replayed on
/// subsequent requests. Cheap to clone; clones share the cookie jar.
#[derive(Clone)]
pub struct ContentHubClient {
    base_url: String,
    http_client: reqwest::Client,
    log_bodies: bool,
}

impl std::fmt::Debug for ContentHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentHubClient")
            .field("base_url", &self.base_url)
            .field("log_bodies", &self.log_bodies)
            .finish_non_exhaustive()
    }
}

impl ContentHubClient {
    /// Create a client with default settings
    ///
    /// # Arguments
    ///
    /// * `base_url` - Absolute base URL of the tenant API (e.g.
    ///   `https://content.example.com/api/00000000-0000`)
    ///
    /// # Errors
    ///
    /// Returns [`Error::Url`] if `base_url` is not an absolute URL, or
    /// [`Error::Http`] if the underlying HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::builder(base_url).build()
    }

    /// Create a client builder
    pub fn builder(base_url: impl Into<String>) -> ContentHubClientBuilder {
        ContentHubClientBuilder {
            base_url: base_url.into(),
            log_bodies: false,
        }
    }

    /// Fetch a content item by id from the given API surface
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server answers with a
    /// non-success status, or the body is not valid JSON.
    #[instrument(skip(self))]
    pub async fn content_by_id(&self, endpoint: Endpoint, content_id: &str) -> Result<Value> {
        self.get_json(&format!("{}/{}", endpoint.content_path(), content_id))
            .await
    }

    /// Fetch a published (ready) content item from the delivery service
    ///
    /// # Errors
    ///
    /// See [`ContentHubClient::content_by_id`].
    pub async fn delivery_content_by_id(&self, content_id: &str) -> Result<Value> {
        self.content_by_id(Endpoint::Delivery, content_id).await
    }

    /// Fetch a content item from the authoring service
    ///
    /// Requires a session established via [`ContentHubClient::login`].
    ///
    /// # Errors
    ///
    /// See [`ContentHubClient::content_by_id`].
    pub async fn authoring_content_by_id(&self, content_id: &str) -> Result<Value> {
        self.content_by_id(Endpoint::Authoring, content_id).await
    }

    /// Log in with basic auth credentials
    ///
    /// Establishes the session cookie used by subsequent authoring
    /// requests and resolves with the tenant id reported by the server.
    /// The server may answer 2xx without the tenant header; that case is
    /// `Ok(None)` and callers should decide whether to treat it as a
    /// failed login.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] on a non-success status and [`Error::Http`]
    /// on transport failure.
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<Option<String>> {
        let url = format!("{}{}", self.base_url, LOGIN_PATH);
        let credentials = STANDARD.encode(format!("{username}:{password}"));

        tracing::debug!("GET {}", url);
        let response = self
            .http_client
            .get(&url)
            .header("Authorization", format!("Basic {credentials}"))
            .send()
            .await?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Api { message, status });
        }

        let tenant_id = response
            .headers()
            .get(TENANT_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string);

        match &tenant_id {
            Some(id) => tracing::debug!("logged in to tenant {}", id),
            None => tracing::warn!("login succeeded but no tenant id header was returned"),
        }
        Ok(tenant_id)
    }

    /// Search with a pre-encoded query string, passed through verbatim
    ///
    /// The caller is responsible for percent-encoding `query`; nothing is
    /// escaped here. Use [`ContentHubClient::search`] with a
    /// [`SearchQuery`] to have the encoding done for you.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server answers with a
    /// non-success status, or the body is not valid JSON.
    #[instrument(skip(self))]
    pub async fn search_raw(&self, endpoint: Endpoint, query: &str) -> Result<Value> {
        self.get_json(&format!("{}?{}", endpoint.search_path(), query))
            .await
    }

    /// Search with structured, percent-encoded parameters
    ///
    /// # Errors
    ///
    /// See [`ContentHubClient::search_raw`].
    pub async fn search(&self, endpoint: Endpoint, query: &SearchQuery) -> Result<Value> {
        self.search_raw(endpoint, &query.encode()).await
    }

    /// Search published content via the delivery search service
    ///
    /// # Errors
    ///
    /// See [`ContentHubClient::search_raw`].
    pub async fn search_delivery(&self, query: &SearchQuery) -> Result<Value> {
        self.search(Endpoint::Delivery, query).await
    }

    /// Search via the authoring search service
    ///
    /// Requires a session established via [`ContentHubClient::login`].
    ///
    /// # Errors
    ///
    /// See [`ContentHubClient::search_raw`].
    pub async fn search_authoring(&self, query: &SearchQuery) -> Result<Value> {
        self.search(Endpoint::Authoring, query).await
    }

    /// Issue a GET request and parse the JSON body
    async fn get_json<T>(&self, path_and_query: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path_and_query);
        tracing::debug!("GET {}", url);
        let response = self
            .http_client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;
        self.parse_response(response).await
    }

    /// Check the status code and deserialize the JSON body
    async fn parse_response<T>(&self, response: reqwest::Response) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status().as_u16();
        let body = response.text().await?;

        if !(200..300).contains(&status) {
            tracing::debug!("error response ({}): {}", status, body);
            return Err(Error::Api {
                message: body,
                status,
            });
        }

        if self.log_bodies {
            tracing::debug!("response body: {}", body);
        }
        Ok(serde_json::from_str(&body)?)
    }
}

/// Builder for [`ContentHubClient`]
#[derive(Debug, Clone)]
pub struct ContentHubClientBuilder {
    base_url: String,
    log_bodies: bool,
}

impl ContentHubClientBuilder {
    /// Emit the raw response body of content and search calls at debug
    /// level before parsing (default off)
    pub fn log_bodies(mut self, enabled: bool) -> Self {
        self.log_bodies = enabled;
        self
    }

    /// Build the client
    ///
    /// # Errors
    ///
    /// Returns [`Error::Url`] if the base URL is relative or malformed,
    /// or [`Error::Http`] if the HTTP client cannot be built.
    pub fn build(self) -> Result<ContentHubClient> {
        // Reject relative or malformed URLs up front rather than on the
        // first request
        Url::parse(&self.base_url)?;

        // Cookie jar keeps the session established by login
        let http_client = reqwest::Client::builder().cookie_store(true).build()?;

        Ok(ContentHubClient {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            http_client,
            log_bodies: self.log_bodies,
        })
    }
}
