//! Resource client for the admin API.

use std::future::Future;

use admin_model::{PageQuery, PageResult, Record, RecordId, ResourceKind};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{StatusCode, Url};
use serde_json::json;

use crate::config::ApiSettings;
use crate::envelope;
use crate::error::{ApiError, Result};

/// User agent string for API requests.
const USER_AGENT_VALUE: &str = concat!("admin-console/", env!("CARGO_PKG_VERSION"));

/// List, remove and status-toggle operations over a resource collection.
///
/// Each call issues exactly one network round trip. Implementations never
/// retry; retry policy belongs to the caller.
pub trait ResourceClient: Send + Sync + 'static {
    /// Fetches one page of records.
    fn list<R: Record>(&self, query: &PageQuery)
    -> impl Future<Output = Result<PageResult<R>>> + Send;

    /// Deletes a record.
    fn remove<R: Record>(&self, id: &RecordId) -> impl Future<Output = Result<()>> + Send;

    /// Sets the active flag of a record.
    fn set_active<R: Record>(
        &self,
        id: &RecordId,
        active: bool,
    ) -> impl Future<Output = Result<()>> + Send;
}

/// `reqwest`-backed [`ResourceClient`].
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    /// Creates a client from connection settings.
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        if let Some(token) = settings.auth_token.as_deref() {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| ApiError::InvalidRequest(format!("invalid auth token: {e}")))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(settings.timeout())
            .build()
            .map_err(|e| ApiError::Network(format!("failed to create HTTP client: {e}")))?;

        let base_url = settings.base_url.trim().trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .map_err(|e| ApiError::InvalidRequest(format!("invalid base URL {base_url}: {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Base URL endpoint paths are appended to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the list URL for a query.
    ///
    /// Parameters are emitted in a fixed order: `page`, `limit`, `sortBy`,
    /// `sortOrder`, the collection's fixed parameters, then the filter.
    pub fn list_url(&self, kind: ResourceKind, query: &PageQuery) -> Result<Url> {
        query.validate()?;
        let mut url = self.endpoint(kind.list_path())?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("page", &query.page.to_string())
                .append_pair("limit", &query.page_size.to_string())
                .append_pair("sortBy", &query.sort_field)
                .append_pair("sortOrder", query.sort_order.as_param());
            for (name, value) in kind.fixed_list_params() {
                pairs.append_pair(name, value);
            }
            if let Some(filter) = query.filter.as_deref().filter(|f| !f.is_empty()) {
                pairs.append_pair(kind.filter_column(), filter);
            }
        }
        Ok(url)
    }

    /// Builds the URL of a per-record endpoint.
    ///
    /// The id is pushed as a single path segment, so `/`, `?`, `#` and `%`
    /// inside it are percent-encoded instead of changing the route.
    pub fn record_url(&self, route: &str, id: &RecordId) -> Result<Url> {
        let mut url = self.endpoint(route)?;
        url.path_segments_mut()
            .map_err(|()| {
                ApiError::InvalidRequest(format!("base URL {} cannot hold a path", self.base_url))
            })?
            .push(id.as_str());
        Ok(url)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| ApiError::InvalidRequest(format!("invalid endpoint {path}: {e}")))
    }

    /// Returns the body of a 2xx response, or the error it describes.
    async fn read_body(response: reqwest::Response) -> Result<Vec<u8>> {
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(server_error(status, &body));
        }
        Ok(body.to_vec())
    }
}

impl ResourceClient for HttpClient {
    async fn list<R: Record>(&self, query: &PageQuery) -> Result<PageResult<R>> {
        let url = self.list_url(R::KIND, query)?;
        tracing::debug!(resource = %R::KIND, %url, "Fetching list page");

        let response = self.client.get(url).send().await?;
        let body = Self::read_body(response).await?;
        let page = envelope::decode_list::<R>(&body).inspect_err(|e| {
            tracing::error!(resource = %R::KIND, error = %e, "List response rejected");
        })?;

        tracing::debug!(
            resource = %R::KIND,
            records = page.records.len(),
            total = page.total,
            "Fetched list page"
        );
        Ok(page)
    }

    async fn remove<R: Record>(&self, id: &RecordId) -> Result<()> {
        let url = self.record_url(R::KIND.delete_route(), id)?;
        tracing::debug!(resource = %R::KIND, %id, "Deleting record");

        let response = self.client.delete(url).send().await?;
        Self::read_body(response).await?;
        Ok(())
    }

    async fn set_active<R: Record>(&self, id: &RecordId, active: bool) -> Result<()> {
        let url = self.record_url(R::KIND.update_route(), id)?;
        tracing::debug!(resource = %R::KIND, %id, active, "Updating record status");

        let response = self
            .client
            .put(url)
            .json(&json!({ "is_active": active }))
            .send()
            .await?;
        Self::read_body(response).await?;
        Ok(())
    }
}

/// Builds a [`ApiError::Server`] from a non-2xx status and its body.
///
/// The reason is the body's `message` field when present, otherwise the
/// canonical status reason.
fn server_error(status: StatusCode, body: &[u8]) -> ApiError {
    let message = serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(serde_json::Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string()
        });

    ApiError::Server {
        status: status.as_u16(),
        message,
    }
}
