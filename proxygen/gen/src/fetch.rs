//! Schema fetching.
//!
//! The generator needs exactly one thing from the outside world: the schema
//! document. [`SchemaSource`] abstracts where it comes from.
//! [`RemoteSchemaSource`] downloads it from the backend's API definition
//! endpoint, or reads it from disk for `file://` base URLs.

use std::future::Future;
use std::time::Duration;

use proxygen_define::SchemaModel;
use tracing::{Span, debug, instrument};
use url::Url;

use crate::errors::GeneratorError;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Path of the API definition endpoint, relative to the service base URL.
const API_DEFINITION_PATH: &str = "api/abp/api-definition";

/// Produces the schema document for a generation run.
pub trait SchemaSource: Send + Sync {
    /// A description of where the schema comes from, for progress output.
    fn location(&self) -> String;

    /// Fetches and deserializes the schema.
    fn fetch(&self) -> impl Future<Output = Result<SchemaModel, GeneratorError>> + Send;
}

/// Derives the API definition URL from a service base URL.
///
/// The base gains a trailing `/` when missing so the endpoint path is joined
/// below it rather than replacing its last segment.
///
/// ## Examples
///
/// ```
/// use proxygen_gen::fetch::api_definition_url;
///
/// let url = api_definition_url("https://localhost:44300/tenant-a").unwrap();
/// assert_eq!(
///     url.as_str(),
///     "https://localhost:44300/tenant-a/api/abp/api-definition?includeTypes=true"
/// );
/// ```
///
/// ## Errors
///
/// Returns [`GeneratorError::InvalidUrl`] if the base URL cannot be parsed.
pub fn api_definition_url(base_url: &str) -> Result<Url, GeneratorError> {
    let invalid = |source| GeneratorError::InvalidUrl {
        url: base_url.to_string(),
        source,
    };

    let mut base = Url::parse(base_url.trim()).map_err(invalid)?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.set_query(None);

    let mut url = base.join(API_DEFINITION_PATH).map_err(invalid)?;
    url.query_pairs_mut().append_pair("includeTypes", "true");
    Ok(url)
}

/// Loads the schema over HTTP, or from a local file for `file://` URLs.
#[derive(Debug, Clone)]
pub struct RemoteSchemaSource {
    base_url: Url,
    timeout: Duration,
}

impl RemoteSchemaSource {
    /// Creates a source for the given service base URL.
    ///
    /// ## Errors
    ///
    /// Returns [`GeneratorError::InvalidUrl`] if the URL cannot be parsed.
    pub fn new(base_url: &str) -> Result<Self, GeneratorError> {
        let parsed = Url::parse(base_url.trim()).map_err(|source| GeneratorError::InvalidUrl {
            url: base_url.to_string(),
            source,
        })?;
        Ok(Self {
            base_url: parsed,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The URL the schema is requested from.
    pub fn definition_url(&self) -> Result<Url, GeneratorError> {
        if self.base_url.scheme() == "file" {
            return Ok(self.base_url.clone());
        }
        api_definition_url(self.base_url.as_str())
    }

    async fn fetch_file(&self) -> Result<SchemaModel, GeneratorError> {
        let path = self.base_url.to_file_path().map_err(|()| {
            GeneratorError::ConfigError(format!("'{}' is not a valid file URL", self.base_url))
        })?;

        debug!(path = %path.display(), "Reading API definition from file");
        let body = tokio::fs::read(&path)
            .await
            .map_err(|source| GeneratorError::ReadError {
                path: path.display().to_string(),
                source,
            })?;

        Ok(serde_json::from_slice(&body)?)
    }

    #[instrument(
        name = "fetch_api_definition",
        skip(self),
        fields(
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
        )
    )]
    async fn fetch_http(&self) -> Result<SchemaModel, GeneratorError> {
        let url = self.definition_url()?;
        Span::current().record("http.url", url.as_str());

        let client = reqwest::Client::builder().timeout(self.timeout).build()?;
        let response = client.get(url.clone()).send().await?;

        let status = response.status();
        Span::current().record("http.status_code", status.as_u16());

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| status.to_string());
            return Err(GeneratorError::FetchStatus {
                url: url.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        debug!(bytes = body.len(), "Received API definition");
        Ok(serde_json::from_slice(&body)?)
    }
}

impl SchemaSource for RemoteSchemaSource {
    fn location(&self) -> String {
        self.definition_url()
            .map(|url| url.to_string())
            .unwrap_or_else(|_| self.base_url.to_string())
    }

    fn fetch(&self) -> impl Future<Output = Result<SchemaModel, GeneratorError>> + Send {
        async move {
            if self.base_url.scheme() == "file" {
                self.fetch_file().await
            } else {
                self.fetch_http().await
            }
        }
    }
}
