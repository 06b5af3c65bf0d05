//! chainboard-http
//!
//! Production `ChainSource` backed by `reqwest`. Issues a single
//! `GET {base}/get-optionchain-data/` per fetch and decodes the JSON body as
//! a `ChainEnvelope`. No retries, no caching; transport and status failures
//! surface as `ChainboardError::Source`, body decode failures as
//! `ChainboardError::Decode`.
#![warn(missing_docs)]

use std::time::Duration;

use async_trait::async_trait;
use chainboard_core::{ChainEnvelope, ChainSource, ChainboardError};
use tracing::debug;
use url::Url;

/// Endpoint path serving the option-chain envelope, relative to the base URL.
pub const CHAIN_ENDPOINT: &str = "get-optionchain-data/";

const SOURCE_NAME: &str = "chainboard-http";

/// `ChainSource` that fetches envelopes from a dashboard backend over HTTP.
///
/// Construct via [`HttpSource::builder`].
#[derive(Debug)]
pub struct HttpSource {
    http: reqwest::Client,
    endpoint: Url,
    timeout: Option<Duration>,
}

impl HttpSource {
    /// Start building a source for the backend at `base_url`.
    ///
    /// The endpoint path ([`CHAIN_ENDPOINT`]) is joined onto the base URL at
    /// build time; the base may carry its own path prefix.
    #[must_use]
    pub fn builder(base_url: impl Into<String>) -> HttpSourceBuilder {
        HttpSourceBuilder {
            base_url: base_url.into(),
            client: None,
            timeout: None,
        }
    }

    /// The fully resolved endpoint URL this source fetches from.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ChainSource for HttpSource {
    fn name(&self) -> &'static str {
        SOURCE_NAME
    }

    async fn fetch_chain(&self) -> Result<ChainEnvelope, ChainboardError> {
        debug!(url = %self.endpoint, "requesting option chain");

        let mut request = self.http.get(self.endpoint.clone());
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| ChainboardError::source(SOURCE_NAME, e.to_string()))?;

        let envelope = response
            .json::<ChainEnvelope>()
            .await
            .map_err(|e| normalize_body_error(&e))?;

        debug!(rows = envelope.data.len(), "decoded option chain envelope");
        Ok(envelope)
    }
}

/// `reqwest` reports mid-body failures and JSON mismatches through the same
/// error type; only the latter is a decode fault of the backend's payload.
fn normalize_body_error(e: &reqwest::Error) -> ChainboardError {
    if e.is_decode() {
        ChainboardError::decode(e.to_string())
    } else {
        ChainboardError::source(SOURCE_NAME, e.to_string())
    }
}

/// Builder for [`HttpSource`].
pub struct HttpSourceBuilder {
    base_url: String,
    client: Option<reqwest::Client>,
    timeout: Option<Duration>,
}

impl HttpSourceBuilder {
    /// Use a caller-provided `reqwest::Client` instead of a fresh default one.
    #[must_use]
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Bound each fetch by a per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Resolve the endpoint URL and build the source.
    ///
    /// # Errors
    /// Returns `ChainboardError::InvalidArg` if the base URL does not parse
    /// or cannot be joined with the endpoint path.
    pub fn build(self) -> Result<HttpSource, ChainboardError> {
        // A base without a trailing slash would otherwise drop its last path
        // segment during the join.
        let mut base = self.base_url;
        if !base.ends_with('/') {
            base.push('/');
        }

        let endpoint = Url::parse(&base)
            .and_then(|base| base.join(CHAIN_ENDPOINT))
            .map_err(|e| ChainboardError::invalid_arg(format!("base url: {e}")))?;

        Ok(HttpSource {
            http: self.client.unwrap_or_default(),
            endpoint,
            timeout: self.timeout,
        })
    }
}
