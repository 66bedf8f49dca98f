//! Authenticated HTTP client builder.

use std::time::Duration;

use reqwest::header::{HeaderName, HeaderValue, CONTENT_TYPE};

use crate::auth::RequestAuth;
use crate::error::Error;

/// Timeout applied to every request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Header identifying this SDK and its version to the server.
pub const CLIENT_VERSION_HEADER: &str = "x-client-version";

/// Value sent in [`CLIENT_VERSION_HEADER`].
pub const CLIENT_VERSION: &str = concat!("boooply-sdk-rust/", env!("CARGO_PKG_VERSION"));

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout.
    pub timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: CLIENT_VERSION.to_string(),
        }
    }
}

/// Builder for HTTP clients that attach authentication and version headers
/// to every request.
///
/// There is no retry middleware: each call is sent exactly once.
pub struct AuthenticatedClientBuilder {
    config: HttpClientConfig,
    auth: Option<Box<dyn RequestAuth>>,
}

impl AuthenticatedClientBuilder {
    /// Create a new client builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: HttpClientConfig::default(),
            auth: None,
        }
    }

    /// Set the authentication provider.
    pub fn with_auth(mut self, auth: Box<dyn RequestAuth>) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Replace the whole configuration.
    pub(crate) fn with_config(mut self, config: HttpClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the configured HTTP client.
    pub fn build(self) -> Result<reqwest::Client, Error> {
        let mut headers = match &self.auth {
            Some(auth) => auth.headers()?,
            None => reqwest::header::HeaderMap::new(),
        };
        headers.insert(
            HeaderName::from_static(CLIENT_VERSION_HEADER),
            HeaderValue::from_static(CLIENT_VERSION),
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(self.config.timeout)
            .user_agent(self.config.user_agent)
            .default_headers(headers)
            .build()?;

        Ok(client)
    }
}

impl Default for AuthenticatedClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
