//! HTTP transport seam.
//!
//! The client only needs "perform a request, return status and body". [`Transport`]
//! captures that; [`ReqwestTransport`] implements it with a blocking reqwest client.
//! Timeouts and TLS are configured here, never in the protocol layer.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;

use crate::error::TransportError;

/// Status and fully-read body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-2xx response into [`TransportError::Status`].
    pub fn error_for_status(self) -> Result<Self, TransportError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(TransportError::Status {
                status: self.status,
                body: self.body,
            })
        }
    }
}

/// A blocking HTTP client able to GET and POST.
pub trait Transport {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;

    fn post(
        &self,
        url: &str,
        content_type: &str,
        body: String,
    ) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        (**self).get(url)
    }

    fn post(
        &self,
        url: &str,
        content_type: &str,
        body: String,
    ) -> Result<HttpResponse, TransportError> {
        (**self).post(url, content_type, body)
    }
}

/// Configuration for [`ReqwestTransport`].
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// OAuth bearer token sent as `Authorization: Bearer ...`. Default: none.
    pub token: Option<String>,
    /// User agent. Default: `cellfeed/<version>`.
    pub user_agent: String,
    /// Timeout for a whole request. Default: 30 seconds.
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            token: None,
            user_agent: concat!("cellfeed/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// [`Transport`] backed by `reqwest::blocking::Client`.
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
    token: Option<String>,
}

impl ReqwestTransport {
    /// Build a reqwest client from `config`.
    pub fn new(config: TransportConfig) -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            token: config.token,
        })
    }

    /// Wrap an already configured client (e.g. one that injects its own auth headers).
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self {
            client,
            token: None,
        }
    }

    fn send(
        &self,
        request: reqwest::blocking::RequestBuilder,
    ) -> Result<HttpResponse, TransportError> {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(HttpResponse { status, body })
    }
}

impl Transport for ReqwestTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        self.send(self.client.get(url))
    }

    fn post(
        &self,
        url: &str,
        content_type: &str,
        body: String,
    ) -> Result<HttpResponse, TransportError> {
        self.send(self.client.post(url).header(CONTENT_TYPE, content_type).body(body))
    }
}
