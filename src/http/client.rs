// src/http/client.rs
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use tracing::{debug, warn};

use super::models::{HttpRequest, HttpResponse, TransportError};
use crate::common::ClientConfig;

#[async_trait]
pub trait HttpPostClient: Send + Sync {
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[async_trait]
pub trait HttpGetClient: Send + Sync {
    async fn get(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// HTTP transport backed by `reqwest`.
///
/// Non-2xx answers come back as `Ok(HttpResponse)` with the server's status
/// and body. `Err` is reserved for requests that got no answer.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .no_proxy()
            .timeout(config.timeout())
            .build()?;
        Ok(Self::new(client))
    }

    async fn send(
        &self,
        method: &'static str,
        mut builder: RequestBuilder,
        request: HttpRequest,
    ) -> Result<HttpResponse, TransportError> {
        if let Some(headers) = &request.headers {
            for (name, value) in headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            warn!(method, url = %request.url, error = %e, "Request got no response");
            TransportError::from(e)
        })?;

        let status_code = response.status().as_u16();
        let bytes = response.bytes().await?;
        let body = parse_body(&bytes);

        let response = HttpResponse { status_code, body };
        debug!(
            method,
            url = %request.url,
            status = status_code,
            success = response.is_success(),
            "Response received"
        );

        Ok(response)
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new(Client::new())
    }
}

#[async_trait]
impl HttpPostClient for ReqwestHttpClient {
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let builder = self.client.post(&request.url);
        self.send("POST", builder, request).await
    }
}

#[async_trait]
impl HttpGetClient for ReqwestHttpClient {
    async fn get(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let builder = self.client.get(&request.url);
        self.send("GET", builder, request).await
    }
}

/// JSON when the body parses, raw text otherwise, `Null` when empty
fn parse_body(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}
