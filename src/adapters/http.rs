use crate::domain::ports::{ConfigProvider, FacadeCaller};
use crate::utils::error::{ClientError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct RequestEnvelope<'a> {
    #[serde(rename = "request-id")]
    request_id: u64,
    #[serde(rename = "type")]
    facade: &'a str,
    request: &'a str,
    params: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct ResponseEnvelope {
    #[serde(rename = "request-id")]
    request_id: u64,
    #[serde(default)]
    error: Option<String>,
    #[serde(rename = "error-code", default)]
    error_code: Option<String>,
    #[serde(default)]
    response: serde_json::Value,
}

/// `FacadeCaller` over HTTP: one JSON envelope POSTed per call.
pub struct HttpFacade {
    client: Client,
    endpoint: String,
    facade: String,
    next_request_id: AtomicU64,
}

impl HttpFacade {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut headers = HeaderMap::new();
        for (name, value) in config.headers() {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                ClientError::InvalidConfigValueError {
                    field: "controller.headers".to_string(),
                    value: name.clone(),
                    reason: e.to_string(),
                }
            })?;
            let value = HeaderValue::from_str(value).map_err(|e| {
                ClientError::InvalidConfigValueError {
                    field: format!("controller.headers.{}", name.as_str()),
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
            headers.insert(name, value);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint().to_string(),
            facade: config.facade().to_string(),
            next_request_id: AtomicU64::new(1),
        })
    }
}

#[async_trait]
impl FacadeCaller for HttpFacade {
    async fn facade_call(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<serde_json::Value> {
        let request_id = self.next_request_id.fetch_add(1, Ordering::Relaxed);
        let envelope = RequestEnvelope {
            request_id,
            facade: &self.facade,
            request: method,
            params,
        };

        tracing::debug!(
            "POST {} ({}.{}, request-id {})",
            self.endpoint,
            self.facade,
            method,
            request_id
        );
        let response = self.client.post(&self.endpoint).json(&envelope).send().await?;

        let status = response.status();
        tracing::debug!("Facade response status: {}", status);
        if !status.is_success() {
            return Err(ClientError::Transport {
                message: format!("{}.{} failed: HTTP {}", self.facade, method, status),
            });
        }

        let reply: ResponseEnvelope = response.json().await?;
        if reply.request_id != request_id {
            return Err(ClientError::Transport {
                message: format!(
                    "response request-id {} does not match request {}",
                    reply.request_id, request_id
                ),
            });
        }
        let message = reply.error.filter(|m| !m.is_empty());
        let code = reply.error_code.filter(|c| !c.is_empty());
        if message.is_some() || code.is_some() {
            return Err(ClientError::Facade {
                message: message
                    .or_else(|| code.as_ref().map(|c| format!("facade error ({})", c)))
                    .unwrap_or_default(),
                code,
            });
        }

        Ok(reply.response)
    }
}
