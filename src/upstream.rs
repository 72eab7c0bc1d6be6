use crate::chat::ChatCompletionRequest;
use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::utils::build_headers;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;

/// Status and raw body of the upstream answer.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: String,
}

/// The single outbound call the handler makes.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    async fn post_json(
        &self,
        config: &RelayConfig,
        payload: &ChatCompletionRequest,
    ) -> Result<UpstreamReply, RelayError>;
}

#[async_trait]
impl UpstreamClient for Client {
    async fn post_json(
        &self,
        config: &RelayConfig,
        payload: &ChatCompletionRequest,
    ) -> Result<UpstreamReply, RelayError> {
        let headers = build_headers(config.api_key.as_deref())?;

        debug!(
            "POST {} (authorization: {})",
            config.upstream_url,
            headers.contains_key(reqwest::header::AUTHORIZATION)
        );

        let response = self
            .post(&config.upstream_url)
            .headers(headers)
            .timeout(config.timeout)
            .json(payload)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(UpstreamReply { status, body })
    }
}
