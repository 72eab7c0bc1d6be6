use crate::chat::ChatReply;
use crate::config::RelayConfig;
use crate::constants::{METHOD_OPTIONS, METHOD_POST};
use crate::error::RelayError;
use crate::event::{Context, HttpEvent, HttpResponse};
use crate::upstream::UpstreamClient;
use crate::utils::{build_chat_request, decode_body, extract_message, process_chat_response};
use log::{error, info, warn};

/// Relays one chat message per invocation to the upstream completion API.
///
/// Without a pinned config, `CUSTOM_GPT_URL` and `CUSTOM_GPT_API_KEY` are read
/// from the environment on every call.
pub struct ChatRelayHandler<C> {
    client: C,
    config: Option<RelayConfig>,
}

impl<C: UpstreamClient> ChatRelayHandler<C> {
    pub fn new(client: C) -> Self {
        ChatRelayHandler {
            client,
            config: None,
        }
    }

    #[cfg(test)]
    pub fn with_config(client: C, config: RelayConfig) -> Self {
        ChatRelayHandler {
            client,
            config: Some(config),
        }
    }

    #[cfg(test)]
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Never fails: every error becomes a JSON error response.
    pub async fn handle(&self, event: &HttpEvent, context: &Context) -> HttpResponse {
        info!(
            "request {}: {} invocation",
            context.request_id,
            event.method()
        );

        let response = match event.method() {
            METHOD_OPTIONS => HttpResponse::preflight(),
            METHOD_POST => match self.relay(event, context).await {
                Ok(response) => response,
                Err(e) => error_response(&context.request_id, e),
            },
            _ => error_response(&context.request_id, RelayError::MethodNotAllowed),
        };

        info!(
            "request {}: responded {}",
            context.request_id, response.status_code
        );
        response
    }

    async fn relay(&self, event: &HttpEvent, context: &Context) -> Result<HttpResponse, RelayError> {
        let body = decode_body(event)?;
        let message = extract_message(&body)?;
        let payload = build_chat_request(&message);

        let config = match &self.config {
            Some(config) => config.clone(),
            None => RelayConfig::from_env(),
        };

        let reply = self.client.post_json(&config, &payload).await?;
        if reply.status != 200 {
            return Err(RelayError::UpstreamStatus(reply.status));
        }

        let reply = process_chat_response(&reply.body)?;
        Ok(HttpResponse::json(
            200,
            &ChatReply {
                reply: &reply,
                request_id: &context.request_id,
            },
        ))
    }
}

fn error_response(request_id: &str, e: RelayError) -> HttpResponse {
    match e {
        RelayError::MethodNotAllowed | RelayError::MissingMessage | RelayError::UpstreamStatus(_) => {
            warn!("request {}: {}", request_id, e)
        }
        _ => error!("request {}: {}", request_id, e.message()),
    }
    HttpResponse::error(e.status_code(), e.message())
}
