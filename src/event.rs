use crate::chat::ErrorBody;
use crate::constants::{
    CORS_ALLOW_HEADERS, CORS_ALLOW_METHODS, CORS_ALLOW_ORIGIN, CORS_MAX_AGE,
};
use log::error;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const HEADER_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
pub const HEADER_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
pub const HEADER_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
pub const HEADER_MAX_AGE: &str = "Access-Control-Max-Age";

/// HTTP-style invocation event. Unknown fields such as `headers` are ignored.
///
/// Gateways send `"body": null` for requests without a payload, so both fields
/// tolerate null. An absent body is `{}`; a null body stays `None`.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HttpEvent {
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default = "default_body")]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

fn default_body() -> Option<String> {
    Some("{}".to_string())
}

impl HttpEvent {
    #[cfg(test)]
    pub fn new(method: &str, body: &str) -> Self {
        HttpEvent {
            http_method: Some(method.to_string()),
            body: Some(body.to_string()),
            is_base64_encoded: false,
        }
    }

    /// Missing or null methods are treated as `GET`.
    pub fn method(&self) -> &str {
        self.http_method.as_deref().unwrap_or("GET")
    }
}

#[derive(Debug, Clone)]
pub struct Context {
    pub request_id: String,
}

impl Context {
    pub fn new(request_id: impl Into<String>) -> Self {
        Context {
            request_id: request_id.into(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_base64_encoded: Option<bool>,
}

impl HttpResponse {
    pub fn preflight() -> Self {
        let headers = [
            (HEADER_ALLOW_ORIGIN, CORS_ALLOW_ORIGIN),
            (HEADER_ALLOW_METHODS, CORS_ALLOW_METHODS),
            (HEADER_ALLOW_HEADERS, CORS_ALLOW_HEADERS),
            (HEADER_MAX_AGE, CORS_MAX_AGE),
        ]
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();

        HttpResponse {
            status_code: 200,
            headers,
            body: String::new(),
            is_base64_encoded: None,
        }
    }

    pub fn json<T: Serialize>(status_code: u16, payload: &T) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(HEADER_CONTENT_TYPE.to_string(), "application/json".to_string());
        headers.insert(HEADER_ALLOW_ORIGIN.to_string(), CORS_ALLOW_ORIGIN.to_string());

        let body = serde_json::to_string(payload).unwrap_or_else(|e| {
            error!("failed to serialize response body: {}", e);
            String::new()
        });

        HttpResponse {
            status_code,
            headers,
            body,
            is_base64_encoded: Some(false),
        }
    }

    pub fn error(status_code: u16, message: String) -> Self {
        Self::json(status_code, &ErrorBody { error: message })
    }
}
