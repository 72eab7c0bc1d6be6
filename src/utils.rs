use crate::chat::{ChatBody, ChatCompletionRequest, ChatMessageRole};
use crate::constants::{DEFAULT_MODEL, MAX_TOKENS, NO_RESPONSE, SYSTEM_PROMPT, TEMPERATURE};
use crate::error::RelayError;
use crate::event::HttpEvent;
use reqwest::header::{HeaderMap, HeaderValue, InvalidHeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use std::{
    error::Error,
    fs,
    io::{self, Read},
};

pub fn build_headers(api_key: Option<&str>) -> Result<HeaderMap, InvalidHeaderValue> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Some(key) = api_key {
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {}", key))?);
    }
    Ok(headers)
}

pub fn build_chat_request(message: &str) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: DEFAULT_MODEL.to_string(),
        messages: vec![
            ChatMessageRole {
                role: "system".to_string(),
                content: SYSTEM_PROMPT.to_string(),
            },
            ChatMessageRole {
                role: "user".to_string(),
                content: message.to_string(),
            },
        ],
        max_tokens: MAX_TOKENS,
        temperature: TEMPERATURE,
    }
}

/// Raw body text, base64-decoded first when the event says so.
pub fn decode_body(event: &HttpEvent) -> Result<String, RelayError> {
    let body = event.body.as_deref().ok_or(RelayError::NullBody)?;
    if event.is_base64_encoded {
        let bytes = base64::decode(body.trim())?;
        Ok(String::from_utf8(bytes)?)
    } else {
        Ok(body.to_string())
    }
}

pub fn extract_message(body: &str) -> Result<String, RelayError> {
    let chat_body: ChatBody = serde_json::from_str(body)?;
    match chat_body.message {
        Some(message) if !message.is_empty() => Ok(message),
        _ => Err(RelayError::MissingMessage),
    }
}

/// Reads `choices[0].message.content`. Only a missing key falls back to the
/// placeholder; present-but-wrong shapes are errors and a null content is
/// relayed as null.
pub fn process_chat_response(body: &str) -> Result<Value, RelayError> {
    let api_response: Value = serde_json::from_str(body)?;
    let placeholder = || Value::String(NO_RESPONSE.to_string());

    let object = api_response
        .as_object()
        .ok_or(RelayError::UnexpectedReply("response is not an object"))?;
    let choice = match object.get("choices") {
        None => return Ok(placeholder()),
        Some(Value::Array(choices)) => choices
            .first()
            .ok_or(RelayError::UnexpectedReply("choices is empty"))?,
        Some(_) => return Err(RelayError::UnexpectedReply("choices is not an array")),
    };
    let choice = choice
        .as_object()
        .ok_or(RelayError::UnexpectedReply("choice is not an object"))?;
    let message = match choice.get("message") {
        None => return Ok(placeholder()),
        Some(Value::Object(message)) => message,
        Some(_) => return Err(RelayError::UnexpectedReply("message is not an object")),
    };

    Ok(message.get("content").cloned().unwrap_or_else(placeholder))
}

/// Reads an event from `path`, or from stdin when `path` is `-`.
pub fn read_event(path: &str) -> Result<HttpEvent, Box<dyn Error>> {
    let mut raw = String::new();
    if path == "-" {
        io::stdin().read_to_string(&mut raw)?;
    } else {
        raw = fs::read_to_string(path)
            .map_err(|e| format!("Failed to open event file {}: {}", path, e))?;
    }
    Ok(serde_json::from_str(&raw)?)
}
