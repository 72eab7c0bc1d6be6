use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound `POST` body.
#[derive(Deserialize, Debug)]
pub struct ChatBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessageRole>,
    pub max_tokens: u32,
    pub temperature: f64,
}

#[derive(Debug, Serialize)]
pub struct ChatMessageRole {
    pub role: String,
    pub content: String,
}

#[derive(Serialize, Debug)]
pub struct ChatReply<'a> {
    pub reply: &'a Value,
    pub request_id: &'a str,
}

#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub error: String,
}
