use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Message is required")]
    MissingMessage,

    #[error("API error: {0}")]
    UpstreamStatus(u16),

    #[error("request body is null")]
    NullBody,

    #[error("unexpected upstream reply: {0}")]
    UnexpectedReply(&'static str),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),

    #[error("{0}")]
    Base64(#[from] base64::DecodeError),

    #[error("{0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl RelayError {
    pub fn status_code(&self) -> u16 {
        match self {
            RelayError::MethodNotAllowed => 405,
            RelayError::MissingMessage => 400,
            _ => 500,
        }
    }

    /// Text placed in the `error` field of the response body.
    pub fn message(&self) -> String {
        match self {
            RelayError::MethodNotAllowed
            | RelayError::MissingMessage
            | RelayError::UpstreamStatus(_) => self.to_string(),
            other => format!("Internal error: {}", other),
        }
    }
}
