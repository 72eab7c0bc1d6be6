pub const DEFAULT_UPSTREAM_URL: &str = "https://mad-ai-programming-assistant--preview.poehali.dev/";
pub const ENV_UPSTREAM_URL: &str = "CUSTOM_GPT_URL";
pub const ENV_API_KEY: &str = "CUSTOM_GPT_API_KEY";
pub const UPSTREAM_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const SYSTEM_PROMPT: &str = "You are MadAI, a helpful and friendly AI assistant.";
pub const MAX_TOKENS: u32 = 500;
pub const TEMPERATURE: f64 = 0.7;
pub const NO_RESPONSE: &str = "No response";

pub const METHOD_POST: &str = "POST";
pub const METHOD_OPTIONS: &str = "OPTIONS";

pub const CORS_ALLOW_ORIGIN: &str = "*";
pub const CORS_ALLOW_METHODS: &str = "POST, OPTIONS";
pub const CORS_ALLOW_HEADERS: &str = "Content-Type";
pub const CORS_MAX_AGE: &str = "86400";
