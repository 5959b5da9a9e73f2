pub mod config;
pub mod extract;
pub mod llm;

pub use config::{AppConfig, DEFAULT_MAX_RESPONSE_TOKENS, DEFAULT_TOKEN_BUDGET};
pub use extract::{extract_file, ExtractError};
pub use llm::OpenAiChat;
