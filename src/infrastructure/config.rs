use std::path::PathBuf;

/// Single authoritative corpus budget, used both as the trim guard and
/// the trim target.
pub const DEFAULT_TOKEN_BUDGET: usize = 9000;

pub const DEFAULT_MAX_RESPONSE_TOKENS: u32 = 1000;

const DEFAULT_SYSTEM_PROMPT: &str = "You are an educational assistant. Your role is to provide \
comprehensive answers to academic queries using both the provided educational data and your \
general knowledge. Be proactive in understanding the student's interests and learning goals. \
When interacting: 1) Introduce yourself as an educational advisor, 2) Provide detailed, \
well-structured explanations, 3) Ask follow-up questions to better understand the student's \
needs, 4) Suggest related topics they might be interested in, 5) Maintain a supportive and \
encouraging tone. If a question is unclear, ask for clarification to ensure you provide the \
most relevant and helpful response.";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub source_dir: PathBuf,
    pub token_budget: usize,
    pub system_prompt: String,
    pub llm: LlmConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub max_response_tokens: u32,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("./data"),
            token_budget: DEFAULT_TOKEN_BUDGET,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            llm: LlmConfig {
                base_url: "https://api.openai.com".to_string(),
                api_key: String::new(),
                model: "gpt-4".to_string(),
                max_response_tokens: DEFAULT_MAX_RESPONSE_TOKENS,
            },
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
        }
    }
}

impl AppConfig {
    /// Builds the configuration from environment variables, falling back
    /// to defaults for anything unset. `dotenvy` should already have run.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            source_dir: env_var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.source_dir),
            token_budget: env_var("TOKEN_BUDGET")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.token_budget),
            system_prompt: env_var("SYSTEM_PROMPT").unwrap_or(defaults.system_prompt),
            llm: LlmConfig {
                base_url: env_var("LLM_BASE_URL").unwrap_or(defaults.llm.base_url),
                api_key: env_var("OPENAI_API_KEY").unwrap_or(defaults.llm.api_key),
                model: env_var("LLM_MODEL").unwrap_or(defaults.llm.model),
                max_response_tokens: env_var("LLM_MAX_TOKENS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.llm.max_response_tokens),
            },
            server: ServerConfig {
                host: env_var("SERVER_HOST").unwrap_or(defaults.server.host),
                port: env_var("SERVER_PORT")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.server.port),
            },
        }
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
