use std::env;

/// Runtime settings read from the process environment (and `.env`, if present).
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    pub llm: LlmConfig,
}

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub http_referer: Option<String>,
    pub app_title: Option<String>,
    /// Brand used in drafted messages ("<brand> CRM", "The <brand> Team").
    pub brand: String,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://crm.db".to_string());
        let database_max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|n| n.parse::<u32>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(5);

        Self {
            port,
            database_url,
            database_max_connections,
            llm: LlmConfig::from_env(),
        }
    }
}

impl LlmConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("OPENROUTER_API_KEY").ok().filter(|k| !k.is_empty()),
            model: env::var("OPENROUTER_MODEL").unwrap_or_else(|_| "openrouter/auto".to_string()),
            base_url: env::var("OPENROUTER_BASE_URL")
                .unwrap_or_else(|_| "https://openrouter.ai/api/v1".to_string()),
            http_referer: env::var("OPENROUTER_HTTP_REFERER").ok(),
            app_title: env::var("OPENROUTER_APP_TITLE").ok(),
            brand: env::var("CRM_BRAND").unwrap_or_else(|_| "Qawafel".to_string()),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "openrouter/auto".to_string(),
            base_url: "https://openrouter.ai/api/v1".to_string(),
            http_referer: None,
            app_title: None,
            brand: "Qawafel".to_string(),
        }
    }
}
