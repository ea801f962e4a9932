use sqlx::SqlitePool;

use crate::config::LlmConfig;
use crate::services::llm::LlmClient;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub llm: LlmClient,
}

impl AppState {
    pub fn new(pool: SqlitePool, llm_config: LlmConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            pool,
            llm: LlmClient::new(llm_config)?,
        })
    }
}
