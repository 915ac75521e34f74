use anyhow::Result;
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http_host: String,
    pub http_port: u16,
    pub database_url: String,
    pub log_level: String,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        dotenv().ok();

        let http_host = env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let http_port = env::var("HTTP_PORT")
            .unwrap_or_else(|_| "8010".to_string())
            .parse()
            .unwrap_or(8010);

        let db_path = env::var("DB_PATH").unwrap_or_else(|_| "rides.db".to_string());
        let database_url = format!("sqlite://{}?mode=rwc", db_path);

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            http_host,
            http_port,
            database_url,
            log_level,
        })
    }
}
