// src/config.rs
use crate::error::{AppError, AppResult};
use dotenvy::dotenv;
use std::env;

const DEFAULT_LOG_FILTER: &str = "registry_security=info,sea_orm=warn";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_schema: Option<String>,
    pub max_connections: u32,
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenv().ok(); // .env ファイルを読み込む (存在しなくてもエラーにしない)
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意のキー参照関数から設定を組み立てる（テストでは環境変数を汚さないために使用）
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| AppError::Config("DATABASE_URL is not set".to_string()))?;

        let db_schema = lookup("DB_SCHEMA").filter(|v| !v.trim().is_empty());

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) => raw.trim().parse::<u32>().map_err(|_| {
                AppError::Config(format!("DB_MAX_CONNECTIONS must be a number: {}", raw))
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let log_filter = lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Config {
            database_url,
            db_schema,
            max_connections,
            log_filter,
        })
    }
}
