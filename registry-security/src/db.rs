// src/db.rs
use crate::config::Config;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;

pub type DbPool = DatabaseConnection;

/// 接続オプションを組み立てる（スキーマ指定があれば search_path に設定）
pub fn connect_options(config: &Config) -> ConnectOptions {
    let mut opt = ConnectOptions::new(config.database_url.clone());

    opt.max_connections(config.max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(8))
        .max_lifetime(Duration::from_secs(8 * 60))
        .sqlx_logging(false);

    if let Some(schema) = &config.db_schema {
        opt.set_schema_search_path(schema.clone());
    }

    opt
}

pub async fn create_db_pool(config: &Config) -> Result<DbPool, DbErr> {
    tracing::debug!(schema = ?config.db_schema, "Connecting to registry database");
    Database::connect(connect_options(config)).await
}
