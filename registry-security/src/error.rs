// src/error.rs

use sea_orm::DbErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Store error: {0}")]
    StoreError(#[from] DbErr),

    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// ログ出力用の安定したエラー種別
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::StoreError(_) => "store_error",
            AppError::NotFound(_) => "not_found",
            AppError::InvalidInput(_) => "invalid_input",
            AppError::Config(_) => "config_error",
        }
    }

    /// 対象が存在しないだけのエラーか（権限判定では「権限なし」と同義）
    pub fn is_not_found(&self) -> bool {
        match self {
            AppError::NotFound(_) => true,
            AppError::StoreError(DbErr::RecordNotFound(_)) => true,
            _ => false,
        }
    }
}

// Result 型のエイリアス
pub type AppResult<T> = Result<T, AppError>;
