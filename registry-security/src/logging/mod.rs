// src/logging/mod.rs

use crate::config::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 構造化フィールド付きでイベントを出力する
///
/// ```ignore
/// log_with_context!(tracing::Level::ERROR, "Failed to get project",
///     "project" => &project, "error" => &err);
/// ```
#[macro_export]
macro_rules! log_with_context {
    ($level:expr, $msg:expr $(, $($key:expr => $value:expr),* $(,)?)?) => {
        match $level {
            tracing::Level::ERROR => {
                tracing::error!(
                    message = $msg
                    $(, $($key = ?$value,)*)?
                );
            }
            tracing::Level::WARN => {
                tracing::warn!(
                    message = $msg
                    $(, $($key = ?$value,)*)?
                );
            }
            tracing::Level::INFO => {
                tracing::info!(
                    message = $msg
                    $(, $($key = ?$value,)*)?
                );
            }
            tracing::Level::DEBUG => {
                tracing::debug!(
                    message = $msg
                    $(, $($key = ?$value,)*)?
                );
            }
            // TRACE
            _ => {
                tracing::trace!(
                    message = $msg
                    $(, $($key = ?$value,)*)?
                );
            }
        }
    };
}

/// グローバルなトレーシング購読者を設定する
///
/// 既に設定済みの場合は何もしない（テストや組み込み先で複数回呼ばれてもよい）。
/// `RUST_LOG` が設定されていればそちらを優先する。
pub fn init_tracing(config: &Config) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter.as_str()));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .try_init()
        .is_ok()
}
