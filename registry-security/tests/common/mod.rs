// tests/common/mod.rs
#![allow(dead_code)]

pub mod db;
pub mod fake_registry;

use std::sync::Once;

// テスト環境の初期化を一度だけ実行
static INIT: Once = Once::new();

/// テスト環境を初期化
pub fn init_test_env() {
    INIT.call_once(|| {
        if std::path::Path::new(".env.test").exists() {
            dotenvy::from_filename(".env.test").ok();
        }

        // テスト用のログ設定
        let _ = tracing_subscriber::fmt()
            .with_env_filter("registry_security=debug")
            .with_test_writer()
            .try_init();
    });
}
