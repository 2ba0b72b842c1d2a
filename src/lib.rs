//! MenuGenius CLI ライブラリ
//!
//! 設定ファイル、バックエンドクライアント、端末表示、対話モード

pub mod browse;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod render;
pub mod upload;

/// ログ出力を初期化（RUST_LOG があればそちらを優先）
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
