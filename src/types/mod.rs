//! 型定義モジュール
//!
//! アプリケーション全体で使用される共通的な型定義を管理します。
//! - 設定型と設定エラー
//! - ドメインエラー（not found系）

pub mod config;
pub mod error;

// 便利な再エクスポート
pub use config::{BoardConfig, ConfigError, ConfigResult};
pub use error::{BoardError, BoardResult};
