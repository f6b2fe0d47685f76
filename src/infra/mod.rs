//! インフラストラクチャ層
//!
//! データベース接続・マイグレーションなど基盤的な機能を提供します。

pub mod db;

pub use db::{create_pool, initialize_database, setup_database};
