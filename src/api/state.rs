use crate::types::BoardConfig;
use sqlx::PgPool;
use std::sync::Arc;

/// ハンドラ間で共有するアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<BoardConfig>,
}

impl AppState {
    pub fn new(pool: PgPool, config: BoardConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }
}
