//! HTTPバインディング層
//!
//! axumハンドラとルータの定義。ドメイン層のサービスをJSON APIとして公開します。

pub mod article;
pub mod comment;
pub mod error;
pub mod state;

use axum::routing::{get, post, put};
use axum::Router;
use state::AppState;
use tracing::info;

/// GET /health のハンドラ
async fn health_handler() -> &'static str {
    info!("ヘルスチェックを受信");
    "Healthy"
}

/// アプリケーションのメインルータを構築する
pub fn main_router(state: AppState) -> Router {
    let article_router = Router::new()
        .route("/articles", get(article::list_articles))
        .route("/articles/hashtags", get(article::list_hashtags))
        .route("/articles/search-hashtag", get(article::search_hashtag))
        .route("/articles/{article_id}", get(article::article_detail))
        .route(
            "/articles/{article_id}/comments",
            post(comment::create_comment),
        );

    let comment_router = Router::new().route(
        "/comments/{comment_id}",
        put(comment::update_comment).delete(comment::delete_comment),
    );

    Router::new()
        .route("/health", get(health_handler))
        .merge(article_router)
        .merge(comment_router)
        .with_state(state)
}
