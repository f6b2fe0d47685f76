use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// コメントエンティティ（投稿者ニックネームを含む読み出し表現）
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ArticleComment {
    pub id: i64,
    pub article_id: i64,
    pub user_id: String,
    pub nickname: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

/// 新規コメントの入力値
#[derive(Debug, Clone, Deserialize)]
pub struct NewArticleComment {
    pub article_id: i64,
    pub user_id: String,
    pub content: String,
}
