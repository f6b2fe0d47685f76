use crate::domain::comment::model::ArticleComment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 記事エンティティ（投稿者ニックネームを含む読み出し表現）
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Article {
    pub id: i64,
    pub user_id: String,
    pub nickname: Option<String>,
    pub title: String,
    pub content: String,
    pub hashtag: Option<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

/// 新規記事の入力値
#[derive(Debug, Clone, Deserialize)]
pub struct NewArticle {
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub hashtag: Option<String>,
}

/// 記事の部分更新の入力値
/// title/contentはNoneなら変更しない。hashtagは常に上書きする
/// （Noneでハッシュタグを外せる）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub hashtag: Option<String>,
}

/// 記事詳細（本文 + コメント + 前後の記事ID）
#[derive(Debug, Clone, Serialize)]
pub struct ArticleWithComments {
    pub article: Article,
    pub comments: Vec<ArticleComment>,
    pub prev_id: Option<i64>,
    pub next_id: Option<i64>,
}

/// 検索キーワードをどのフィールドに当てるかを表す閉じたenum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SearchType {
    /// 記事タイトルの部分一致
    Title,
    /// 記事本文の部分一致
    Content,
    /// 投稿者のユーザーIDの部分一致
    Id,
    /// 投稿者のニックネームの部分一致
    Nickname,
    /// ハッシュタグの完全一致（"#"付き）
    Hashtag,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_type_deserialize() {
        // クエリパラメータは大文字表記（TITLEなど）で受け取る
        let parsed: SearchType = serde_json::from_str(r#""TITLE""#).unwrap();
        assert_eq!(parsed, SearchType::Title);
        let parsed: SearchType = serde_json::from_str(r#""HASHTAG""#).unwrap();
        assert_eq!(parsed, SearchType::Hashtag);
        // 小文字は受け付けない
        assert!(serde_json::from_str::<SearchType>(r#""title""#).is_err());

        println!("✅ SearchTypeデシリアライズテスト成功");
    }
}
