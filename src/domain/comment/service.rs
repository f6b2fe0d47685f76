use super::model::{ArticleComment, NewArticleComment};
use super::repository;
use crate::domain::article::repository as article_repository;
use anyhow::Result;
use sqlx::PgPool;
use tracing::warn;

/// 記事IDからコメント一覧を取得する（古い順）
pub async fn search_article_comments(
    article_id: i64,
    pool: &PgPool,
) -> Result<Vec<ArticleComment>> {
    repository::find_by_article_id(article_id, pool).await
}

/// コメントを保存する
///
/// 親記事が存在しない場合はwarnログを出して握りつぶす（何も挿入しない）。
/// 保存された場合は採番されたIDを返す。
pub async fn save_article_comment(
    new_comment: &NewArticleComment,
    pool: &PgPool,
) -> Result<Option<i64>> {
    let parent = article_repository::find_article_by_id(new_comment.article_id, pool).await?;
    if parent.is_none() {
        warn!(
            article_id = new_comment.article_id,
            "コメントの保存に失敗。親記事が見つかりません"
        );
        return Ok(None);
    }

    let id = repository::insert_comment(new_comment, pool).await?;
    Ok(Some(id))
}

/// コメント本文を更新する
/// 対象が存在しない場合はwarnログを出して握りつぶす
pub async fn update_article_comment(comment_id: i64, content: &str, pool: &PgPool) -> Result<()> {
    let rows = repository::update_comment_content(comment_id, content, pool).await?;
    if rows == 0 {
        warn!(comment_id, "コメントの更新に失敗。コメントが見つかりません");
    }
    Ok(())
}

/// コメントをIDで削除する
pub async fn delete_article_comment(comment_id: i64, pool: &PgPool) -> Result<()> {
    repository::delete_comment_by_id(comment_id, pool).await?;
    Ok(())
}
