use super::model::{ArticleComment, NewArticleComment};
use anyhow::{Context, Result};
use sqlx::{PgPool, Row};

/// コメント一覧のSELECT句（投稿者ニックネームをJOINで引く）
const COMMENT_SELECT: &str = r#"
    SELECT
        c.id,
        c.article_id,
        c.user_id,
        u.nickname,
        c.content,
        c.created_at,
        c.modified_at
    FROM article_comments c
    LEFT JOIN user_accounts u ON c.user_id = u.user_id
"#;

/// 指定記事に紐づくコメントを投稿順（古い順）で取得する
pub async fn find_by_article_id(article_id: i64, pool: &PgPool) -> Result<Vec<ArticleComment>> {
    let comments = sqlx::query_as::<_, ArticleComment>(&format!(
        "{} WHERE c.article_id = $1 ORDER BY c.created_at ASC, c.id ASC",
        COMMENT_SELECT
    ))
    .bind(article_id)
    .fetch_all(pool)
    .await
    .context("コメント一覧の取得に失敗しました")?;

    Ok(comments)
}

/// コメントを新規保存し、採番されたIDを返す
pub async fn insert_comment(new_comment: &NewArticleComment, pool: &PgPool) -> Result<i64> {
    let row = sqlx::query(
        r#"
        INSERT INTO article_comments (article_id, user_id, content)
        VALUES ($1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(new_comment.article_id)
    .bind(&new_comment.user_id)
    .bind(&new_comment.content)
    .fetch_one(pool)
    .await
    .context("コメントの保存に失敗しました")?;

    Ok(row.get::<i64, _>("id"))
}

/// コメント本文を更新する。更新された行数を返す（存在しなければ0）
pub async fn update_comment_content(
    comment_id: i64,
    content: &str,
    pool: &PgPool,
) -> Result<u64> {
    let result = sqlx::query(
        "UPDATE article_comments SET content = $2, modified_at = now() WHERE id = $1",
    )
    .bind(comment_id)
    .bind(content)
    .execute(pool)
    .await
    .context("コメントの更新に失敗しました")?;

    Ok(result.rows_affected())
}

/// コメントをIDで削除する。削除された行数を返す
pub async fn delete_comment_by_id(comment_id: i64, pool: &PgPool) -> Result<u64> {
    let result = sqlx::query("DELETE FROM article_comments WHERE id = $1")
        .bind(comment_id)
        .execute(pool)
        .await
        .context("コメントの削除に失敗しました")?;

    Ok(result.rows_affected())
}
