use super::error::ApiError;
use super::state::AppState;
use crate::domain::comment::model::NewArticleComment;
use crate::domain::comment::service;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

/// コメント投稿のリクエストボディ
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub user_id: String,
    pub content: String,
}

/// コメント投稿のレスポンス（採番されたID）
#[derive(Debug, Serialize)]
pub struct CreateCommentResponse {
    pub id: i64,
}

/// コメント更新のリクエストボディ
#[derive(Debug, Deserialize)]
pub struct UpdateCommentRequest {
    pub content: String,
}

/// POST /articles/{article_id}/comments のハンドラ
/// 親記事が存在しない場合は404を返す
pub async fn create_comment(
    State(state): State<AppState>,
    Path(article_id): Path<i64>,
    Json(request): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CreateCommentResponse>), ApiError> {
    let new_comment = NewArticleComment {
        article_id,
        user_id: request.user_id,
        content: request.content,
    };

    match service::save_article_comment(&new_comment, &state.pool).await? {
        Some(id) => Ok((StatusCode::CREATED, Json(CreateCommentResponse { id }))),
        None => Err(ApiError::NotFound(format!(
            "記事が見つかりません: article_id={}",
            article_id
        ))),
    }
}

/// PUT /comments/{comment_id} のハンドラ
/// 対象がなくてもサービス層が握りつぶすため常に204
pub async fn update_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<i64>,
    Json(request): Json<UpdateCommentRequest>,
) -> Result<StatusCode, ApiError> {
    service::update_article_comment(comment_id, &request.content, &state.pool).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /comments/{comment_id} のハンドラ
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    service::delete_article_comment(comment_id, &state.pool).await?;
    Ok(StatusCode::NO_CONTENT)
}
