use crate::types::BoardError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

/// API層のエラー型
/// ドメインのnot foundは404、それ以外は500に写像する
#[derive(Debug)]
pub enum ApiError {
    /// リクエストが不正（クエリパラメータの検証エラーなど）
    BadRequest(String),
    /// 対象が見つからない
    NotFound(String),
    /// その他の内部エラー
    Internal(anyhow::Error),
}

impl From<anyhow::Error> for ApiError {
    /// anyhowのエラー連鎖からBoardErrorを拾い上げてステータスを決める
    fn from(err: anyhow::Error) -> Self {
        match err.downcast_ref::<BoardError>() {
            Some(board_err) => ApiError::NotFound(board_err.to_string()),
            None => ApiError::Internal(err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Internal(err) => {
                error!(error = %err, "リクエスト処理中に内部エラーが発生しました");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "内部エラーが発生しました".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
