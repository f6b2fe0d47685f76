use thiserror::Error;

/// ドメイン層のエラー型
/// 掲示板ドメインで起きるエラーは実質「対象が見つからない」のみ
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// 記事が見つからない
    #[error("記事が見つかりません: article_id={0}")]
    ArticleNotFound(i64),

    /// コメントが見つからない
    #[error("コメントが見つかりません: comment_id={0}")]
    CommentNotFound(i64),
}

/// ドメインエラーのResult型エイリアス
pub type BoardResult<T> = std::result::Result<T, BoardError>;
