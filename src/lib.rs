//! boardoggo - 掲示板（記事 + コメント）バックエンド
//!
//! 記事の一覧・検索・ページング・詳細表示と、コメントの取得・CRUDを
//! JSON APIとして提供します。構成はRepository（永続化アクセス）→
//! Service（業務ルール）→ API（HTTPバインディング）の順に依存します。

pub mod api;
pub mod domain;
pub mod infra;
pub mod types;
