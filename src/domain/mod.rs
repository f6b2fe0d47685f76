//! ドメイン層
//!
//! 掲示板のエンティティ（記事・コメント）とその業務ロジックを
//! `<entity>/{model, repository, service}` の構成で管理します。

pub mod article;
pub mod comment;
pub mod pagination;
