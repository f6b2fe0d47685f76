pub mod model;
pub mod repository;
pub mod service;

// 公開APIの再エクスポート

// model.rsから
pub use model::{ArticleComment, NewArticleComment};

// service.rsから
pub use service::{
    delete_article_comment, save_article_comment, search_article_comments, update_article_comment,
};
