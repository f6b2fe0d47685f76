pub mod model;
pub mod repository;
pub mod service;

// 公開APIの再エクスポート

// model.rsから
pub use model::{Article, ArticleUpdate, ArticleWithComments, NewArticle, SearchType};

// service.rsから
pub use service::{
    delete_article, derive_prev_next, get_article_with_comments, get_hashtags, save_article,
    search_articles, search_articles_via_hashtag, update_article,
};
