use super::error::ApiError;
use super::state::AppState;
use crate::domain::article::model::{Article, ArticleWithComments, SearchType};
use crate::domain::article::service;
use crate::domain::pagination::{pagination_bar_numbers, Page, Pageable, Sort};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

/// 記事一覧のクエリパラメータ
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListParams {
    pub search_type: Option<SearchType>,
    pub search_value: Option<String>,
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub sort: Option<String>,
}

impl ArticleListParams {
    /// クエリパラメータからページング指定を組み立てる
    /// sortの指定が不正な場合はBadRequestにする
    fn to_pageable(&self, default_size: i64) -> Result<Pageable, ApiError> {
        let sort = match &self.sort {
            Some(raw) => Sort::parse(raw)
                .ok_or_else(|| ApiError::BadRequest(format!("不正なsort指定です: {}", raw)))?,
            None => Sort::default(),
        };

        Ok(Pageable::new(
            self.page.unwrap_or(0),
            self.size.unwrap_or(default_size),
            sort,
        ))
    }
}

/// 記事一覧レスポンス（1ページ分 + ページネーションバー）
#[derive(Debug, Serialize)]
pub struct ArticleListResponse {
    pub articles: Vec<Article>,
    pub page: i64,
    pub size: i64,
    pub total_elements: i64,
    pub total_pages: i64,
    pub pagination_bar: Vec<i64>,
}

impl ArticleListResponse {
    fn from_page(page: Page<Article>, bar_length: i64) -> Self {
        let total_pages = page.total_pages();
        let pagination_bar = pagination_bar_numbers(page.page, total_pages, bar_length);
        Self {
            articles: page.items,
            page: page.page,
            size: page.size,
            total_elements: page.total_elements,
            total_pages,
            pagination_bar,
        }
    }
}

/// GET /articles のハンドラ
/// 検索タイプ・キーワード・ページングを受け取り1ページ分を返す
pub async fn list_articles(
    State(state): State<AppState>,
    Query(params): Query<ArticleListParams>,
) -> Result<Json<ArticleListResponse>, ApiError> {
    let pageable = params.to_pageable(state.config.default_page_size)?;

    let page = service::search_articles(
        params.search_type,
        params.search_value.as_deref(),
        &pageable,
        &state.pool,
    )
    .await?;

    Ok(Json(ArticleListResponse::from_page(
        page,
        state.config.pagination_bar_length,
    )))
}

/// GET /articles/{article_id} のハンドラ
/// 記事詳細（コメント + 前後記事ID）を返す。存在しなければ404
pub async fn article_detail(
    State(state): State<AppState>,
    Path(article_id): Path<i64>,
) -> Result<Json<ArticleWithComments>, ApiError> {
    let detail = service::get_article_with_comments(article_id, &state.pool).await?;
    Ok(Json(detail))
}

/// GET /articles/search-hashtag のハンドラ
/// ハッシュタグ（"#"付き）で1ページ分を返す。未指定なら空ページ
pub async fn search_hashtag(
    State(state): State<AppState>,
    Query(params): Query<ArticleListParams>,
) -> Result<Json<ArticleListResponse>, ApiError> {
    let pageable = params.to_pageable(state.config.default_page_size)?;
    let hashtag = params.search_value.as_deref().unwrap_or("");

    let page = service::search_articles_via_hashtag(hashtag, &pageable, &state.pool).await?;

    Ok(Json(ArticleListResponse::from_page(
        page,
        state.config.pagination_bar_length,
    )))
}

/// GET /articles/hashtags のハンドラ
/// 使用中のハッシュタグ一覧を返す
pub async fn list_hashtags(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, ApiError> {
    let hashtags = service::get_hashtags(&state.pool).await?;
    Ok(Json(hashtags))
}
