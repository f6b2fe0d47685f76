use super::model::{Article, ArticleUpdate, NewArticle, SearchType};
use crate::domain::pagination::{Page, Pageable};
use anyhow::{Context, Result};
use sqlx::{PgPool, Postgres, QueryBuilder, Row};

/// 記事検索のフィルター条件（検索タイプ + キーワード）
#[derive(Debug, Clone)]
pub struct ArticleSearchFilter {
    pub search_type: SearchType,
    pub keyword: String,
}

/// 記事一覧のSELECT句（投稿者ニックネームをJOINで引く）
const ARTICLE_SELECT: &str = r#"
    SELECT
        a.id,
        a.user_id,
        u.nickname,
        a.title,
        a.content,
        a.hashtag,
        a.created_at,
        a.modified_at
    FROM articles a
    LEFT JOIN user_accounts u ON a.user_id = u.user_id
"#;

/// フィルターなしの記事一覧をページングして取得する
pub async fn find_articles(pageable: &Pageable, pool: &PgPool) -> Result<Page<Article>> {
    search_with_filter(None, pageable, pool).await
}

/// タイトルの部分一致で記事を検索する
pub async fn find_by_title_containing(
    keyword: &str,
    pageable: &Pageable,
    pool: &PgPool,
) -> Result<Page<Article>> {
    search_with_filter(
        Some(ArticleSearchFilter {
            search_type: SearchType::Title,
            keyword: keyword.to_string(),
        }),
        pageable,
        pool,
    )
    .await
}

/// 本文の部分一致で記事を検索する
pub async fn find_by_content_containing(
    keyword: &str,
    pageable: &Pageable,
    pool: &PgPool,
) -> Result<Page<Article>> {
    search_with_filter(
        Some(ArticleSearchFilter {
            search_type: SearchType::Content,
            keyword: keyword.to_string(),
        }),
        pageable,
        pool,
    )
    .await
}

/// 投稿者のユーザーIDの部分一致で記事を検索する
pub async fn find_by_user_id_containing(
    keyword: &str,
    pageable: &Pageable,
    pool: &PgPool,
) -> Result<Page<Article>> {
    search_with_filter(
        Some(ArticleSearchFilter {
            search_type: SearchType::Id,
            keyword: keyword.to_string(),
        }),
        pageable,
        pool,
    )
    .await
}

/// 投稿者のニックネームの部分一致で記事を検索する
pub async fn find_by_nickname_containing(
    keyword: &str,
    pageable: &Pageable,
    pool: &PgPool,
) -> Result<Page<Article>> {
    search_with_filter(
        Some(ArticleSearchFilter {
            search_type: SearchType::Nickname,
            keyword: keyword.to_string(),
        }),
        pageable,
        pool,
    )
    .await
}

/// ハッシュタグの完全一致で記事を検索する（"#"付きの値を受け取る）
pub async fn find_by_hashtag(
    hashtag: &str,
    pageable: &Pageable,
    pool: &PgPool,
) -> Result<Page<Article>> {
    search_with_filter(
        Some(ArticleSearchFilter {
            search_type: SearchType::Hashtag,
            keyword: hashtag.to_string(),
        }),
        pageable,
        pool,
    )
    .await
}

/// QueryBuilderベースで検索条件を動的に構築し、件数と1ページ分を取得する
async fn search_with_filter(
    filter: Option<ArticleSearchFilter>,
    pageable: &Pageable,
    pool: &PgPool,
) -> Result<Page<Article>> {
    // 総件数クエリ
    let mut count_qb = QueryBuilder::<Postgres>::new(
        "SELECT COUNT(*) FROM articles a LEFT JOIN user_accounts u ON a.user_id = u.user_id",
    );
    push_filter(&mut count_qb, filter.as_ref());

    let total_elements: i64 = count_qb
        .build_query_scalar()
        .fetch_one(pool)
        .await
        .context("記事件数の取得に失敗しました")?;

    // ページ本体のクエリ
    let mut qb = QueryBuilder::<Postgres>::new(ARTICLE_SELECT);
    push_filter(&mut qb, filter.as_ref());

    qb.push(" ORDER BY ")
        .push(pageable.sort.key.column())
        .push(" ")
        .push(pageable.sort.order.keyword());
    // ソートキーが同値の行でもページ分割が安定するようidで補助ソート
    qb.push(", a.id DESC");
    qb.push(" LIMIT ").push_bind(pageable.size);
    qb.push(" OFFSET ").push_bind(pageable.offset());

    let items = qb
        .build_query_as::<Article>()
        .fetch_all(pool)
        .await
        .context("記事一覧の取得に失敗しました")?;

    Ok(Page {
        items,
        page: pageable.page,
        size: pageable.size,
        total_elements,
    })
}

/// 検索タイプに対応するWHERE句を組み立てる
fn push_filter(qb: &mut QueryBuilder<'_, Postgres>, filter: Option<&ArticleSearchFilter>) {
    let Some(filter) = filter else {
        return;
    };

    qb.push(" WHERE ");
    let pattern = format!("%{}%", filter.keyword);
    match filter.search_type {
        SearchType::Title => {
            qb.push("a.title ILIKE ").push_bind(pattern);
        }
        SearchType::Content => {
            qb.push("a.content ILIKE ").push_bind(pattern);
        }
        SearchType::Id => {
            qb.push("a.user_id ILIKE ").push_bind(pattern);
        }
        SearchType::Nickname => {
            qb.push("u.nickname ILIKE ").push_bind(pattern);
        }
        SearchType::Hashtag => {
            // ハッシュタグのみ完全一致
            qb.push("a.hashtag = ").push_bind(filter.keyword.clone());
        }
    }
}

/// IDで記事を1件取得する（存在しなければNone）
pub async fn find_article_by_id(article_id: i64, pool: &PgPool) -> Result<Option<Article>> {
    let mut qb = QueryBuilder::<Postgres>::new(ARTICLE_SELECT);
    qb.push(" WHERE a.id = ").push_bind(article_id);

    let article = qb
        .build_query_as::<Article>()
        .fetch_optional(pool)
        .await
        .context("記事の取得に失敗しました")?;

    Ok(article)
}

/// 指定IDの直前・直後の記事IDを昇順で取得する
/// 隣接記事が存在しない側は結果に含まれない（0〜2件）
pub async fn find_prev_next_article_ids(article_id: i64, pool: &PgPool) -> Result<Vec<i64>> {
    let ids = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT id FROM articles
        WHERE id = (SELECT MAX(id) FROM articles WHERE id < $1)
           OR id = (SELECT MIN(id) FROM articles WHERE id > $1)
        ORDER BY id
        "#,
    )
    .bind(article_id)
    .fetch_all(pool)
    .await
    .context("前後記事IDの取得に失敗しました")?;

    Ok(ids)
}

/// 記事を新規保存し、採番されたIDを返す
pub async fn insert_article(new_article: &NewArticle, pool: &PgPool) -> Result<i64> {
    let row = sqlx::query(
        r#"
        INSERT INTO articles (user_id, title, content, hashtag)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(&new_article.user_id)
    .bind(&new_article.title)
    .bind(&new_article.content)
    .bind(&new_article.hashtag)
    .fetch_one(pool)
    .await
    .context("記事の保存に失敗しました")?;

    Ok(row.get::<i64, _>("id"))
}

/// 記事を部分更新する。更新された行数を返す（存在しなければ0）
pub async fn update_article(
    article_id: i64,
    update: &ArticleUpdate,
    pool: &PgPool,
) -> Result<u64> {
    let result = sqlx::query(
        r#"
        UPDATE articles SET
            title = COALESCE($2, title),
            content = COALESCE($3, content),
            hashtag = $4,
            modified_at = now()
        WHERE id = $1
        "#,
    )
    .bind(article_id)
    .bind(&update.title)
    .bind(&update.content)
    .bind(&update.hashtag)
    .execute(pool)
    .await
    .context("記事の更新に失敗しました")?;

    Ok(result.rows_affected())
}

/// 記事をIDで削除する。削除された行数を返す
/// 紐づくコメントはON DELETE CASCADEで一緒に消える
pub async fn delete_article_by_id(article_id: i64, pool: &PgPool) -> Result<u64> {
    let result = sqlx::query("DELETE FROM articles WHERE id = $1")
        .bind(article_id)
        .execute(pool)
        .await
        .context("記事の削除に失敗しました")?;

    Ok(result.rows_affected())
}

/// 使用中のハッシュタグ一覧を重複なしで取得する
pub async fn find_all_distinct_hashtags(pool: &PgPool) -> Result<Vec<String>> {
    let hashtags = sqlx::query_scalar::<_, String>(
        "SELECT DISTINCT hashtag FROM articles WHERE hashtag IS NOT NULL ORDER BY hashtag",
    )
    .fetch_all(pool)
    .await
    .context("ハッシュタグ一覧の取得に失敗しました")?;

    Ok(hashtags)
}
