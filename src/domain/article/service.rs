use super::model::{Article, ArticleUpdate, ArticleWithComments, NewArticle, SearchType};
use super::repository;
use crate::domain::comment::repository as comment_repository;
use crate::domain::pagination::{Page, Pageable};
use crate::types::BoardError;
use anyhow::Result;
use sqlx::PgPool;
use tracing::warn;

/// 検索タイプとキーワードから記事ページを取得する
///
/// キーワードが未指定または空白のみの場合はフィルターなしの一覧を返す。
/// それ以外は検索タイプに対応するリポジトリクエリへディスパッチする。
pub async fn search_articles(
    search_type: Option<SearchType>,
    search_keyword: Option<&str>,
    pageable: &Pageable,
    pool: &PgPool,
) -> Result<Page<Article>> {
    let keyword = search_keyword.map(str::trim).unwrap_or("");
    if keyword.is_empty() {
        return repository::find_articles(pageable, pool).await;
    }

    // 検索タイプ未指定でキーワードだけ来た場合もフィルターなしにフォールバック
    let Some(search_type) = search_type else {
        return repository::find_articles(pageable, pool).await;
    };

    match search_type {
        SearchType::Title => repository::find_by_title_containing(keyword, pageable, pool).await,
        SearchType::Content => {
            repository::find_by_content_containing(keyword, pageable, pool).await
        }
        SearchType::Id => repository::find_by_user_id_containing(keyword, pageable, pool).await,
        SearchType::Nickname => {
            repository::find_by_nickname_containing(keyword, pageable, pool).await
        }
        SearchType::Hashtag => {
            // ハッシュタグ検索はキーワードに"#"を付与して完全一致
            let hashtag = format!("#{}", keyword);
            repository::find_by_hashtag(&hashtag, pageable, pool).await
        }
    }
}

/// 記事詳細（コメント + 前後記事ID）を取得する
/// 記事が存在しない場合はBoardError::ArticleNotFoundを返す
pub async fn get_article_with_comments(
    article_id: i64,
    pool: &PgPool,
) -> Result<ArticleWithComments> {
    let article = repository::find_article_by_id(article_id, pool)
        .await?
        .ok_or(BoardError::ArticleNotFound(article_id))?;

    let comments = comment_repository::find_by_article_id(article_id, pool).await?;
    let neighbor_ids = repository::find_prev_next_article_ids(article_id, pool).await?;
    let (prev_id, next_id) = derive_prev_next(&neighbor_ids, article_id);

    Ok(ArticleWithComments {
        article,
        comments,
        prev_id,
        next_id,
    })
}

/// 隣接記事ID（昇順・0〜2件）から（前の記事, 次の記事）を導出する
///
/// 2件なら（小さい方, 大きい方）。1件だけの場合は現在のIDとの大小比較で
/// 前か次かを判定する。0件なら両方None。
pub fn derive_prev_next(neighbor_ids: &[i64], article_id: i64) -> (Option<i64>, Option<i64>) {
    match neighbor_ids {
        [prev, next] => (Some(*prev), Some(*next)),
        [only] if *only < article_id => (Some(*only), None),
        [only] => (None, Some(*only)),
        _ => (None, None),
    }
}

/// 記事を新規保存し、採番されたIDを返す
pub async fn save_article(new_article: &NewArticle, pool: &PgPool) -> Result<i64> {
    repository::insert_article(new_article, pool).await
}

/// 記事を部分更新する
/// 対象が存在しない場合はwarnログを出して握りつぶす（呼び出し元へは伝播しない）
pub async fn update_article(article_id: i64, update: &ArticleUpdate, pool: &PgPool) -> Result<()> {
    let rows = repository::update_article(article_id, update, pool).await?;
    if rows == 0 {
        warn!(article_id, "記事の更新に失敗。記事が見つかりません");
    }
    Ok(())
}

/// 記事をIDで削除する
pub async fn delete_article(article_id: i64, pool: &PgPool) -> Result<()> {
    repository::delete_article_by_id(article_id, pool).await?;
    Ok(())
}

/// ハッシュタグで記事ページを取得する
/// ハッシュタグが空白のみの場合は空ページを返す
pub async fn search_articles_via_hashtag(
    hashtag: &str,
    pageable: &Pageable,
    pool: &PgPool,
) -> Result<Page<Article>> {
    if hashtag.trim().is_empty() {
        return Ok(Page::empty(pageable));
    }

    repository::find_by_hashtag(hashtag, pageable, pool).await
}

/// 使用中のハッシュタグ一覧を取得する
pub async fn get_hashtags(pool: &PgPool) -> Result<Vec<String>> {
    repository::find_all_distinct_hashtags(pool).await
}

#[cfg(test)]
mod tests {
    use super::*;

    // 前後記事IDの分類（純粋関数）
    mod prev_next {
        use super::*;

        #[test]
        fn test_two_neighbors() {
            // 2件なら（前, 次）の順で返る
            assert_eq!(derive_prev_next(&[1, 3], 2), (Some(1), Some(3)));

            println!("✅ 前後2件の分類テスト成功");
        }

        #[test]
        fn test_single_neighbor_classified_by_comparison() {
            // 1件だけの場合は現在IDとの大小で前か次かを決める
            assert_eq!(derive_prev_next(&[2], 3), (Some(2), None), "小さいIDは前");
            assert_eq!(derive_prev_next(&[2], 1), (None, Some(2)), "大きいIDは次");

            println!("✅ 片側1件の分類テスト成功");
        }

        #[test]
        fn test_no_neighbors() {
            // 記事が1件しかない場合は両方None
            assert_eq!(derive_prev_next(&[], 1), (None, None));

            println!("✅ 隣接なしの分類テスト成功");
        }
    }

    // 検索ディスパッチ
    mod search_dispatch {
        use super::*;
        use sqlx::PgPool;

        #[sqlx::test(fixtures("../../../fixtures/board_search.sql"))]
        async fn test_blank_keyword_returns_all(pool: PgPool) -> Result<(), anyhow::Error> {
            let pageable = Pageable::default();
            let all = search_articles(None, None, &pageable, &pool).await?;
            let total = all.total_elements;
            assert!(total >= 4, "固定データの全記事が返るべき");

            // 空文字・空白のみでも同じ結果
            let blank = search_articles(Some(SearchType::Title), Some("   "), &pageable, &pool)
                .await?;
            assert_eq!(blank.total_elements, total);
            let empty = search_articles(Some(SearchType::Content), Some(""), &pageable, &pool)
                .await?;
            assert_eq!(empty.total_elements, total);

            println!("✅ 空キーワード全件検索テスト成功: {}件", total);
            Ok(())
        }

        #[sqlx::test(fixtures("../../../fixtures/board_search.sql"))]
        async fn test_dispatch_per_search_type(pool: PgPool) -> Result<(), anyhow::Error> {
            let pageable = Pageable::default();

            // TITLE → タイトル部分一致
            let page =
                search_articles(Some(SearchType::Title), Some("rust"), &pageable, &pool).await?;
            assert!(page.total_elements >= 1);
            assert!(page
                .items
                .iter()
                .all(|a| a.title.to_lowercase().contains("rust")));

            // CONTENT → 本文部分一致
            let page =
                search_articles(Some(SearchType::Content), Some("pagination"), &pageable, &pool)
                    .await?;
            assert_eq!(page.total_elements, 1);

            // ID → 投稿者ユーザーID部分一致
            let page =
                search_articles(Some(SearchType::Id), Some("alice"), &pageable, &pool).await?;
            assert!(page.items.iter().all(|a| a.user_id.contains("alice")));
            assert!(page.total_elements >= 1);

            // NICKNAME → ニックネーム部分一致
            let page =
                search_articles(Some(SearchType::Nickname), Some("ボブ"), &pageable, &pool)
                    .await?;
            assert!(page.total_elements >= 1);

            // HASHTAG → "#"を付けた完全一致
            let page =
                search_articles(Some(SearchType::Hashtag), Some("rust"), &pageable, &pool).await?;
            assert_eq!(page.total_elements, 1);
            assert_eq!(page.items[0].hashtag.as_deref(), Some("#rust"));

            println!("✅ 検索タイプ別ディスパッチテスト成功");
            Ok(())
        }
    }

    // 記事詳細と更新・削除の業務ルール
    mod article_lifecycle {
        use super::*;
        use crate::domain::article::model::ArticleUpdate;
        use crate::types::BoardError;
        use sqlx::PgPool;

        #[sqlx::test(fixtures("../../../fixtures/board_basic.sql"))]
        async fn test_get_article_with_comments(pool: PgPool) -> Result<(), anyhow::Error> {
            let detail = get_article_with_comments(2, &pool).await?;

            assert_eq!(detail.article.id, 2);
            assert_eq!(detail.comments.len(), 2, "記事2にはコメントが2件あるはず");
            // 中間の記事なので前後両方が埋まる
            assert_eq!(detail.prev_id, Some(1));
            assert_eq!(detail.next_id, Some(3));

            println!("✅ 記事詳細取得テスト成功");
            Ok(())
        }

        #[sqlx::test(fixtures("../../../fixtures/board_basic.sql"))]
        async fn test_get_missing_article_fails(pool: PgPool) -> Result<(), anyhow::Error> {
            let result = get_article_with_comments(9999, &pool).await;

            let err = result.expect_err("存在しない記事はエラーになるべき");
            let board_err = err
                .downcast_ref::<BoardError>()
                .expect("BoardErrorにダウンキャストできるべき");
            assert_eq!(*board_err, BoardError::ArticleNotFound(9999));

            println!("✅ 存在しない記事の詳細取得テスト成功");
            Ok(())
        }

        #[sqlx::test(fixtures("../../../fixtures/board_basic.sql"))]
        async fn test_update_missing_article_is_swallowed(
            pool: PgPool,
        ) -> Result<(), anyhow::Error> {
            let update = ArticleUpdate {
                title: Some("更新されないタイトル".to_string()),
                ..Default::default()
            };
            // 存在しないIDの更新はエラーにならない
            update_article(9999, &update, &pool).await?;

            // どの行も変化していないこと
            let count: i64 =
                sqlx::query_scalar("SELECT COUNT(*) FROM articles WHERE title = '更新されないタイトル'")
                    .fetch_one(&pool)
                    .await?;
            assert_eq!(count, 0, "存在しない記事の更新は何も永続化しないべき");

            println!("✅ 存在しない記事の更新握りつぶしテスト成功");
            Ok(())
        }

        #[sqlx::test(fixtures("../../../fixtures/board_basic.sql"))]
        async fn test_delete_then_lookup_fails(pool: PgPool) -> Result<(), anyhow::Error> {
            delete_article(1, &pool).await?;

            let result = get_article_with_comments(1, &pool).await;
            assert!(result.is_err(), "削除後の詳細取得はnot foundになるべき");

            println!("✅ 記事削除→再取得失敗テスト成功");
            Ok(())
        }
    }

    // ハッシュタグ系
    mod hashtag {
        use super::*;
        use sqlx::PgPool;

        #[sqlx::test(fixtures("../../../fixtures/board_search.sql"))]
        async fn test_search_via_hashtag_blank_is_empty(
            pool: PgPool,
        ) -> Result<(), anyhow::Error> {
            let pageable = Pageable::default();
            let page = search_articles_via_hashtag("  ", &pageable, &pool).await?;

            assert!(page.items.is_empty());
            assert_eq!(page.total_elements, 0);
            assert_eq!(page.page, pageable.page);

            println!("✅ 空ハッシュタグ検索テスト成功");
            Ok(())
        }

        #[sqlx::test(fixtures("../../../fixtures/board_search.sql"))]
        async fn test_search_via_hashtag(pool: PgPool) -> Result<(), anyhow::Error> {
            let page =
                search_articles_via_hashtag("#rust", &Pageable::default(), &pool).await?;

            assert_eq!(page.total_elements, 1);
            assert_eq!(page.items[0].hashtag.as_deref(), Some("#rust"));

            println!("✅ ハッシュタグ検索テスト成功");
            Ok(())
        }

        #[sqlx::test(fixtures("../../../fixtures/board_search.sql"))]
        async fn test_get_hashtags(pool: PgPool) -> Result<(), anyhow::Error> {
            let hashtags = get_hashtags(&pool).await?;
            assert!(hashtags.contains(&"#rust".to_string()));

            println!("✅ ハッシュタグ一覧サービステスト成功");
            Ok(())
        }
    }
}
