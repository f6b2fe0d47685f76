use serde::Serialize;

/// ソート対象のカラム
/// 記事一覧で並べ替えに使えるフィールドのみを閉じた集合として定義
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    CreatedAt,
    ModifiedAt,
    Title,
    Id,
}

impl SortKey {
    /// SQLのORDER BY句で使用するカラム名
    /// 閉じたenumからの変換なのでSQLインジェクションの余地はない
    pub fn column(&self) -> &'static str {
        match self {
            SortKey::CreatedAt => "a.created_at",
            SortKey::ModifiedAt => "a.modified_at",
            SortKey::Title => "a.title",
            SortKey::Id => "a.id",
        }
    }
}

/// ソート方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn keyword(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// ソート指定（カラム + 方向）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub key: SortKey,
    pub order: SortOrder,
}

impl Default for Sort {
    /// デフォルトは作成日時の降順（新しい記事が先頭）
    fn default() -> Self {
        Self {
            key: SortKey::CreatedAt,
            order: SortOrder::Desc,
        }
    }
}

impl Sort {
    /// "createdAt,desc" 形式のクエリパラメータをパースする
    /// 方向の省略時は昇順、不正な指定はNoneを返す
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.splitn(2, ',');
        let key = match parts.next()?.trim() {
            "createdAt" => SortKey::CreatedAt,
            "modifiedAt" => SortKey::ModifiedAt,
            "title" => SortKey::Title,
            "id" => SortKey::Id,
            _ => return None,
        };
        let order = match parts.next().map(str::trim) {
            None | Some("") | Some("asc") => SortOrder::Asc,
            Some("desc") => SortOrder::Desc,
            Some(_) => return None,
        };
        Some(Self { key, order })
    }
}

/// ページング指定（0始まりのページ番号 + ページサイズ + ソート）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pageable {
    pub page: i64,
    pub size: i64,
    pub sort: Sort,
}

impl Pageable {
    /// 新しいページング指定を作成
    /// 負のページ番号は0に、不正なサイズはデフォルト(10)に丸める
    pub fn new(page: i64, size: i64, sort: Sort) -> Self {
        let page = page.max(0);
        let size = if (1..=100).contains(&size) { size } else { 10 };
        Self { page, size, sort }
    }

    /// SQLのOFFSET値
    pub fn offset(&self) -> i64 {
        self.page * self.size
    }
}

impl Default for Pageable {
    fn default() -> Self {
        Self::new(0, 10, Sort::default())
    }
}

/// ページングされた検索結果
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    /// このページに含まれる要素
    pub items: Vec<T>,
    /// 0始まりのページ番号
    pub page: i64,
    /// ページサイズ
    pub size: i64,
    /// 検索条件に一致した総件数
    pub total_elements: i64,
}

impl<T> Page<T> {
    /// 空のページを作成
    pub fn empty(pageable: &Pageable) -> Self {
        Self {
            items: Vec::new(),
            page: pageable.page,
            size: pageable.size,
            total_elements: 0,
        }
    }

    /// 総ページ数（切り上げ）
    pub fn total_pages(&self) -> i64 {
        if self.size <= 0 {
            return 0;
        }
        (self.total_elements + self.size - 1) / self.size
    }
}

/// ページネーションバーに表示するページ番号の並びを計算する
///
/// 現在ページを中心とした固定長のウィンドウを[0, total_pages)に
/// クランプして返す。総ページ数が0の場合は空。
pub fn pagination_bar_numbers(current_page: i64, total_pages: i64, bar_length: i64) -> Vec<i64> {
    if total_pages <= 0 || bar_length <= 0 {
        return Vec::new();
    }

    let start = (current_page - bar_length / 2).max(0);
    let end = (start + bar_length).min(total_pages);

    (start..end).collect()
}
