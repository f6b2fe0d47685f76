use std::env;
use thiserror::Error;

/// 設定関連のエラー型
/// 環境変数、設定値の検証など設定に関するエラーを定義
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 環境変数が見つからない
    #[error("環境変数が見つかりません: {name}")]
    MissingEnvironmentVariable { name: String },

    /// 設定値が不正
    #[error("設定値が不正です: {reason}")]
    InvalidValue { reason: String },
}

impl ConfigError {
    /// 環境変数不足エラーを作成
    pub fn missing_env_var<N: Into<String>>(name: N) -> Self {
        Self::MissingEnvironmentVariable { name: name.into() }
    }

    /// 不正な設定値エラーを作成
    pub fn invalid_value<R: Into<String>>(reason: R) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }
}

/// 設定エラーのResult型エイリアス
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// アプリケーション設定
/// 環境変数から読み込む（.envファイルがあれば使用）
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// HTTPサーバの待ち受けアドレス
    pub listen_addr: String,
    /// 記事一覧のデフォルトページサイズ
    pub default_page_size: i64,
    /// ページネーションバーに表示するページ番号の個数
    pub pagination_bar_length: i64,
}

impl BoardConfig {
    /// 環境変数から設定を読み込む
    /// 未設定の項目はデフォルト値を使用する
    pub fn from_env() -> ConfigResult<Self> {
        let port = env::var("HTTP_PORT").unwrap_or_else(|_| "8080".to_string());
        let listen_addr = format!("0.0.0.0:{}", port);

        let default_page_size = parse_env_i64("BOARD_DEFAULT_PAGE_SIZE", 10)?;
        let pagination_bar_length = parse_env_i64("BOARD_PAGINATION_BAR_LENGTH", 5)?;

        if default_page_size <= 0 {
            return Err(ConfigError::invalid_value(
                "BOARD_DEFAULT_PAGE_SIZEは1以上である必要があります",
            ));
        }
        if pagination_bar_length <= 0 {
            return Err(ConfigError::invalid_value(
                "BOARD_PAGINATION_BAR_LENGTHは1以上である必要があります",
            ));
        }

        Ok(Self {
            listen_addr,
            default_page_size,
            pagination_bar_length,
        })
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            default_page_size: 10,
            pagination_bar_length: 5,
        }
    }
}

/// 整数型の環境変数を読み込む（未設定ならデフォルト値）
fn parse_env_i64(name: &str, default: i64) -> ConfigResult<i64> {
    match env::var(name) {
        Ok(raw) => raw
            .parse::<i64>()
            .map_err(|_| ConfigError::invalid_value(format!("{}が整数ではありません: {}", name, raw))),
        Err(_) => Ok(default),
    }
}
