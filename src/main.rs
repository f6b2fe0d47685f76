use anyhow::{Context, Result};
use boardoggo::api::main_router;
use boardoggo::api::state::AppState;
use boardoggo::infra::db::setup_database;
use boardoggo::types::BoardConfig;
use tokio::signal;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // 環境変数を読み込み（.envファイルがあれば使用）
    let _ = dotenvy::dotenv();

    // RUST_LOG_FORMAT=jsonならJSON形式、それ以外は人間向けの形式でログを出す
    let use_json = std::env::var("RUST_LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json().flatten_event(true))
            .with(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
            .init();
    }

    let config = BoardConfig::from_env()?;
    info!("設定を読み込みました: {:?}", config);

    // プール作成 + マイグレーション実行
    let pool = setup_database().await?;
    info!("データベースの初期化が完了しました");

    let listen_addr = config.listen_addr.clone();
    let app = main_router(AppState::new(pool, config));

    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .with_context(|| format!("アドレスのバインドに失敗しました: {}", listen_addr))?;
    info!("待ち受けを開始しました: {}", listen_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTPサーバの実行に失敗しました")?;

    info!("サーバを終了しました");
    Ok(())
}

/// SIGTERMまたはSIGINT(Ctrl+C)を待ってグレースフルシャットダウンする
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Ctrl+Cハンドラの設定に失敗しました");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERMハンドラの設定に失敗しました")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("SIGINTを受信。グレースフルシャットダウンを開始します"),
        _ = terminate => info!("SIGTERMを受信。グレースフルシャットダウンを開始します"),
    }
}
