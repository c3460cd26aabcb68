//! kotonoha-api サーバーエントリーポイント

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kotonoha_api::ApiError;
use kotonoha_api::api::AppState;
use kotonoha_api::api::run_server;
use kotonoha_api::config::Config;
use kotonoha_api::service::{ConverterCell, DeepLTranslator, spawn_converter_init};

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // ロギングの初期化
  tracing_subscriber::registry().with(tracing_subscriber::fmt::layer()).init();

  // .env ファイルがあれば環境変数として読み込む
  let _ = dotenvy::dotenv();

  // 設定の読み込み（DEEPL_API_KEY 欠如はここで致命的エラーになる）
  let config = Config::from_env()?;
  tracing::info!(preset = ?config.preset, "設定を読み込みました");

  // 翻訳リレーの初期化
  let translator = Arc::new(DeepLTranslator::new(&config)?);
  tracing::info!("翻訳リレーを初期化しました");

  // 変換サービスはバックグラウンドで初期化する
  // 完了までの間、/convert は 503 を返す
  let converter: ConverterCell = Arc::new(OnceCell::new());
  spawn_converter_init(Arc::clone(&converter), config.clone());
  tracing::info!("変換サービスの初期化を開始しました");

  // アプリケーション状態の作成
  let state = AppState::new(config, translator, converter);

  // サーバー起動
  run_server(state).await
}
