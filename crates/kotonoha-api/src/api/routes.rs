//! ルーター定義

use axum::{
  Router,
  routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{health_check, post_convert, post_translate};
use super::state::AppState;
use crate::errors::ApiError;

/// APIルーターを作成する
///
/// ブラウザーのフロントエンドから呼ばれる想定のため CORS を全面的に許可する。
///
/// # Arguments
/// * `state` - アプリケーション状態
///
/// # Returns
/// 設定済みの Router
pub fn create_router(state: AppState) -> Router {
  Router::new()
    .route("/translate", post(post_translate))
    .route("/convert", post(post_convert))
    .route("/health", get(health_check))
    .layer(TraceLayer::new_for_http())
    .layer(CorsLayer::permissive())
    .with_state(state)
}

/// サーバーを起動する
///
/// # Arguments
/// * `state` - アプリケーション状態
///
/// # Errors
/// サーバーの起動に失敗した場合にエラーを返す
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = &state.config.bind_addr;
  let listener = tokio::net::TcpListener::bind(addr)
    .await
    .map_err(|e| ApiError::config(format!("バインドに失敗しました: {}", e)))?;

  tracing::info!("サーバーを起動します: http://{}", addr);

  let router = create_router(state);

  axum::serve(listener, router)
    .await
    .map_err(|e| ApiError::internal(format!("サーバーエラー: {}", e)))?;

  Ok(())
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use async_trait::async_trait;
  use tokio::sync::OnceCell;

  use super::*;
  use crate::config::{Config, Preset};
  use crate::errors::Result as ApiResult;
  use crate::models::{TranslateRequest, TranslateResponse};
  use crate::service::{ConverterCell, TranslateService};

  /// テスト用のダミー実装（ネットワークを一切触らない）
  #[derive(Clone)]
  struct DummyTranslator;

  #[async_trait]
  impl TranslateService for DummyTranslator {
    async fn translate(&self, _request: TranslateRequest) -> ApiResult<TranslateResponse> {
      Ok(TranslateResponse {
        translation: String::new(),
      })
    }
  }

  fn create_test_state() -> AppState {
    let config = Config {
      bind_addr: "127.0.0.1:3001".to_string(),
      deepl_api_key: "test-key".to_string(),
      deepl_api_url: "http://127.0.0.1:0/v2/translate".to_string(),
      preset: Preset::Ipadic,
      dict_path: None,
    };

    // スタブを注入（辞書ロード・外部API不要）
    let translator = Arc::new(DummyTranslator) as Arc<dyn TranslateService>;
    let converter: ConverterCell = Arc::new(OnceCell::new());
    AppState::new(config, translator, converter)
  }

  #[test]
  fn test_router_creation() {
    let state = create_test_state();
    let _router = create_router(state);
    // ルーターが正常に作成できることを確認
  }
}
