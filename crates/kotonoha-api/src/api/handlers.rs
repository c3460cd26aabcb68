//! HTTPハンドラー定義

use std::sync::Arc;
use std::time::Instant;

use axum::{Json, extract::State};
use tracing::{debug, error, info};

use crate::errors::ApiError;
use crate::models::{ConvertRequest, ConvertResponse, TranslateRequest, TranslateResponse};

use super::state::AppState;

/// POST /translate エンドポイント
///
/// テキストを DeepL API に中継し、日本語訳を返す。
///
/// # Request Body
/// ```json
/// { "text": "翻訳対象のテキスト" }
/// ```
///
/// # Response
/// - 200 OK: 翻訳成功
/// - 400 Bad Request: 入力エラー（空テキスト、テキスト長超過）
/// - 500 Internal Server Error: プロバイダー起因のエラー
pub async fn post_translate(
  State(state): State<AppState>,
  Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, ApiError> {
  debug!(text_len = request.text.len(), "翻訳リクエストを受信");

  let start = Instant::now();
  let response = state.translator.translate(request).await?;

  info!(
    translation_len = response.translation.len(),
    elapsed_ms = start.elapsed().as_millis() as u64,
    "翻訳完了"
  );

  Ok(Json(response))
}

/// POST /convert エンドポイント
///
/// 日本語テキストをひらがな・カタカナ・ローマ字へ変換する。
///
/// # Request Body
/// ```json
/// { "text": "変換対象のテキスト", "to": "hiragana" }
/// ```
///
/// # Response
/// - 200 OK: 変換成功
/// - 503 Service Unavailable: 辞書ロード未完了
/// - 400 Bad Request: 入力エラー（空テキスト、テキスト長超過）
/// - 500 Internal Server Error: 変換エラー（details に診断情報）
pub async fn post_convert(
  State(state): State<AppState>,
  Json(request): Json<ConvertRequest>,
) -> Result<Json<ConvertResponse>, ApiError> {
  debug!(text_len = request.text.len(), to = %request.to, "変換リクエストを受信");

  // 初期化が終わるまでは待たずに即座に 503 を返す
  let Some(service) = state.converter.get() else {
    return Err(ApiError::not_ready(
      "変換サービスは初期化中です。しばらくしてから再試行してください。",
    ));
  };

  // CPUバウンドな処理を spawn_blocking で実行
  // 形態素解析は重い処理のため、非同期ランタイムをブロックしないよう分離
  let service = Arc::clone(service);

  let start = Instant::now();
  let response =
    tokio::task::spawn_blocking(move || service.convert(request)).await.map_err(|e| {
      error!(error = %e, "spawn_blocking エラー");
      ApiError::internal("処理の実行に失敗しました")
    })??;

  info!(
    format = %response.format,
    elapsed_ms = start.elapsed().as_millis() as u64,
    "変換完了"
  );

  Ok(Json(response))
}

/// ヘルスチェックエンドポイント
///
/// サーバーが稼働しているかを確認する。
pub async fn health_check() -> &'static str {
  "OK"
}
