//! APIエラー定義

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

// kotonoha クレートのエラー型をインポート
use kotonoha::errors::{ConvertError, KotonohaError};

/// エラーの種類
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// 入力値が無効
  InvalidInput,
  /// テキストが長すぎる
  TextTooLong,
  /// 変換サービスが未初期化
  NotReady,
  /// 翻訳プロバイダー起因のエラー
  Upstream,
  /// スクリプト変換の失敗
  ConvertFailed,
  /// 内部エラー
  Internal,
  /// 設定エラー
  Config,
}

impl ApiErrorKind {
  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::InvalidInput => "invalid_input",
      Self::TextTooLong => "text_too_long",
      Self::NotReady => "not_ready",
      Self::Upstream => "upstream_error",
      Self::ConvertFailed => "convert_failed",
      Self::Internal => "internal_error",
      Self::Config => "config_error",
    }
  }

  /// HTTPステータスコードを取得
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::InvalidInput | Self::TextTooLong => StatusCode::BAD_REQUEST,
      Self::NotReady => StatusCode::SERVICE_UNAVAILABLE,
      Self::Upstream | Self::ConvertFailed | Self::Internal | Self::Config => {
        StatusCode::INTERNAL_SERVER_ERROR
      }
    }
  }
}

/// APIエラー
#[derive(Debug, Error)]
pub enum ApiError {
  /// 入力値が無効
  #[error("{0}")]
  InvalidInput(String),

  /// テキストが長すぎる
  #[error("テキストが長すぎます: {0} バイト（最大: {1} バイト）")]
  TextTooLong(usize, usize),

  /// 変換サービスが未初期化（辞書ロード中）
  #[error("{0}")]
  NotReady(String),

  /// 翻訳プロバイダー起因のエラー
  /// 具体的な原因はサーバーログにのみ出力し、呼び出し元には一般的なメッセージを返す
  #[error("{0}")]
  Upstream(String),

  /// スクリプト変換の失敗
  /// ライブラリーのエラーメッセージを details として呼び出し元に返す
  #[error("{message}")]
  ConvertFailed {
    /// 呼び出し元向けの一般的なメッセージ
    message: String,
    /// ライブラリー由来の診断情報
    details: String,
  },

  /// 内部エラー
  #[error("内部エラー: {0}")]
  Internal(String),

  /// 設定エラー
  #[error("設定エラー: {0}")]
  Config(String),
}

impl ApiError {
  /// エラーの種類を取得
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::InvalidInput(_) => ApiErrorKind::InvalidInput,
      Self::TextTooLong(_, _) => ApiErrorKind::TextTooLong,
      Self::NotReady(_) => ApiErrorKind::NotReady,
      Self::Upstream(_) => ApiErrorKind::Upstream,
      Self::ConvertFailed { .. } => ApiErrorKind::ConvertFailed,
      Self::Internal(_) => ApiErrorKind::Internal,
      Self::Config(_) => ApiErrorKind::Config,
    }
  }

  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// HTTPステータスコードを取得
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// 診断情報（変換失敗時のみ）
  #[must_use]
  pub fn details(&self) -> Option<&str> {
    match self {
      Self::ConvertFailed { details, .. } => Some(details),
      _ => None,
    }
  }

  /// 無効な入力エラーを作成
  #[must_use]
  pub fn invalid_input(message: impl Into<String>) -> Self {
    Self::InvalidInput(message.into())
  }

  /// テキスト長超過エラーを作成
  #[must_use]
  pub fn text_too_long(actual: usize, max: usize) -> Self {
    Self::TextTooLong(actual, max)
  }

  /// 未初期化エラーを作成
  #[must_use]
  pub fn not_ready(message: impl Into<String>) -> Self {
    Self::NotReady(message.into())
  }

  /// 翻訳プロバイダーエラーを作成
  #[must_use]
  pub fn upstream(message: impl Into<String>) -> Self {
    Self::Upstream(message.into())
  }

  /// 変換失敗エラーを作成
  #[must_use]
  pub fn convert_failed(message: impl Into<String>, details: impl Into<String>) -> Self {
    Self::ConvertFailed {
      message: message.into(),
      details: details.into(),
    }
  }

  /// 内部エラーを作成
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// 設定エラーを作成
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

/// エラーレスポンスのJSON構造
///
/// `{"error": "...", "details": "..."}` のフラットな形。
/// details は変換失敗時のみ現れる。
#[derive(Serialize)]
struct ErrorResponse {
  error: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  details: Option<String>,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let body = ErrorResponse {
      details: self.details().map(str::to_string),
      error: self.to_string(),
    };

    (status, Json(body)).into_response()
  }
}

/// KotonohaError から ApiError への変換
///
/// ドメイン層のエラーを API 層のエラーにマッピングする。
impl From<KotonohaError> for ApiError {
  fn from(err: KotonohaError) -> Self {
    match err {
      KotonohaError::Convert(ConvertError::InvalidInput { reason }) => {
        ApiError::invalid_input(reason)
      }
      KotonohaError::Dictionary(_) | KotonohaError::Convert(ConvertError::Dictionary(_)) => {
        ApiError::config(format!("dictionary error: {err}"))
      }
      // #[non_exhaustive] な enum のため、将来追加されるバリアントに対応
      _ => ApiError::internal(format!("unknown error: {err}")),
    }
  }
}

/// Result 型エイリアス
pub type Result<T> = std::result::Result<T, ApiError>;
