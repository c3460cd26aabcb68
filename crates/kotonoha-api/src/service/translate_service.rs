//! Translation Relay Service
//!
//! Forwards text to the DeepL API (target language fixed to Japanese) and
//! returns the first translation verbatim. One outbound call per request,
//! no retries, no caching.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::config::{Config, MAX_TEXT_LENGTH};
use crate::errors::{ApiError, Result};
use crate::models::{TranslateRequest, TranslateResponse};

/// Request timeout for the DeepL call
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Common interface for the translation relay
///
/// This trait allows swapping the production implementation (`DeepLTranslator`)
/// with test stubs/mocks.
#[async_trait]
pub trait TranslateService: Send + Sync {
  /// Translates text into Japanese via the external provider
  ///
  /// # Errors
  /// - Input error (empty string, length exceeded)
  /// - Upstream error (network failure, non-2xx status, malformed response)
  async fn translate(&self, request: TranslateRequest) -> Result<TranslateResponse>;
}

/// DeepL request body. DeepL expects the text wrapped in an array.
#[derive(Serialize)]
struct DeepLRequest<'a> {
  text: [&'a str; 1],
  target_lang: &'static str,
}

/// DeepL response body (only the fields we read)
#[derive(Deserialize)]
struct DeepLResponse {
  translations: Vec<DeepLTranslation>,
}

#[derive(Deserialize)]
struct DeepLTranslation {
  text: String,
}

/// Translation relay backed by the DeepL HTTP API
#[derive(Clone)]
pub struct DeepLTranslator {
  client: reqwest::Client,
  api_url: String,
  api_key: String,
}

impl DeepLTranslator {
  /// Builds the relay from configuration
  ///
  /// # Errors
  /// Returns an error if the HTTP client cannot be constructed
  pub fn new(config: &Config) -> Result<Self> {
    let client = reqwest::Client::builder()
      .timeout(REQUEST_TIMEOUT)
      .build()
      .map_err(|e| ApiError::config(format!("HTTPクライアントの構築に失敗しました: {}", e)))?;

    Ok(Self {
      client,
      api_url: config.deepl_api_url.clone(),
      api_key: config.deepl_api_key.clone(),
    })
  }

  /// Issues the single DeepL call and extracts the first translation
  async fn call_deepl(&self, text: &str) -> Result<String> {
    let body = DeepLRequest {
      text: [text],
      target_lang: "JA",
    };

    let response = self
      .client
      .post(&self.api_url)
      .header(AUTHORIZATION, format!("DeepL-Auth-Key {}", self.api_key))
      .json(&body)
      .send()
      .await
      .map_err(|e| {
        error!(error = %e, "DeepL APIリクエストエラー");
        ApiError::upstream("翻訳サーバーでエラーが発生しました。")
      })?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      error!(%status, body = %body, "DeepL APIが異常ステータスを返しました");
      return Err(ApiError::upstream("翻訳サーバーでエラーが発生しました。"));
    }

    let parsed: DeepLResponse = response.json().await.map_err(|e| {
      error!(error = %e, "DeepL APIレスポンスの解析に失敗");
      ApiError::upstream("翻訳サーバーでエラーが発生しました。")
    })?;

    // DeepL returns one translation per input element; we sent exactly one
    let first = parsed.translations.into_iter().next().ok_or_else(|| {
      error!("DeepL APIレスポンスに翻訳結果が含まれていません");
      ApiError::upstream("翻訳サーバーでエラーが発生しました。")
    })?;

    Ok(first.text)
  }
}

#[async_trait]
impl TranslateService for DeepLTranslator {
  async fn translate(&self, request: TranslateRequest) -> Result<TranslateResponse> {
    // Validate before any outbound call
    let text_bytes = request.text.len();
    if text_bytes == 0 {
      return Err(ApiError::invalid_input("翻訳するテキストがありません。"));
    }

    if text_bytes > MAX_TEXT_LENGTH {
      return Err(ApiError::text_too_long(text_bytes, MAX_TEXT_LENGTH));
    }

    let translation = self.call_deepl(&request.text).await?;

    Ok(TranslateResponse { translation })
  }
}
