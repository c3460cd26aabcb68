//! Script Conversion Service
//!
//! Wraps `kotonoha::ScriptConverter` behind a readiness cell: the dictionary
//! load runs once in the background at process start, and until it finishes
//! every conversion request fails fast with a "not ready" error.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{error, info, warn};
use vibrato_rkyv::dictionary::PresetDictionaryKind;

use kotonoha::converter::ScriptConverter;
use kotonoha::dictionary::DictionaryManager;
use kotonoha::errors::ConvertError;
use kotonoha::normalize::normalize_punctuation;
use kotonoha::script::ScriptKind;

use crate::config::MAX_TEXT_LENGTH;
use crate::config::{Config, Preset};
use crate::errors::{ApiError, Result};
use crate::models::{ConvertRequest, ConvertResponse};

/// Common interface for the script conversion service
///
/// This trait allows swapping the production implementation
/// (`ConvertServiceFull`) with test stubs/mocks.
pub trait ConvertService: Send + Sync {
  /// Executes script conversion
  ///
  /// # Errors
  /// - Input error (empty string, length exceeded)
  /// - Conversion failure (library error, reported with details)
  fn convert(&self, request: ConvertRequest) -> Result<ConvertResponse>;
}

/// Readiness cell shared between the background initializer and the handlers.
///
/// Empty while the dictionary is loading; set exactly once, never cleared.
/// Handlers read it with `get()` and must not wait on it.
pub type ConverterCell = Arc<OnceCell<Arc<dyn ConvertService>>>;

/// Converts Preset to PresetDictionaryKind of vibrato-rkyv
///
/// Conversion is done in the service layer so that the config layer does not depend on vibrato
#[must_use]
fn preset_to_vibrato_kind(preset: &Preset) -> PresetDictionaryKind {
  match preset {
    Preset::Ipadic => PresetDictionaryKind::Ipadic,
    Preset::UnidicCwj => PresetDictionaryKind::UnidicCwj,
    Preset::UnidicCsj => PresetDictionaryKind::UnidicCsj,
  }
}

/// Script Conversion Service (production implementation)
#[derive(Clone)]
pub struct ConvertServiceFull {
  converter: ScriptConverter,
}

impl ConvertServiceFull {
  /// Initializes the service by loading the dictionary.
  ///
  /// Blocking: downloads the preset dictionary on the first run. Call from
  /// `spawn_blocking` (see [`spawn_converter_init`]).
  ///
  /// # Errors
  /// Returns an error if the dictionary load fails
  pub fn new(config: &Config) -> Result<Self> {
    let manager = match &config.dict_path {
      Some(path) => DictionaryManager::from_local_path(path)
        .map_err(|e| ApiError::config(format!("ローカル辞書を開けません: {}", e)))?,
      None => {
        let kind = preset_to_vibrato_kind(&config.preset);
        DictionaryManager::with_preset(kind)
          .map_err(|e| ApiError::config(format!("辞書マネージャーの構築に失敗しました: {}", e)))?
      }
    };

    let dict =
      manager.load().map_err(|e| ApiError::config(format!("辞書のロードに失敗しました: {}", e)))?;

    Ok(Self {
      converter: ScriptConverter::from_shared_dictionary(dict),
    })
  }

  /// Executes script conversion with hiragana punctuation normalization
  ///
  /// # Errors
  /// - If text is empty
  /// - If text exceeds maximum length
  /// - If the underlying converter fails
  pub fn convert(&self, request: ConvertRequest) -> Result<ConvertResponse> {
    let text_bytes = request.text.len();
    if text_bytes == 0 {
      return Err(ApiError::invalid_input("変換するテキストがありません。"));
    }

    if text_bytes > MAX_TEXT_LENGTH {
      return Err(ApiError::text_too_long(text_bytes, MAX_TEXT_LENGTH));
    }

    let converted = self.converter.convert(&request.text, request.to).map_err(|e| match e {
      ConvertError::InvalidInput { reason } => ApiError::invalid_input(reason),
      other => ApiError::convert_failed("変換処理でエラーが発生しました。", other.to_string()),
    })?;

    // 約物の正規化はひらがな出力にのみ適用する
    let converted = match request.to {
      ScriptKind::Hiragana => normalize_punctuation(&converted),
      ScriptKind::Katakana | ScriptKind::Romaji => converted,
    };

    Ok(ConvertResponse {
      original: request.text,
      converted,
      format: request.to,
    })
  }
}

/// Production implementation of trait `ConvertService`
impl ConvertService for ConvertServiceFull {
  fn convert(&self, request: ConvertRequest) -> Result<ConvertResponse> {
    // Note: Writing `self.convert(...)` would recursively call the trait method,
    // so explicitly call the inherent method.
    ConvertServiceFull::convert(self, request)
  }
}

/// Spawns the one-time background initialization of the conversion service.
///
/// The dictionary load (download on first run) happens on a blocking thread;
/// on success the readiness cell is set exactly once. On failure the cell
/// stays empty — conversion requests keep answering 503 and the cause is
/// visible in the server log.
pub fn spawn_converter_init(cell: ConverterCell, config: Config) -> tokio::task::JoinHandle<()> {
  tokio::spawn(async move {
    let built = tokio::task::spawn_blocking(move || ConvertServiceFull::new(&config)).await;

    match built {
      Ok(Ok(service)) => {
        let service: Arc<dyn ConvertService> = Arc::new(service);
        if cell.set(service).is_err() {
          warn!("変換サービスは既に初期化されています");
        } else {
          info!("辞書のロードが完了し、変換サービスが利用可能になりました");
        }
      }
      Ok(Err(e)) => {
        error!(error = %e, "変換サービスの初期化に失敗しました（/convert は 503 のままになります）");
      }
      Err(e) => {
        error!(error = %e, "変換サービスの初期化タスクが異常終了しました");
      }
    }
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::Preset;

  fn create_test_config() -> Config {
    Config {
      bind_addr: "127.0.0.1:0".to_string(),
      deepl_api_key: "test-key".to_string(),
      deepl_api_url: "http://127.0.0.1:0/v2/translate".to_string(),
      preset: Preset::Ipadic,
      dict_path: None,
    }
  }

  // This does not require dictionary download so can always be run
  #[test]
  fn test_preset_to_vibrato_kind() {
    assert_eq!(
      preset_to_vibrato_kind(&Preset::Ipadic),
      PresetDictionaryKind::Ipadic
    );
    assert_eq!(
      preset_to_vibrato_kind(&Preset::UnidicCwj),
      PresetDictionaryKind::UnidicCwj
    );
    assert_eq!(
      preset_to_vibrato_kind(&Preset::UnidicCsj),
      PresetDictionaryKind::UnidicCsj
    );
  }

  // Dictionary-dependent tests are opt-in with with_dict_tests feature
  #[test]
  #[cfg_attr(not(feature = "with_dict_tests"), ignore)]
  fn test_service_creation_and_conversion() {
    let config = create_test_config();

    let service = ConvertServiceFull::new(&config)
      .expect("Failed to load dictionary: check test environment");

    let response = service
      .convert(ConvertRequest {
        text: "東京".to_string(),
        to: ScriptKind::Hiragana,
      })
      .expect("conversion failed");

    assert_eq!(response.original, "東京");
    assert_eq!(response.converted, "とうきょう");
    assert_eq!(response.format, ScriptKind::Hiragana);
  }

  #[test]
  #[cfg_attr(not(feature = "with_dict_tests"), ignore)]
  fn test_empty_text_error() {
    let config = create_test_config();
    let service = ConvertServiceFull::new(&config)
      .expect("Failed to load dictionary: check test environment");

    let result = service.convert(ConvertRequest {
      text: String::new(),
      to: ScriptKind::Hiragana,
    });

    assert!(result.is_err());
    let err = result.unwrap_err();
    assert_eq!(err.code(), "invalid_input");
  }

  #[test]
  #[cfg_attr(not(feature = "with_dict_tests"), ignore)]
  fn test_text_too_long_error() {
    let config = create_test_config();
    let service = ConvertServiceFull::new(&config)
      .expect("Failed to load dictionary: check test environment");

    let long_text = "a".repeat(MAX_TEXT_LENGTH + 1);
    let result = service.convert(ConvertRequest {
      text: long_text,
      to: ScriptKind::Hiragana,
    });

    assert!(result.is_err());
    let err = result.unwrap_err();
    assert_eq!(err.code(), "text_too_long");
  }
}
