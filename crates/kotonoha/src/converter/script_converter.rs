//! Reading-based script conversion using vibrato.

use std::sync::Arc;
use tracing::debug;
use vibrato_rkyv::Dictionary;
use vibrato_rkyv::Tokenizer as VibratoImpl;

use crate::errors::ConvertError;
use crate::script::{ScriptKind, katakana_to_hiragana, katakana_to_romaji};

/// Position of the katakana reading in the IPADIC feature array.
///
/// IPADIC: 品詞,品詞細分類1,品詞細分類2,品詞細分類3,活用型,活用形,原形,読み,発音
const IDX_READING: usize = 7;

/// Script converter backed by morphological analysis.
///
/// Each input token contributes its dictionary reading (katakana); tokens the
/// dictionary does not know (ASCII, half-width punctuation, rare words) fall
/// back to their surface form. The per-token pieces are then rendered into
/// the requested script and concatenated in token order.
///
/// - Stateless per call (a fresh vibrato worker is created each time)
/// - `Clone + Send + Sync`
#[derive(Clone)]
pub struct ScriptConverter {
  inner: VibratoImpl,
}

impl ScriptConverter {
  /// Constructs a converter from an already loaded Dictionary
  pub fn from_dictionary(dict: Dictionary) -> Self {
    Self {
      inner: VibratoImpl::new(dict),
    }
  }

  /// Constructs a converter from a shared dictionary (`Arc<Dictionary>`).
  ///
  /// Use this when the dictionary is shared via `Arc`, such as `DictionaryManager::load()`.
  pub fn from_shared_dictionary(dict: Arc<Dictionary>) -> Self {
    Self {
      inner: VibratoImpl::from_shared_dictionary(dict),
    }
  }

  /// Converts `text` into the requested script.
  ///
  /// # Errors
  /// Returns [`ConvertError::InvalidInput`] when `text` is empty.
  pub fn convert(&self, text: &str, to: ScriptKind) -> Result<String, ConvertError> {
    if text.is_empty() {
      return Err(ConvertError::InvalidInput {
        reason: "変換対象のテキストが空です".to_string(),
      });
    }

    // worker holds the lattice for analysis. Created per call.
    let mut worker = self.inner.new_worker();
    worker.reset_sentence(text);
    worker.tokenize();

    debug!(input_text = %text, to = %to, "スクリプト変換を開始");

    let mut converted = String::with_capacity(text.len());

    for token in worker.token_iter() {
      let surface = token.surface();
      // Dictionary reading when present, surface form otherwise
      let piece = reading_from_feature(token.feature()).unwrap_or(surface);

      match to {
        ScriptKind::Hiragana => converted.push_str(&katakana_to_hiragana(piece)),
        ScriptKind::Katakana => converted.push_str(piece),
        ScriptKind::Romaji => converted.push_str(&katakana_to_romaji(piece)),
      }
    }

    debug!(
      input_text = %text,
      total_tokens = worker.num_tokens(),
      converted = %converted,
      "スクリプト変換が完了"
    );

    Ok(converted)
  }
}

/// Extracts the katakana reading from an IPADIC feature string.
///
/// Returns `None` when the field is absent, empty, or `*` — unknown words
/// (ASCII text, half-width symbols) carry no reading.
pub fn reading_from_feature(feature: &str) -> Option<&str> {
  feature
    .split(',')
    .nth(IDX_READING)
    .filter(|s| !s.is_empty() && *s != "*")
}
