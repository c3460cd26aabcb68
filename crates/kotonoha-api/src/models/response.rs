//! Response Model Definition

use kotonoha::script::ScriptKind;
use serde::Serialize;

/// Translation Relay Response
#[derive(Debug, Serialize)]
pub struct TranslateResponse {
  /// First translation returned by the provider, verbatim
  pub translation: String,
}

/// Script Conversion Response
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
  /// Input text as received
  pub original: String,
  /// Converted (and, for hiragana, punctuation-normalized) text
  pub converted: String,
  /// Resolved target script, serialized lowercase
  pub format: ScriptKind,
}
