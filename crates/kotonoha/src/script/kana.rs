//! Target script selection and katakana → hiragana mapping.

use serde::{Deserialize, Serialize};

/// Target script for a conversion.
///
/// Readings produced by the morphological analyzer are katakana, so
/// `Katakana` is the identity rendering and the other two are derived
/// from it ([`katakana_to_hiragana`], [`crate::script::katakana_to_romaji`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptKind {
  /// ひらがな（平仮名）
  #[default]
  Hiragana,
  /// カタカナ（片仮名）
  Katakana,
  /// ローマ字（ヘボン式・ワープロ風）
  Romaji,
}

impl ScriptKind {
  /// Returns the lowercase script name used in request/response payloads.
  ///
  /// # Examples
  /// - `ScriptKind::Hiragana` → `"hiragana"`
  /// - `ScriptKind::Romaji` → `"romaji"`
  pub fn code(&self) -> &'static str {
    match self {
      ScriptKind::Hiragana => "hiragana",
      ScriptKind::Katakana => "katakana",
      ScriptKind::Romaji => "romaji",
    }
  }
}

impl std::fmt::Display for ScriptKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.code())
  }
}

/// Maps katakana to hiragana.
///
/// Characters in the range U+30A1 (ァ) ..= U+30F6 (ヶ) are shifted down by
/// 0x60 onto the hiragana block. Everything else (長音記号 ー, punctuation,
/// ASCII, kanji) passes through unchanged.
pub fn katakana_to_hiragana(text: &str) -> String {
  text
    .chars()
    .map(|c| match c {
      'ァ'..='ヶ' => {
        // The hiragana block sits exactly 0x60 below the katakana block
        char::from_u32(c as u32 - 0x60).unwrap_or(c)
      }
      _ => c,
    })
    .collect()
}
