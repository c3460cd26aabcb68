//! script モジュール
pub mod kana;
pub mod romaji;

/// 再エクスポート
pub use kana::{ScriptKind, katakana_to_hiragana};
pub use romaji::katakana_to_romaji;
