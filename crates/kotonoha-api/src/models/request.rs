//! リクエストモデル定義

use kotonoha::script::ScriptKind;
use serde::Deserialize;

/// 翻訳リレーリクエスト
///
/// `text` の欠落は空文字列として受け、サービス層のバリデーションで
/// 400 に落とす（デシリアライズの段階では拒否しない）。
#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
  /// 翻訳対象のテキスト
  #[serde(default)]
  pub text: String,
}

/// スクリプト変換リクエスト
///
/// `to` を省略した場合はひらがなに変換する。
#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
  /// 変換対象のテキスト
  #[serde(default)]
  pub text: String,
  /// 変換先スクリプト（省略時: hiragana）
  #[serde(default)]
  pub to: ScriptKind,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserialize_translate_request() {
    let json = r#"{"text": "Hello"}"#;
    let req: TranslateRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.text, "Hello");
  }

  #[test]
  fn deserialize_convert_request_with_target() {
    let json = r#"{"text": "東京", "to": "romaji"}"#;
    let req: ConvertRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.text, "東京");
    assert_eq!(req.to, ScriptKind::Romaji);
  }

  /// to 省略時はひらがなにフォールバックする
  #[test]
  fn convert_request_defaults_to_hiragana() {
    let json = r#"{"text": "犬"}"#;
    let req: ConvertRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.to, ScriptKind::Hiragana);
  }

  /// 未知の変換先はデシリアライズの段階で拒否される
  #[test]
  fn convert_request_rejects_unknown_target() {
    let json = r#"{"text": "犬", "to": "kanji"}"#;
    let result = serde_json::from_str::<ConvertRequest>(json);
    assert!(result.is_err());
  }

  #[test]
  fn deserialize_empty_text() {
    let json = r#"{"text": ""}"#;
    let req: TranslateRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.text, "");
  }

  /// text フィールドの欠落は空文字列として受ける
  #[test]
  fn missing_text_field_becomes_empty_string() {
    let req: TranslateRequest = serde_json::from_str("{}").unwrap();
    assert_eq!(req.text, "");
  }
}
