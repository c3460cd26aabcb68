//! kotonoha 日本語スクリプト変換ライブラリー
//!
//! vibrato-rkyv の形態素解析を用いて、漢字かな交じり文を
//! ひらがな・カタカナ・ローマ字へ変換する

/// 変換モジュール - ScriptConverter による読み仮名ベースのスクリプト変換を提供
pub mod converter;

/// 辞書モジュール - 形態素解析用辞書の管理・ロード機能を提供
pub mod dictionary;

/// エラーモジュール - KotonohaError, KotonohaResult等のエラー型を定義
pub mod errors;

/// 正規化モジュール - ひらがな出力に対する約物（句読点）正規化を提供
pub mod normalize;

/// スクリプトモジュール - ScriptKind とかな・ローマ字の対応表を定義
pub mod script;

/// 再エクスポート
pub use converter::ScriptConverter;
pub use errors::{KotonohaError, KotonohaResult};
pub use normalize::normalize_punctuation;
pub use script::ScriptKind;
