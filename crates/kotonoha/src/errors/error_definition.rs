//! エラー定義

use std::io;
use std::sync::Arc;
use thiserror::Error;

/// 辞書関連のエラー
/// Vibrato では ipadic, unidic 等のプリセット辞書を使用可能
/// これらのエラーを定義する
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum DictionaryError {
  /// キャッシュディレクトリーが見つからない
  #[error("辞書キャッシュディレクトリーが見つかりません")]
  CacheDirNotFound,

  /// キャッシュディレクトリーの作成失敗
  #[error("辞書キャッシュディレクトリーの作成に失敗しました: {0}")]
  CacheDirCreationFailed(Arc<io::Error>),

  /// 指定された辞書が見つからない
  #[error("指定された辞書が見つかりません: {0}")]
  DictionaryNotFound(String),

  /// vibrato-rkyv による辞書のロード失敗
  #[error("vibrato-rkyv 辞書ロードエラー: {0}")]
  VibratoLoad(Arc<dyn std::error::Error + Send + Sync + 'static>),

  /// vibrato-rkyv のプリセット辞書のダウンロード失敗
  #[error("vibrato-rkyv プリセット辞書ダウンロード失敗: {0}")]
  PresetDictDownloadFailed(Arc<dyn std::error::Error + Send + Sync + 'static>),
}

/// スクリプト変換関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConvertError {
  /// 辞書起因のエラー
  #[error("辞書エラー: {0}")]
  Dictionary(#[from] DictionaryError),

  /// 変換対象の入力テキストが不正
  #[error("変換対象の入力テキストが不正: {reason}")]
  InvalidInput {
    /// 不正の理由
    reason: String,
  },
}

/// 統合エラー
/// 本クレートの外部に公開するエラー用 API はこのエラーを返すこと
/// `KotonohaResult<T>` = `Result<T, KotonohaError>` として使用する
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum KotonohaError {
  /// 辞書関連エラー
  #[error(transparent)]
  Dictionary(#[from] DictionaryError),

  /// スクリプト変換関連エラー
  #[error(transparent)]
  Convert(#[from] ConvertError),
}

/// kotonoha クレートの標準 Result 型エイリアス
pub type KotonohaResult<T> = Result<T, KotonohaError>;
