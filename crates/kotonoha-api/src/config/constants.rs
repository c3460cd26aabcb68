//! API設定の定数定義

/// 入力テキストの最大長（バイト単位）
///
/// 翻訳リレー・スクリプト変換の双方に適用する。
/// 大きなテキストの処理によるリソース枯渇を防ぐための制限。
pub const MAX_TEXT_LENGTH: usize = 100_000;

/// デフォルトのバインドアドレス
///
/// 開発環境での利用を想定した localhost の標準ポート。
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// デフォルトの辞書プリセット名
///
/// IPAdic をデフォルトとして使用。
/// 素性配列の 8 番目（添字 7）にカタカナ読みを持つ辞書フォーマット。
pub const DEFAULT_PRESET_DICT: &str = "ipadic";

/// DeepL API のデフォルトエンドポイント（Free プラン）
pub const DEFAULT_DEEPL_API_URL: &str = "https://api-free.deepl.com/v2/translate";
