//! Punctuation normalization for hiragana output.
//!
//! Commas, periods, terminal marks and parentheses are collapsed onto their
//! full-width Japanese counterparts, then runs of 、 and 。 are deduplicated.

use regex::Regex;
use std::sync::LazyLock;

/// 空白・カンマ類 → 読点
static TOUTEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s,，、]").expect("valid regex"));

/// ピリオド類 → 句点
static KUTEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.．。]").expect("valid regex"));

/// 疑問符・感嘆符類 → 全角感嘆符
static KANTAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[?!？！]").expect("valid regex"));

/// 括弧類 → 全角開き括弧
static KAKKO: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[()（）]").expect("valid regex"));

/// 読点の連続 → 一つ
static TOUTEN_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"、+").expect("valid regex"));

/// 句点の連続 → 一つ
static KUTEN_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"。+").expect("valid regex"));

/// Normalizes punctuation in converted hiragana text.
///
/// Substitutions run in this exact order:
/// 1. whitespace / `,` / `，` / `、` → `、`
/// 2. `.` / `．` / `。` → `。`
/// 3. `?` / `!` / `？` / `！` → `！`
/// 4. `(` / `)` / `（` / `）` → `（`
/// 5. runs of `、` → one `、`
/// 6. runs of `。` → one `。`
///
/// Steps 3 and 4 lose information: both terminal marks collapse to ！ and
/// both parentheses collapse to （. The chain is idempotent: applying it
/// twice yields the same string as applying it once.
pub fn normalize_punctuation(text: &str) -> String {
  let text = TOUTEN.replace_all(text, "、");
  let text = KUTEN.replace_all(&text, "。");
  let text = KANTAN.replace_all(&text, "！");
  let text = KAKKO.replace_all(&text, "（");
  let text = TOUTEN_RUN.replace_all(&text, "、");
  let text = KUTEN_RUN.replace_all(&text, "。");
  text.into_owned()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn commas_periods_and_question_mark() {
    assert_eq!(
      normalize_punctuation("こんにちは,世界.OK?"),
      "こんにちは、世界。OK！"
    );
  }

  /// 全角空白と読点の連続は一つの読点に潰れる
  #[test]
  fn whitespace_and_comma_runs_collapse() {
    assert_eq!(normalize_punctuation("　、、、"), "、");
  }

  #[test]
  fn period_runs_collapse() {
    assert_eq!(normalize_punctuation("。。。"), "。");
    assert_eq!(normalize_punctuation("おわり..."), "おわり。");
  }

  /// ？も！も同じ全角感嘆符になる（連続は潰さない）
  #[test]
  fn terminal_marks_all_become_exclamation() {
    assert_eq!(normalize_punctuation("え?!"), "え！！");
    assert_eq!(normalize_punctuation("すごい！？"), "すごい！！");
  }

  /// 閉じ括弧も開き括弧に寄る
  #[test]
  fn parentheses_collapse_to_opening_bracket() {
    assert_eq!(normalize_punctuation("(てすと)"), "（てすと（");
    assert_eq!(normalize_punctuation("（てすと）"), "（てすと（");
  }

  #[test]
  fn half_width_space_becomes_touten() {
    assert_eq!(normalize_punctuation("あ い"), "あ、い");
  }

  #[test]
  fn full_width_comma_and_period() {
    assert_eq!(normalize_punctuation("あ，い．"), "あ、い。");
  }

  #[test]
  fn chain_is_idempotent() {
    let samples = [
      "こんにちは,世界.OK?",
      "　、、、",
      "(てすと)",
      "え?!",
      "。。。、、、",
      "ただのてきすと",
    ];
    for s in samples {
      let once = normalize_punctuation(s);
      let twice = normalize_punctuation(&once);
      assert_eq!(once, twice, "not idempotent for input: {s:?}");
    }
  }

  #[test]
  fn plain_text_is_untouched() {
    assert_eq!(normalize_punctuation("とうきょうたわー"), "とうきょうたわー");
  }
}
