//! Katakana → romaji mapping (Hepburn, wapuro style).
//!
//! The analyzer hands us katakana readings, so only katakana needs a table.
//! Wapuro conventions: no macrons, `ー` repeats the previous vowel,
//! `ン` is always `n`.

/// Romanizes a katakana reading.
///
/// - Digraphs (キャ, シュ, ファ, ...) are matched before single kana.
/// - Sokuon `ッ` doubles the following consonant (`ッチ` → `tch` per Hepburn).
/// - `ー` repeats the last vowel already emitted (`ラーメン` → `raamen`).
/// - Characters without a table entry (ASCII, kanji, punctuation) pass through.
pub fn katakana_to_romaji(text: &str) -> String {
  let chars: Vec<char> = text.chars().collect();
  let mut out = String::with_capacity(text.len());
  let mut i = 0;

  while i < chars.len() {
    let c = chars[i];

    // 促音: double the consonant of the next kana.
    // A trailing ッ has nothing to attach to and is dropped.
    if c == 'ッ' {
      if let Some(next_romaji) = next_kana_romaji(&chars, i + 1) {
        // Hepburn writes ッチ as "tch", otherwise the first consonant doubles
        if next_romaji.starts_with("ch") {
          out.push('t');
        } else if let Some(first) = next_romaji.chars().next() {
          if first.is_ascii_alphabetic() && !is_vowel(first) {
            out.push(first);
          }
        }
      }
      i += 1;
      continue;
    }

    // 長音記号: repeat the previous vowel
    if c == 'ー' {
      if let Some(v) = out.chars().rev().find(|ch| is_vowel(*ch)) {
        out.push(v);
      }
      i += 1;
      continue;
    }

    // Digraph first (two kana), then single kana
    if i + 1 < chars.len() {
      if let Some(s) = digraph(c, chars[i + 1]) {
        out.push_str(s);
        i += 2;
        continue;
      }
    }

    match single(c) {
      Some(s) => out.push_str(s),
      None => out.push(c),
    }
    i += 1;
  }

  out
}

/// Romaji of the kana starting at `pos`, used for sokuon doubling.
fn next_kana_romaji(chars: &[char], pos: usize) -> Option<&'static str> {
  let c = *chars.get(pos)?;
  if pos + 1 < chars.len() {
    if let Some(s) = digraph(c, chars[pos + 1]) {
      return Some(s);
    }
  }
  single(c)
}

fn is_vowel(c: char) -> bool {
  matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

/// Two-kana combinations (拗音・外来音).
fn digraph(first: char, second: char) -> Option<&'static str> {
  Some(match (first, second) {
    ('キ', 'ャ') => "kya",
    ('キ', 'ュ') => "kyu",
    ('キ', 'ョ') => "kyo",
    ('シ', 'ャ') => "sha",
    ('シ', 'ュ') => "shu",
    ('シ', 'ョ') => "sho",
    ('シ', 'ェ') => "she",
    ('チ', 'ャ') => "cha",
    ('チ', 'ュ') => "chu",
    ('チ', 'ョ') => "cho",
    ('チ', 'ェ') => "che",
    ('ニ', 'ャ') => "nya",
    ('ニ', 'ュ') => "nyu",
    ('ニ', 'ョ') => "nyo",
    ('ヒ', 'ャ') => "hya",
    ('ヒ', 'ュ') => "hyu",
    ('ヒ', 'ョ') => "hyo",
    ('ミ', 'ャ') => "mya",
    ('ミ', 'ュ') => "myu",
    ('ミ', 'ョ') => "myo",
    ('リ', 'ャ') => "rya",
    ('リ', 'ュ') => "ryu",
    ('リ', 'ョ') => "ryo",
    ('ギ', 'ャ') => "gya",
    ('ギ', 'ュ') => "gyu",
    ('ギ', 'ョ') => "gyo",
    ('ジ', 'ャ') => "ja",
    ('ジ', 'ュ') => "ju",
    ('ジ', 'ョ') => "jo",
    ('ジ', 'ェ') => "je",
    ('ヂ', 'ャ') => "ja",
    ('ヂ', 'ュ') => "ju",
    ('ヂ', 'ョ') => "jo",
    ('ビ', 'ャ') => "bya",
    ('ビ', 'ュ') => "byu",
    ('ビ', 'ョ') => "byo",
    ('ピ', 'ャ') => "pya",
    ('ピ', 'ュ') => "pyu",
    ('ピ', 'ョ') => "pyo",
    ('テ', 'ィ') => "ti",
    ('デ', 'ィ') => "di",
    ('ト', 'ゥ') => "tu",
    ('ド', 'ゥ') => "du",
    ('フ', 'ァ') => "fa",
    ('フ', 'ィ') => "fi",
    ('フ', 'ェ') => "fe",
    ('フ', 'ォ') => "fo",
    ('ウ', 'ィ') => "wi",
    ('ウ', 'ェ') => "we",
    ('ウ', 'ォ') => "wo",
    ('ヴ', 'ァ') => "va",
    ('ヴ', 'ィ') => "vi",
    ('ヴ', 'ェ') => "ve",
    ('ヴ', 'ォ') => "vo",
    ('ツ', 'ァ') => "tsa",
    ('ツ', 'ィ') => "tsi",
    ('ツ', 'ェ') => "tse",
    ('ツ', 'ォ') => "tso",
    ('イ', 'ェ') => "ye",
    _ => return None,
  })
}

/// Single kana entries (五十音・濁音・半濁音・小書き).
fn single(c: char) -> Option<&'static str> {
  Some(match c {
    'ア' => "a",
    'イ' => "i",
    'ウ' => "u",
    'エ' => "e",
    'オ' => "o",
    'カ' => "ka",
    'キ' => "ki",
    'ク' => "ku",
    'ケ' => "ke",
    'コ' => "ko",
    'サ' => "sa",
    'シ' => "shi",
    'ス' => "su",
    'セ' => "se",
    'ソ' => "so",
    'タ' => "ta",
    'チ' => "chi",
    'ツ' => "tsu",
    'テ' => "te",
    'ト' => "to",
    'ナ' => "na",
    'ニ' => "ni",
    'ヌ' => "nu",
    'ネ' => "ne",
    'ノ' => "no",
    'ハ' => "ha",
    'ヒ' => "hi",
    'フ' => "fu",
    'ヘ' => "he",
    'ホ' => "ho",
    'マ' => "ma",
    'ミ' => "mi",
    'ム' => "mu",
    'メ' => "me",
    'モ' => "mo",
    'ヤ' => "ya",
    'ユ' => "yu",
    'ヨ' => "yo",
    'ラ' => "ra",
    'リ' => "ri",
    'ル' => "ru",
    'レ' => "re",
    'ロ' => "ro",
    'ワ' => "wa",
    'ヰ' => "wi",
    'ヱ' => "we",
    'ヲ' => "wo",
    'ン' => "n",
    'ガ' => "ga",
    'ギ' => "gi",
    'グ' => "gu",
    'ゲ' => "ge",
    'ゴ' => "go",
    'ザ' => "za",
    'ジ' => "ji",
    'ズ' => "zu",
    'ゼ' => "ze",
    'ゾ' => "zo",
    'ダ' => "da",
    'ヂ' => "ji",
    'ヅ' => "zu",
    'デ' => "de",
    'ド' => "do",
    'バ' => "ba",
    'ビ' => "bi",
    'ブ' => "bu",
    'ベ' => "be",
    'ボ' => "bo",
    'パ' => "pa",
    'ピ' => "pi",
    'プ' => "pu",
    'ペ' => "pe",
    'ポ' => "po",
    'ヴ' => "vu",
    'ァ' => "a",
    'ィ' => "i",
    'ゥ' => "u",
    'ェ' => "e",
    'ォ' => "o",
    'ャ' => "ya",
    'ュ' => "yu",
    'ョ' => "yo",
    _ => return None,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn basic_gojuon() {
    assert_eq!(katakana_to_romaji("トウキョウ"), "toukyou");
    assert_eq!(katakana_to_romaji("サシスセソ"), "sashisuseso");
  }

  #[test]
  fn digraphs() {
    assert_eq!(katakana_to_romaji("キャラクター"), "kyarakutaa");
    assert_eq!(katakana_to_romaji("シャシン"), "shashin");
    assert_eq!(katakana_to_romaji("ジュース"), "juusu");
  }

  /// 促音は次の子音を重ねる
  #[test]
  fn sokuon_doubles_consonant() {
    assert_eq!(katakana_to_romaji("ガッコウ"), "gakkou");
    assert_eq!(katakana_to_romaji("ニッポン"), "nippon");
  }

  /// ヘボン式では ッチ は tch になる
  #[test]
  fn sokuon_before_chi_is_tch() {
    assert_eq!(katakana_to_romaji("マッチャ"), "matcha");
  }

  /// 長音記号は直前の母音を繰り返す
  #[test]
  fn prolonged_sound_repeats_vowel() {
    assert_eq!(katakana_to_romaji("ラーメン"), "raamen");
    assert_eq!(katakana_to_romaji("スーパー"), "suupaa");
  }

  #[test]
  fn trailing_sokuon_is_dropped() {
    assert_eq!(katakana_to_romaji("アッ"), "a");
  }

  #[test]
  fn foreign_sounds() {
    assert_eq!(katakana_to_romaji("ファイル"), "fairu");
    assert_eq!(katakana_to_romaji("パーティー"), "paatii");
    assert_eq!(katakana_to_romaji("ヴァイオリン"), "vaiorin");
  }

  #[test]
  fn non_kana_passes_through() {
    assert_eq!(katakana_to_romaji("OK123"), "OK123");
    assert_eq!(katakana_to_romaji("テスト、"), "tesuto、");
  }
}
