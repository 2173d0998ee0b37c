//! Part-of-speech helpers
//!
//! Maps vibrato feature strings (IPADIC / UniDic) and bare surface forms onto
//! Universal Dependencies tags.

/// Position of the lemma inside an IPADIC feature string
const IPADIC_IDX_LEMMA: usize = 6;
/// Position of the lemma inside a UniDic feature string
const UNIDIC_IDX_LEMMA: usize = 7;
/// IPADIC features have exactly 9 fields (7 for unknown words); UniDic has many more
const IPADIC_MAX_FIELDS: usize = 9;
/// Leading POS fields used for `xpos`
const POS_FIELDS: usize = 4;

/// Symbols that are not punctuation
const SYMBOL_CHARS: &str = "$%&*+<=>@^`|~¢£¤¥§©®°±µ¶×÷€™←↑→↓∞≠≤≥";

/// Closed-class English words and their tags
const ENGLISH_FUNCTION_WORDS: &[(&str, &str)] = &[
  ("a", "DET"),
  ("an", "DET"),
  ("the", "DET"),
  ("this", "DET"),
  ("that", "DET"),
  ("these", "DET"),
  ("those", "DET"),
  ("every", "DET"),
  ("some", "DET"),
  ("no", "DET"),
  ("i", "PRON"),
  ("you", "PRON"),
  ("he", "PRON"),
  ("she", "PRON"),
  ("it", "PRON"),
  ("we", "PRON"),
  ("they", "PRON"),
  ("me", "PRON"),
  ("him", "PRON"),
  ("her", "PRON"),
  ("us", "PRON"),
  ("them", "PRON"),
  ("my", "PRON"),
  ("your", "PRON"),
  ("his", "PRON"),
  ("its", "PRON"),
  ("our", "PRON"),
  ("their", "PRON"),
  ("who", "PRON"),
  ("what", "PRON"),
  ("in", "ADP"),
  ("on", "ADP"),
  ("at", "ADP"),
  ("of", "ADP"),
  ("to", "ADP"),
  ("for", "ADP"),
  ("with", "ADP"),
  ("from", "ADP"),
  ("by", "ADP"),
  ("about", "ADP"),
  ("into", "ADP"),
  ("over", "ADP"),
  ("under", "ADP"),
  ("and", "CCONJ"),
  ("or", "CCONJ"),
  ("but", "CCONJ"),
  ("nor", "CCONJ"),
  ("because", "SCONJ"),
  ("if", "SCONJ"),
  ("while", "SCONJ"),
  ("although", "SCONJ"),
  ("is", "AUX"),
  ("am", "AUX"),
  ("are", "AUX"),
  ("was", "AUX"),
  ("were", "AUX"),
  ("be", "AUX"),
  ("been", "AUX"),
  ("being", "AUX"),
  ("have", "AUX"),
  ("has", "AUX"),
  ("had", "AUX"),
  ("do", "AUX"),
  ("does", "AUX"),
  ("did", "AUX"),
  ("will", "AUX"),
  ("would", "AUX"),
  ("can", "AUX"),
  ("could", "AUX"),
  ("shall", "AUX"),
  ("should", "AUX"),
  ("may", "AUX"),
  ("might", "AUX"),
  ("must", "AUX"),
  ("not", "PART"),
  ("'s", "PART"),
  ("oh", "INTJ"),
  ("hello", "INTJ"),
  ("yes", "INTJ"),
];

/// Tags a token by its characters alone.
///
/// Returns `Some("PUNCT" | "SYM" | "NUM")` for tokens without letters, `None` otherwise.
pub fn tag_by_characters(surface: &str) -> Option<&'static str> {
  if surface.is_empty() {
    return None;
  }

  if surface.chars().next().is_some_and(char::is_numeric)
    && surface.chars().all(|c| c.is_numeric() || matches!(c, '.' | ',' | '/' | ':'))
  {
    return Some("NUM");
  }

  if surface.chars().any(char::is_alphanumeric) {
    return None;
  }

  if surface.chars().all(|c| SYMBOL_CHARS.contains(c)) {
    Some("SYM")
  } else {
    Some("PUNCT")
  }
}

/// Looks up the tag of an English closed-class word (input must be lowercase).
pub fn english_function_word(lowercase: &str) -> Option<&'static str> {
  ENGLISH_FUNCTION_WORDS
    .iter()
    .find(|(word, _)| *word == lowercase)
    .map(|(_, tag)| *tag)
}

/// Universal tag for a vibrato feature string
///
/// IPADIC and UniDic top-level categories are both recognised.
pub fn universal_tag_for_feature(feature: &str) -> &'static str {
  let mut fields = feature.split(',');
  let pos = fields.next().unwrap_or_default();
  let detail = fields.next().unwrap_or_default();

  match pos {
    "名詞" => match detail {
      "固有名詞" => "PROPN",
      "代名詞" => "PRON",
      "数" | "数詞" => "NUM",
      _ => "NOUN",
    },
    "代名詞" => "PRON",
    "動詞" => "VERB",
    "形容詞" | "形状詞" => "ADJ",
    "副詞" => "ADV",
    "助詞" => "ADP",
    "助動詞" => "AUX",
    "接続詞" => "CCONJ",
    "連体詞" => "DET",
    "感動詞" | "フィラー" => "INTJ",
    "記号" | "補助記号" => match detail {
      "句点" | "読点" | "括弧開" | "括弧閉" | "空白" => "PUNCT",
      _ => "SYM",
    },
    "接頭詞" | "接頭辞" | "接尾辞" => "PART",
    _ => "X",
  }
}

/// Language-specific tag: the leading POS fields without `*` wildcards, joined with `-`
pub fn xpos_from_feature(feature: &str) -> String {
  feature
    .split(',')
    .take(POS_FIELDS)
    .filter(|field| !field.is_empty() && *field != "*")
    .collect::<Vec<_>>()
    .join("-")
}

/// Lemma recorded in a feature string, if any
///
/// The field position depends on the dictionary family, detected from the field count.
pub fn lemma_from_feature(feature: &str) -> Option<&str> {
  let parts: Vec<&str> = feature.split(',').collect();
  let idx = if parts.len() > IPADIC_MAX_FIELDS {
    UNIDIC_IDX_LEMMA
  } else {
    IPADIC_IDX_LEMMA
  };

  parts.get(idx).copied().filter(|s| !s.is_empty() && *s != "*")
}

/// UniDic marks whitespace runs with a dedicated POS
pub fn is_whitespace_feature(feature: &str) -> bool {
  feature.starts_with("空白")
}
