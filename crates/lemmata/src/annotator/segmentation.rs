//! Sentence and word segmentation on Unicode (UAX #29) boundaries

use unicode_segmentation::UnicodeSegmentation;

/// A slice of the input text together with its character offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
  /// The text of the span
  pub text: &'a str,
  /// Offset of the first character, counted in chars from the start of the input
  pub start_char: usize,
}

impl Span<'_> {
  /// Offset one past the last character
  pub fn end_char(&self) -> usize {
    self.start_char + self.text.chars().count()
  }
}

/// Converts increasing byte offsets of one string into char offsets without rescanning.
struct CharCursor<'a> {
  text: &'a str,
  byte: usize,
  chars: usize,
}

impl<'a> CharCursor<'a> {
  fn new(text: &'a str, base_chars: usize) -> Self {
    Self {
      text,
      byte: 0,
      chars: base_chars,
    }
  }

  /// `byte` must not be lower than the previous call's.
  fn char_offset(&mut self, byte: usize) -> usize {
    self.chars += self.text[self.byte..byte].chars().count();
    self.byte = byte;
    self.chars
  }
}

/// Splits text into sentences.
///
/// Surrounding whitespace is trimmed from each sentence; whitespace-only spans are dropped.
pub fn sentences(text: &str) -> Vec<Span<'_>> {
  let mut cursor = CharCursor::new(text, 0);

  text
    .split_sentence_bound_indices()
    .filter_map(|(byte, raw)| {
      let trimmed = raw.trim_start();
      let trimmed_start = byte + (raw.len() - trimmed.len());
      let trimmed = trimmed.trim_end();
      if trimmed.is_empty() {
        return None;
      }

      Some(Span {
        text: trimmed,
        start_char: cursor.char_offset(trimmed_start),
      })
    })
    .collect()
}

/// Splits one sentence into word tokens, skipping whitespace.
///
/// Offsets are absolute: they continue from `sentence.start_char`.
pub fn words<'a>(sentence: &Span<'a>) -> Vec<Span<'a>> {
  let mut cursor = CharCursor::new(sentence.text, sentence.start_char);

  sentence
    .text
    .split_word_bound_indices()
    .filter(|(_, token)| !token.trim().is_empty())
    .map(|(byte, token)| Span {
      text: token,
      start_char: cursor.char_offset(byte),
    })
    .collect()
}
