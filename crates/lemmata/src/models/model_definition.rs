//! Data Model Definition
use serde::Serialize;
use std::fmt;

/// One token with its linguistic attributes.
///
/// Character offsets count Unicode scalar values from the start of the annotated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Word {
  /// 1-based position within the sentence
  pub id: usize,

  /// Surface form
  pub text: String,

  /// Lemma (dictionary form or stem)
  pub lemma: String,

  /// Universal part-of-speech tag
  pub upos: String,

  /// Language-specific part-of-speech tag
  pub xpos: String,

  /// Raw morphological features, when the analyzer provides them
  #[serde(skip_serializing_if = "Option::is_none")]
  pub feats: Option<String>,

  /// Start offset (characters, inclusive)
  pub start_char: usize,

  /// End offset (characters, exclusive)
  pub end_char: usize,
}

/// The textual form of a word on the wire: a pretty-printed JSON object.
///
/// Non-ASCII text is written as-is, not `\u` escaped.
impl fmt::Display for Word {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let json = serde_json::to_string_pretty(self).map_err(|_| fmt::Error)?;
    f.write_str(&json)
  }
}

/// A sentence: the raw span it was derived from plus its words in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
  /// Raw text span of the sentence
  pub text: String,

  /// Words in reading order
  pub words: Vec<Word>,
}

impl Sentence {
  /// Constructor for Sentence
  pub fn new(text: impl Into<String>, words: Vec<Word>) -> Self {
    Self {
      text: text.into(),
      words,
    }
  }
}

/// Annotation result of one request text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
  /// Sentences in reading order
  pub sentences: Vec<Sentence>,
}

impl Document {
  /// Constructor for Document
  pub fn new(sentences: Vec<Sentence>) -> Self {
    Self { sentences }
  }

  /// Returns `true` when no sentence was found
  pub fn is_empty(&self) -> bool {
    self.sentences.is_empty()
  }

  /// Total number of words across all sentences
  pub fn word_count(&self) -> usize {
    self.sentences.iter().map(|s| s.words.len()).sum()
  }
}
