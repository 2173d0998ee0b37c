//! Annotator for space-delimited languages
//!
//! Words come from Unicode word boundaries, lemmas from a Snowball stemmer.

use rust_stemmers::{Algorithm, Stemmer};
use tracing::debug;

use super::Annotator;
use super::segmentation;
use super::tagging::{english_function_word, tag_by_characters};
use crate::config::Language;
use crate::models::{Document, Sentence, Word};

/// Tag used when nothing better is known
const UNKNOWN_TAG: &str = "X";
/// This annotator has no language-specific tagset
const NO_XPOS: &str = "_";

/// Stemmer-backed annotator
pub struct StemmingAnnotator {
  language: Language,
  stemmer: Stemmer,
}

impl StemmingAnnotator {
  /// Builds an annotator for `language` using the given Snowball algorithm
  pub fn new(language: Language, algorithm: Algorithm) -> Self {
    Self {
      language,
      stemmer: Stemmer::create(algorithm),
    }
  }

  fn annotate_word(&self, id: usize, span: &segmentation::Span<'_>) -> Word {
    let lowercase = span.text.to_lowercase();

    let (upos, lemma) = match tag_by_characters(span.text) {
      Some(tag) => (tag, span.text.to_string()),
      None => {
        let function_word = match self.language {
          Language::En => english_function_word(&lowercase),
          _ => None,
        };
        let upos = function_word.unwrap_or(UNKNOWN_TAG);
        (upos, self.stemmer.stem(&lowercase).into_owned())
      }
    };

    Word {
      id,
      text: span.text.to_string(),
      lemma,
      upos: upos.to_string(),
      xpos: NO_XPOS.to_string(),
      feats: None,
      start_char: span.start_char,
      end_char: span.end_char(),
    }
  }
}

impl Annotator for StemmingAnnotator {
  fn language(&self) -> Language {
    self.language
  }

  fn annotate(&self, text: &str) -> Document {
    let sentences: Vec<Sentence> = segmentation::sentences(text)
      .iter()
      .map(|span| {
        let words = segmentation::words(span)
          .iter()
          .enumerate()
          .map(|(i, word)| self.annotate_word(i + 1, word))
          .collect();
        Sentence::new(span.text, words)
      })
      .collect();

    let document = Document::new(sentences);
    debug!(
      language = %self.language,
      sentences = document.sentences.len(),
      words = document.word_count(),
      "Annotation completed"
    );
    document
  }
}
