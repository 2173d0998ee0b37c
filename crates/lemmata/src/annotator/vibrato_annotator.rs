//! Japanese annotator using vibrato
//!
//! Sentences are split on Unicode boundaries first; each sentence is then
//! analysed morphologically and every token keeps its dictionary feature.

use std::sync::Arc;
use tracing::debug;
use vibrato_rkyv::Dictionary;
use vibrato_rkyv::Tokenizer as VibratoImpl;

use super::Annotator;
use super::segmentation;
use super::tagging::{
  is_whitespace_feature, lemma_from_feature, universal_tag_for_feature, xpos_from_feature,
};
use crate::config::Language;
use crate::models::{Document, Sentence, Word};

/// Morphological annotator for Japanese
///
/// - Holds the tokenizer only; a worker is created per call
/// - Same input always gives the same output
pub struct MorphologicalAnnotator {
  inner: VibratoImpl,
}

impl MorphologicalAnnotator {
  /// Constructs an annotator from a shared dictionary (`Arc<Dictionary>`),
  /// as returned by `DictionaryManager::load()`.
  pub fn from_shared_dictionary(dict: Arc<Dictionary>) -> Self {
    Self {
      inner: VibratoImpl::from_shared_dictionary(dict),
    }
  }

  fn annotate_sentence(&self, span: &segmentation::Span<'_>) -> Sentence {
    // worker holds lattice for analysis and calculation area.
    let mut worker = self.inner.new_worker();
    worker.reset_sentence(span.text);
    worker.tokenize();

    let mut words = Vec::with_capacity(worker.num_tokens());
    for token in worker.token_iter() {
      let surface = token.surface();
      let feature = token.feature();

      if surface.trim().is_empty() || is_whitespace_feature(feature) {
        continue;
      }

      // range_char() is relative to the sentence
      let range = token.range_char();
      words.push(Word {
        id: words.len() + 1,
        text: surface.to_string(),
        lemma: lemma_from_feature(feature).unwrap_or(surface).to_string(),
        upos: universal_tag_for_feature(feature).to_string(),
        xpos: xpos_from_feature(feature),
        feats: Some(feature.to_string()),
        start_char: span.start_char + range.start,
        end_char: span.start_char + range.end,
      });
    }

    debug!(
      sentence = %span.text,
      total_tokens = worker.num_tokens(),
      words = words.len(),
      "Morphological analysis completed"
    );

    Sentence::new(span.text, words)
  }
}

impl Annotator for MorphologicalAnnotator {
  fn language(&self) -> Language {
    Language::Ja
  }

  fn annotate(&self, text: &str) -> Document {
    let sentences = segmentation::sentences(text)
      .iter()
      .map(|span| self.annotate_sentence(span))
      .collect();
    Document::new(sentences)
  }
}
