//! annotator モジュール
//!
//! 言語識別子から Annotator を構築し、テキストを Document に変換する。

pub mod segmentation;
pub mod stemming_annotator;
pub mod tagging;
pub mod vibrato_annotator;

use tracing::info;

use crate::config::{AnnotatorConfig, Language};
use crate::dictionary::DictionaryManager;
use crate::errors::LemmataResult;
use crate::models::Document;

/// 再エクスポート
pub use stemming_annotator::StemmingAnnotator;
pub use vibrato_annotator::MorphologicalAnnotator;

/// Turns raw text into an annotated document for one fixed language.
///
/// Implementations are read-only after construction: `annotate` is a pure
/// function of its input, so the same text always yields the same document.
pub trait Annotator {
  /// Language the annotator was built for
  fn language(&self) -> Language;

  /// Tokenizes, tags and lemmatizes `text`
  ///
  /// Empty or whitespace-only text yields an empty document.
  fn annotate(&self, text: &str) -> Document;
}

/// Builds the annotator for a language identifier.
///
/// - `ja`: morphological analysis (loads the configured vibrato dictionary)
/// - other supported codes: stemming annotator
///
/// # Errors
/// - `LemmataError::UnsupportedLanguage` if the identifier is not recognised
/// - `LemmataError::Dictionary` if the Japanese dictionary cannot be loaded
pub fn create(identifier: &str, config: &AnnotatorConfig) -> LemmataResult<Box<dyn Annotator>> {
  let language = Language::from_identifier(identifier)?;

  let annotator: Box<dyn Annotator> = match language.stemming_algorithm() {
    Some(algorithm) => Box::new(StemmingAnnotator::new(language, algorithm)),
    None => {
      let manager = DictionaryManager::from_config(config)?;
      if !manager.is_available_offline() {
        info!(
          dir = ?manager.preset_dir(),
          download = config.allow_download,
          "Dictionary is not cached yet"
        );
      }
      let dict = manager.load()?;
      Box::new(MorphologicalAnnotator::from_shared_dictionary(dict))
    }
  };

  info!(%language, "Annotator created");
  Ok(annotator)
}
