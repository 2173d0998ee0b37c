// crates/lemmata/src/config.rs

use std::path::{Path, PathBuf};
use std::str::FromStr;

use rust_stemmers::Algorithm;
use vibrato_rkyv::dictionary::PresetDictionaryKind;

use crate::errors::{ConfigError, LemmataError};

/// Supported language types.
///
/// Japanese is analysed morphologically with vibrato-rkyv.
/// Every other language is segmented on Unicode word boundaries and lemmatized with a Snowball stemmer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
  /// Japanese (Morphological Analysis: vibrato-rkyv)
  Ja,
  /// Arabic
  Ar,
  /// Danish
  Da,
  /// German
  De,
  /// Greek
  El,
  /// English
  En,
  /// Spanish
  Es,
  /// Finnish
  Fi,
  /// French
  Fr,
  /// Hungarian
  Hu,
  /// Italian
  It,
  /// Dutch
  Nl,
  /// Norwegian
  No,
  /// Portuguese
  Pt,
  /// Romanian
  Ro,
  /// Russian
  Ru,
  /// Swedish
  Sv,
  /// Tamil
  Ta,
  /// Turkish
  Tr,
}

impl Language {
  /// All supported languages, Japanese first.
  pub const ALL: [Language; 19] = [
    Language::Ja,
    Language::Ar,
    Language::Da,
    Language::De,
    Language::El,
    Language::En,
    Language::Es,
    Language::Fi,
    Language::Fr,
    Language::Hu,
    Language::It,
    Language::Nl,
    Language::No,
    Language::Pt,
    Language::Ro,
    Language::Ru,
    Language::Sv,
    Language::Ta,
    Language::Tr,
  ];

  /// Returns the ISO 639-1 language code.
  ///
  /// # Examples
  /// - `Language::Ja` → `"ja"`
  /// - `Language::En` → `"en"`
  pub fn code(&self) -> &'static str {
    match self {
      Language::Ja => "ja",
      Language::Ar => "ar",
      Language::Da => "da",
      Language::De => "de",
      Language::El => "el",
      Language::En => "en",
      Language::Es => "es",
      Language::Fi => "fi",
      Language::Fr => "fr",
      Language::Hu => "hu",
      Language::It => "it",
      Language::Nl => "nl",
      Language::No => "no",
      Language::Pt => "pt",
      Language::Ro => "ro",
      Language::Ru => "ru",
      Language::Sv => "sv",
      Language::Ta => "ta",
      Language::Tr => "tr",
    }
  }

  /// Returns the Snowball stemming algorithm for this language.
  ///
  /// - Japanese: `None` (lemmas come from the morphological dictionary)
  pub fn stemming_algorithm(&self) -> Option<Algorithm> {
    let algorithm = match self {
      Language::Ja => return None,
      Language::Ar => Algorithm::Arabic,
      Language::Da => Algorithm::Danish,
      Language::De => Algorithm::German,
      Language::El => Algorithm::Greek,
      Language::En => Algorithm::English,
      Language::Es => Algorithm::Spanish,
      Language::Fi => Algorithm::Finnish,
      Language::Fr => Algorithm::French,
      Language::Hu => Algorithm::Hungarian,
      Language::It => Algorithm::Italian,
      Language::Nl => Algorithm::Dutch,
      Language::No => Algorithm::Norwegian,
      Language::Pt => Algorithm::Portuguese,
      Language::Ro => Algorithm::Romanian,
      Language::Ru => Algorithm::Russian,
      Language::Sv => Algorithm::Swedish,
      Language::Ta => Algorithm::Tamil,
      Language::Tr => Algorithm::Turkish,
    };
    Some(algorithm)
  }

  /// Resolves a language identifier as read from the protocol.
  ///
  /// Surrounding whitespace is ignored, matching is ASCII case-insensitive and
  /// only the primary subtag decides (`en-US`, `pt_BR` → `en`, `pt`).
  ///
  /// # Errors
  /// `LemmataError::UnsupportedLanguage` carrying the identifier as given.
  pub fn from_identifier(identifier: &str) -> Result<Self, LemmataError> {
    let unsupported = || LemmataError::UnsupportedLanguage {
      identifier: identifier.to_string(),
    };

    let primary = identifier.trim().split(['-', '_']).next().unwrap_or_default().to_ascii_lowercase();

    // Bokmål and Nynorsk share the Norwegian stemmer
    let primary = match primary.as_str() {
      "nb" | "nn" => "no",
      other => other,
    };

    Language::ALL.into_iter().find(|lang| lang.code() == primary).ok_or_else(unsupported)
  }
}

impl std::fmt::Display for Language {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.code())
  }
}

impl FromStr for Language {
  type Err = LemmataError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Language::from_identifier(s)
  }
}

/// Preset dictionary type.
///
/// `PresetDictionaryKind` belongs to vibrato-rkyv and has no `FromStr`,
/// so configuration goes through this enum and is converted with `.into()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictionaryPreset {
  /// IpaDic: The smallest
  Ipadic,
  /// Unidic for written language
  UnidicCwj,
  /// Unidic for spoken language
  UnidicCsj,
}

impl FromStr for DictionaryPreset {
  type Err = ConfigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "ipadic" => Ok(Self::Ipadic),
      "unidic-cwj" => Ok(Self::UnidicCwj),
      "unidic-csj" => Ok(Self::UnidicCsj),
      _ => Err(ConfigError::UnknownPreset(s.to_string())),
    }
  }
}

impl From<DictionaryPreset> for PresetDictionaryKind {
  fn from(preset: DictionaryPreset) -> Self {
    match preset {
      DictionaryPreset::Ipadic => PresetDictionaryKind::Ipadic,
      DictionaryPreset::UnidicCwj => PresetDictionaryKind::UnidicCwj,
      DictionaryPreset::UnidicCsj => PresetDictionaryKind::UnidicCsj,
    }
  }
}

/// Settings that decide how an annotator is built.
///
/// Only the Japanese annotator reads the dictionary fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatorConfig {
  /// Preset dictionary used when no local dictionary is given
  pub preset: DictionaryPreset,
  /// Local vibrato dictionary file; takes precedence over `preset`
  pub dictionary_path: Option<PathBuf>,
  /// Dictionary cache directory.
  ///
  /// `None` means the OS cache directory chosen by `DictionaryManager`.
  pub cache_dir: Option<PathBuf>,
  /// Whether a missing preset dictionary may be downloaded
  pub allow_download: bool,
}

impl Default for AnnotatorConfig {
  fn default() -> Self {
    Self {
      preset: DictionaryPreset::UnidicCwj,
      dictionary_path: None,
      cache_dir: None,
      allow_download: true,
    }
  }
}

impl AnnotatorConfig {
  /// Returns the preset dictionary type to pass to `DictionaryManager`.
  pub fn dictionary_preset(&self) -> PresetDictionaryKind {
    self.preset.into()
  }

  /// Returns the configured dictionary cache directory.
  pub fn dictionary_cache_dir(&self) -> Option<&Path> {
    self.cache_dir.as_deref()
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
