//! Config loading from environment variables

use std::path::PathBuf;
use std::str::FromStr;

use encoding_rs::Encoding;
use lemmata::{AnnotatorConfig, DictionaryPreset};

use super::constants::{DEFAULT_PRESET_DICT, OUTPUT_FILE_NAME};
use crate::encoding::{InputDecoding, OutputTarget};
use crate::errors::{PipeError, Result};

/// Payload destination setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
  /// Decided by the platform
  Auto,
  /// Always standard output
  Stdout,
  /// Always the output file
  File,
}

impl FromStr for OutputMode {
  type Err = String;

  fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "auto" => Ok(Self::Auto),
      "stdout" => Ok(Self::Stdout),
      "file" => Ok(Self::File),
      _ => Err(format!("Unknown output mode: {}. Valid values: auto, stdout, file", s)),
    }
  }
}

/// Input decoding setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEncodingSetting {
  /// Decided by the platform
  Auto,
  /// Plain UTF-8
  Utf8,
  /// UTF-8 with a fallback to the given legacy encoding
  Legacy(&'static Encoding),
}

impl FromStr for InputEncodingSetting {
  type Err = String;

  fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
    let label = s.trim();
    if label.eq_ignore_ascii_case("auto") {
      return Ok(Self::Auto);
    }

    match Encoding::for_label(label.as_bytes()) {
      Some(encoding) if encoding == encoding_rs::UTF_8 => Ok(Self::Utf8),
      Some(encoding) => Ok(Self::Legacy(encoding)),
      None => Err(format!("Unknown input encoding: {}", s)),
    }
  }
}

/// Process configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// How the annotator is built
  pub annotator: AnnotatorConfig,
  /// Payload destination setting
  pub output: OutputMode,
  /// File used when payloads go to a file
  pub output_path: PathBuf,
  /// Input decoding setting
  pub input_encoding: InputEncodingSetting,
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Builds the configuration from any key/value source
  ///
  /// | Variable                 | Default                               |
  /// |--------------------------|---------------------------------------|
  /// | `LEMMATA_PRESET_DICT`    | `unidic-cwj`                          |
  /// | `LEMMATA_DICT_PATH`      | none                                  |
  /// | `LEMMATA_DICT_CACHE_DIR` | OS cache directory                    |
  /// | `LEMMATA_DICT_DOWNLOAD`  | `true`                                |
  /// | `LEMMATA_OUTPUT`         | `auto`                                |
  /// | `LEMMATA_OUTPUT_PATH`    | `<temp dir>/lemmata-pipe-output.json` |
  /// | `LEMMATA_INPUT_ENCODING` | `auto`                                |
  ///
  /// # Errors
  /// Returns an error if a value cannot be parsed
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let preset_str = lookup("LEMMATA_PRESET_DICT").unwrap_or_else(|| DEFAULT_PRESET_DICT.to_string());
    let preset = DictionaryPreset::from_str(&preset_str).map_err(|e| PipeError::config(e.to_string()))?;

    let allow_download = match lookup("LEMMATA_DICT_DOWNLOAD") {
      Some(value) => parse_flag(&value)
        .ok_or_else(|| PipeError::config(format!("LEMMATA_DICT_DOWNLOAD is not a boolean: {value}")))?,
      None => true,
    };

    let annotator = AnnotatorConfig {
      preset,
      dictionary_path: lookup("LEMMATA_DICT_PATH").filter(|s| !s.is_empty()).map(PathBuf::from),
      cache_dir: lookup("LEMMATA_DICT_CACHE_DIR").filter(|s| !s.is_empty()).map(PathBuf::from),
      allow_download,
    };

    let output = match lookup("LEMMATA_OUTPUT") {
      Some(value) => OutputMode::from_str(&value).map_err(PipeError::config)?,
      None => OutputMode::Auto,
    };

    let output_path = lookup("LEMMATA_OUTPUT_PATH")
      .filter(|s| !s.is_empty())
      .map(PathBuf::from)
      .unwrap_or_else(|| std::env::temp_dir().join(OUTPUT_FILE_NAME));

    let input_encoding = match lookup("LEMMATA_INPUT_ENCODING") {
      Some(value) => InputEncodingSetting::from_str(&value).map_err(PipeError::config)?,
      None => InputEncodingSetting::Auto,
    };

    Ok(Self {
      annotator,
      output,
      output_path,
      input_encoding,
    })
  }

  /// Resolves the payload destination
  pub fn output_target(&self) -> OutputTarget {
    match self.output {
      OutputMode::Auto => OutputTarget::platform_default(self.output_path.clone()),
      OutputMode::Stdout => OutputTarget::Stdout,
      OutputMode::File => OutputTarget::File(self.output_path.clone()),
    }
  }

  /// Resolves the input decoding strategy
  pub fn input_decoding(&self) -> InputDecoding {
    match self.input_encoding {
      InputEncodingSetting::Auto => InputDecoding::platform_default(),
      InputEncodingSetting::Utf8 => InputDecoding::Utf8,
      InputEncodingSetting::Legacy(encoding) => InputDecoding::Legacy(encoding),
    }
  }
}

fn parse_flag(value: &str) -> Option<bool> {
  match value.trim().to_lowercase().as_str() {
    "1" | "true" | "yes" | "on" => Some(true),
    "0" | "false" | "no" | "off" => Some(false),
    _ => None,
  }
}
