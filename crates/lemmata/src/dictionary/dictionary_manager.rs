//! Dictionary Management Module
//!
//! Loads vibrato-rkyv dictionaries for the Japanese annotator.
//! A preset dictionary is fetched into the cache directory on first use (unless downloads are disabled)
//! and read back from the cache afterwards. A local dictionary file can be loaded directly instead.

use crate::config::AnnotatorConfig;
use crate::errors::DictionaryError;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use tracing::{debug, info};
use vibrato_rkyv::Dictionary;
use vibrato_rkyv::dictionary::LoadMode;
use vibrato_rkyv::dictionary::PresetDictionaryKind;

/// Dictionary manager structure for vibrato-rkyv
pub struct DictionaryManager {
  /// Dictionary cache directory
  cache_dir: PathBuf,

  /// Type of preset dictionary `Ipadic`, `UnidicCwj`, `UnidicCsj`, etc.
  /// `None` for local dictionaries
  preset_kind: Option<PresetDictionaryKind>,

  /// Local dictionary file path (`None` for preset dictionaries)
  dictionary_path: Option<PathBuf>,

  /// Whether a preset missing from the cache may be downloaded
  allow_download: bool,

  /// Loaded dictionary or the first load error, initialized once
  dictionary: OnceLock<Result<Arc<Dictionary>, DictionaryError>>,
}

impl DictionaryManager {
  /// Returns the path of the cache directory
  pub fn cache_dir(&self) -> &Path {
    &self.cache_dir
  }

  /// Constructor using a preset dictionary cached under the OS cache directory
  pub fn with_preset(preset_kind: PresetDictionaryKind) -> Result<Self, DictionaryError> {
    Ok(Self::with_preset_in(preset_kind, default_cache_dir()?))
  }

  /// Constructor using a preset dictionary cached under `cache_dir`
  pub fn with_preset_in(preset_kind: PresetDictionaryKind, cache_dir: impl Into<PathBuf>) -> Self {
    Self {
      cache_dir: cache_dir.into(),
      preset_kind: Some(preset_kind),
      dictionary_path: None,
      allow_download: true,
      dictionary: OnceLock::new(),
    }
  }

  /// Constructor using a local dictionary file
  pub fn from_local_path<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
    let path = path.as_ref().to_path_buf();

    if !path.is_file() {
      let s = path.display().to_string();
      return Err(DictionaryError::DictionaryNotFound(s));
    }

    let cache_dir = path.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));

    Ok(Self {
      cache_dir,
      preset_kind: None,
      dictionary_path: Some(path),
      allow_download: false,
      dictionary: OnceLock::new(),
    })
  }

  /// Builds the manager described by an `AnnotatorConfig`.
  ///
  /// A local dictionary path wins over the preset.
  pub fn from_config(config: &AnnotatorConfig) -> Result<Self, DictionaryError> {
    if let Some(path) = &config.dictionary_path {
      return Self::from_local_path(path);
    }

    let manager = match config.dictionary_cache_dir() {
      Some(dir) => Self::with_preset_in(config.dictionary_preset(), dir),
      None => Self::with_preset(config.dictionary_preset())?,
    };

    Ok(manager.with_download(config.allow_download))
  }

  /// Enables or disables downloading of missing preset dictionaries
  #[must_use]
  pub fn with_download(mut self, allow_download: bool) -> Self {
    self.allow_download = allow_download;
    self
  }

  /// Directory holding the preset dictionary (`None` for local dictionaries)
  pub fn preset_dir(&self) -> Option<PathBuf> {
    self.preset_kind.map(|kind| self.cache_dir.join(kind.name()))
  }

  /// Whether the dictionary can be loaded without network access
  pub fn is_available_offline(&self) -> bool {
    match (&self.dictionary_path, self.preset_dir()) {
      (Some(path), _) => path.is_file(),
      (None, Some(dir)) => dir.exists(),
      _ => false,
    }
  }

  /// Load dictionary
  /// - Loads on the first call
  /// - Returns a clone of `Arc<Dictionary>` afterwards
  /// - A first-call error is cached and returned on every later call
  pub fn load(&self) -> Result<Arc<Dictionary>, DictionaryError> {
    self.dictionary.get_or_init(|| self.load_inner().map(Arc::new)).clone()
  }

  fn load_inner(&self) -> Result<Dictionary, DictionaryError> {
    match (&self.dictionary_path, self.preset_kind) {
      (Some(path), _) => Self::load_from_local_path(path),
      (None, Some(preset_kind)) => self.load_from_preset(preset_kind),
      _ => Err(DictionaryError::InvalidPathOrInvalidPresetKind(
        self.cache_dir.clone(),
        self.preset_kind,
      )),
    }
  }

  fn load_from_local_path(path: &Path) -> Result<Dictionary, DictionaryError> {
    info!(path = %path.display(), "Loading local dictionary");
    Dictionary::from_path(path, LoadMode::TrustCache)
      .map_err(|e| DictionaryError::VibratoLoad(Arc::new(e)))
  }

  /// Loads a preset dictionary, downloading it first if needed and allowed
  fn load_from_preset(
    &self,
    preset_kind: PresetDictionaryKind,
  ) -> Result<Dictionary, DictionaryError> {
    let dict_dir = self.cache_dir.join(preset_kind.name());

    if !dict_dir.exists() && !self.allow_download {
      return Err(DictionaryError::DictionaryNotFound(dict_dir.display().to_string()));
    }

    std::fs::create_dir_all(&self.cache_dir)
      .map_err(|e| DictionaryError::CacheDirCreationFailed(Arc::new(e)))?;

    debug!(dict_dir = %dict_dir.display(), cached = dict_dir.exists(), "Loading preset dictionary");

    Dictionary::from_preset_with_download(preset_kind, &dict_dir)
      .map_err(|e| DictionaryError::PresetDictDownloadFailed(Arc::new(e)))
  }
}

/// Returns the default cache directory path according to the OS
///
/// | OS      | Example Path                                  |
/// |---------|-----------------------------------------------|
/// | Linux   | `~/.cache/lemmata/dict`                       |
/// | macOS   | `~/Library/Caches/lemmata/dict`               |
/// | Windows | `C:\Users\{user}\AppData\Local\lemmata\dict`  |
fn default_cache_dir() -> Result<PathBuf, DictionaryError> {
  let base = dirs::cache_dir().ok_or(DictionaryError::CacheDirNotFound)?;

  Ok(base.join("lemmata").join("dict"))
}

/// `vibrato_rkyv::Dictionary` has no `Debug`, so only meta information is shown.
impl fmt::Debug for DictionaryManager {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DictionaryManager")
      .field("cache_dir", &self.cache_dir)
      .field("preset_kind", &self.preset_kind)
      .field("dictionary_path", &self.dictionary_path)
      .field("allow_download", &self.allow_download)
      .field("dictionary_initialized", &self.dictionary.get().is_some())
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::DictionaryPreset;
  use tempfile::TempDir;

  #[test]
  fn preset_dir_is_named_after_the_preset() {
    let temp = TempDir::new().unwrap();
    let manager = DictionaryManager::with_preset_in(PresetDictionaryKind::Ipadic, temp.path());
    assert_eq!(
      manager.preset_dir().unwrap(),
      temp.path().join(PresetDictionaryKind::Ipadic.name())
    );
    assert!(!manager.is_available_offline());
  }

  #[test]
  fn missing_preset_without_download_is_not_found() {
    let temp = TempDir::new().unwrap();
    let manager =
      DictionaryManager::with_preset_in(PresetDictionaryKind::Ipadic, temp.path()).with_download(false);

    // Dictionary has no Debug, so unwrap_err() is not available
    let err = manager.load().err().unwrap();
    assert!(matches!(err, DictionaryError::DictionaryNotFound(_)), "{err:?}");

    // the error is memoized
    assert!(matches!(manager.load().err().unwrap(), DictionaryError::DictionaryNotFound(_)));
  }

  #[test]
  fn from_config_prefers_local_path() {
    let temp = TempDir::new().unwrap();
    let config = AnnotatorConfig {
      preset: DictionaryPreset::Ipadic,
      dictionary_path: Some(temp.path().join("missing.dic")),
      cache_dir: Some(temp.path().to_path_buf()),
      allow_download: true,
    };

    let err = DictionaryManager::from_config(&config).unwrap_err();
    assert!(matches!(err, DictionaryError::DictionaryNotFound(_)));
  }

  #[test]
  fn from_config_uses_cache_dir_and_download_flag() {
    let temp = TempDir::new().unwrap();
    let config = AnnotatorConfig {
      preset: DictionaryPreset::UnidicCsj,
      dictionary_path: None,
      cache_dir: Some(temp.path().to_path_buf()),
      allow_download: false,
    };

    let manager = DictionaryManager::from_config(&config).unwrap();
    assert_eq!(manager.cache_dir(), temp.path());
    assert!(format!("{manager:?}").contains("allow_download: false"));
  }

  #[test]
  fn local_dictionary_file_is_available_offline() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("system.dic");
    std::fs::write(&path, b"not really a dictionary").unwrap();

    let manager = DictionaryManager::from_local_path(&path).unwrap();
    assert!(manager.is_available_offline());
    assert!(manager.preset_dir().is_none());
    assert_eq!(manager.cache_dir(), temp.path());
  }
}
