//! エラー定義

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use vibrato_rkyv::dictionary::PresetDictionaryKind;

/// 設定値（辞書プリセット等）の解釈に関するエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
  /// 辞書プリセット名が不正
  #[error("不明な辞書プリセットです: {0} (有効な値: ipadic, unidic-cwj, unidic-csj)")]
  UnknownPreset(String),
}

/// 辞書関連のエラー
/// Vibrato では ipadic, unidic 等の辞書を使用可能
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum DictionaryError {
  /// キャッシュディレクトリーが見つからない
  #[error("辞書キャッシュディレクトリーが見つかりません")]
  CacheDirNotFound,

  /// キャッシュディレクトリーの作成失敗
  #[error("辞書キャッシュディレクトリーの作成に失敗しました: {0}")]
  CacheDirCreationFailed(Arc<io::Error>),

  /// 指定された辞書が見つからない
  #[error("指定された辞書が見つかりません: {0}")]
  DictionaryNotFound(String),

  /// 辞書パスが不正または辞書種別が不正
  #[error("辞書パスまたは辞書種別が不正です: path={0}, preset_kind={1:?}")]
  InvalidPathOrInvalidPresetKind(PathBuf, Option<PresetDictionaryKind>),

  /// vibrato-rkyv による辞書のロード失敗
  #[error("vibrato-rkyv 辞書ロードエラー: {0}")]
  VibratoLoad(Arc<dyn std::error::Error + Send + Sync + 'static>),

  /// vibrato-rkyv のプリセット辞書のダウンロード失敗
  #[error("vibrato-rkyv プリセット辞書ダウンロード失敗: {0}")]
  PresetDictDownloadFailed(Arc<dyn std::error::Error + Send + Sync + 'static>),
}

/// 統合エラー
/// 本クレートの外部に公開するエラー用 API はこのエラーを返すこと
/// `LemmataResult<T>` = `Result<T, LemmataError>` として使用する
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum LemmataError {
  /// サポートされていない言語
  #[error("サポートされていない言語です: {identifier:?}")]
  UnsupportedLanguage {
    /// 指定された言語識別子（入力そのまま）
    identifier: String,
  },

  /// 辞書関連エラー
  #[error(transparent)]
  Dictionary(#[from] DictionaryError),

  /// 設定エラー
  #[error(transparent)]
  Config(#[from] ConfigError),
}

impl LemmataError {
  /// 言語識別子が認識できなかったことによるエラーかどうか
  #[must_use]
  pub fn is_unsupported_language(&self) -> bool {
    matches!(self, Self::UnsupportedLanguage { .. })
  }
}

/// lemmata クレートの標準 Result 型エイリアス
pub type LemmataResult<T> = Result<T, LemmataError>;
