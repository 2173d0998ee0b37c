//! プロトコル層のエラー定義

use std::io;

use lemmata::LemmataError;
use thiserror::Error;

/// エラーの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipeErrorKind {
  /// 入力ストリームの終端（正常終了）
  StreamClosed,
  /// アノテーターの構築失敗
  Bootstrap,
  /// 入出力エラー
  Io,
  /// 設定エラー
  Config,
}

impl PipeErrorKind {
  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::StreamClosed => "stream_closed",
      Self::Bootstrap => "bootstrap_failed",
      Self::Io => "io_error",
      Self::Config => "config_error",
    }
  }

  /// プロセスの終了ステータスを取得
  ///
  /// - 0: 入力が閉じられた（正常終了）
  /// - 1: 言語識別子に対応するアノテーターを構築できない
  /// - 2: その他の致命的エラー（セッション途中の入出力エラーを含む）
  #[must_use]
  pub fn exit_code(&self) -> u8 {
    match self {
      Self::StreamClosed => 0,
      Self::Bootstrap => 1,
      Self::Io | Self::Config => 2,
    }
  }
}

/// lemmata-pipe のエラー
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PipeError {
  /// 入力ストリームが閉じられた
  #[error("入力ストリームが閉じられました")]
  StreamClosed,

  /// アノテーターを構築できない（未対応の言語、辞書ロード失敗）
  #[error("アノテーターを構築できません: {0}")]
  Bootstrap(#[from] LemmataError),

  /// 入出力エラー
  #[error("入出力エラー: {0}")]
  Io(#[from] io::Error),

  /// 設定エラー
  #[error("設定エラー: {0}")]
  Config(String),
}

impl PipeError {
  /// エラーの種類を取得
  #[must_use]
  pub fn kind(&self) -> PipeErrorKind {
    match self {
      Self::StreamClosed => PipeErrorKind::StreamClosed,
      Self::Bootstrap(_) => PipeErrorKind::Bootstrap,
      Self::Io(_) => PipeErrorKind::Io,
      Self::Config(_) => PipeErrorKind::Config,
    }
  }

  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// プロセスの終了ステータスを取得
  #[must_use]
  pub fn exit_code(&self) -> u8 {
    self.kind().exit_code()
  }

  /// 設定エラーを作成
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

/// Result 型エイリアス
pub type Result<T> = std::result::Result<T, PipeError>;
