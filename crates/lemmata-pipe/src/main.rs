//! lemmata-pipe エントリーポイント

use std::io;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lemmata_pipe::config::{Config, DEFAULT_LOG_FILTER, LOG_ENV_VAR};
use lemmata_pipe::errors::{PipeError, Result};
use lemmata_pipe::protocol::bootstrap;
use lemmata_pipe::{RequestReader, Session};

fn main() -> ExitCode {
  // ロギングの初期化（標準出力はプロトコル専用のため標準エラーへ）
  let filter =
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
  tracing_subscriber::registry()
    .with(filter)
    .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
    .init();

  match run() {
    Ok(served) => {
      tracing::info!(served, "セッションを終了しました");
      ExitCode::SUCCESS
    }
    Err(PipeError::StreamClosed) => ExitCode::SUCCESS,
    Err(e) => {
      tracing::error!(code = e.code(), error = %e, "致命的なエラーで終了します");
      ExitCode::from(e.exit_code())
    }
  }
}

fn run() -> Result<u64> {
  // 設定の読み込み
  let config = Config::from_env()?;
  tracing::debug!(?config, "設定を読み込みました");

  // 言語識別子の読み込みとアノテーターの構築
  let mut reader = RequestReader::new(io::stdin().lock(), config.input_decoding());
  let annotator = bootstrap(&mut reader, &config.annotator)?;

  // 出力先はセッション中ずっと開いたまま
  let payload = config.output_target().open_output_sink()?;
  if let Some(path) = payload.path() {
    tracing::info!(path = %path.display(), "応答をファイルに書き出します");
  }

  Session::new(reader, annotator, payload, io::stdout()).run()
}
