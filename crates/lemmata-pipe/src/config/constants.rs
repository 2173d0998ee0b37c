//! 設定の定数定義

/// ハンドシェイクおよび応答完了を示すセンチネル行
pub const DONE_SIGNAL: &str = "done";

/// デフォルトの辞書プリセット名（日本語用）
///
/// 現代日本語書き言葉コーパスに基づく UniDic (CWJ) を使用。
pub const DEFAULT_PRESET_DICT: &str = "unidic-cwj";

/// ファイル出力時のファイル名
///
/// 一時ディレクトリー直下に置かれる固定パス。親プロセスはこの場所を前提とする。
pub const OUTPUT_FILE_NAME: &str = "lemmata-pipe-output.json";

/// デフォルトのログフィルター
///
/// 標準出力はプロトコル専用のため、ログは標準エラーにのみ出力する。
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// ログフィルターを指定する環境変数
pub const LOG_ENV_VAR: &str = "LEMMATA_LOG";
