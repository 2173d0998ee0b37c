//! lemmata 言語アノテーションライブラリー
//!
//! テキストを文・単語に分割し、品詞タグと見出し語を付与する。
//! 日本語は vibrato-rkyv による形態素解析、その他の言語は Snowball ステマーを用いる。

/// 設定モジュール - Language, AnnotatorConfig 等の設定構造体を定義
pub mod config;

/// 辞書モジュール - 形態素解析用辞書の管理・ロード機能を提供
pub mod dictionary;

/// エラーモジュール - LemmataError, LemmataResult 等のエラー型を定義
pub mod errors;

/// データモデルモジュール - Document, Sentence, Word のデータ構造を定義
pub mod models;

/// アノテーターモジュール - Annotator トレイトと言語別の実装
pub mod annotator;

/// 再エクスポート
pub use annotator::{Annotator, create};
pub use config::{AnnotatorConfig, DictionaryPreset, Language};
pub use errors::{LemmataError, LemmataResult};
pub use models::{Document, Sentence, Word};
