//! dictionary 用のテスト
//! 辞書管理の統合テスト

use lemmata::dictionary::DictionaryManager;
use lemmata::errors::DictionaryError;
use vibrato_rkyv::dictionary::PresetDictionaryKind;

/// DictionaryManager のコンストラクタが正常に動作することを確認する。
#[test]
fn create_dictionary_manager_with_preset() {
  let result = DictionaryManager::with_preset(PresetDictionaryKind::Ipadic);

  // コンストラクタ自体はネットワーク不要なので成功するはず
  assert!(
    result.is_ok(),
    "DictionaryManager の構築に失敗: {:?}",
    result.err()
  );
  assert!(result.unwrap().cache_dir().ends_with("lemmata/dict"));
}

/// 存在しないパスを指定した場合にエラーが返ることを確認する。
#[test]
fn from_local_path_with_nonexistent_file() {
  let result = DictionaryManager::from_local_path("/nonexistent/path/to/system.dic");

  let err = result.unwrap_err();
  assert!(
    matches!(err, DictionaryError::DictionaryNotFound(_)),
    "期待されるエラー型ではありません: {:?}",
    err
  );
}

/// プリセット辞書のダウンロード＆ロード テスト。
///
/// ネットワークアクセスと大容量ファイルの処理が必要なため
/// `#[ignore]` を付けている。
///
/// 実行方法:
/// ```bash
/// cargo test -- --ignored download_and_load_ipadic
/// ```
#[test]
#[ignore = "辞書ダウンロードは時間がかかるため通常テストから除外"]
fn download_and_load_ipadic() {
  let manager = DictionaryManager::with_preset(PresetDictionaryKind::Ipadic)
    .expect("DictionaryManager の構築に失敗");

  // 辞書をロード（初回はダウンロードが発生する）
  let dict = manager.load();
  assert!(dict.is_ok(), "辞書のロードに失敗: {:?}", dict.err());

  // 2回目のロードはキャッシュから取得される
  let dict2 = manager.load();
  assert!(dict2.is_ok(), "2回目のロードに失敗");
  assert!(manager.is_available_offline());
}
