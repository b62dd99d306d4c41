//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use std::path::PathBuf;

use tempfile::TempDir;

/// テスト用のデータファイルを作成する
///
/// # Arguments
/// * `dir` - 作成先の一時ディレクトリ
/// * `file_name` - ファイル名
/// * `content` - JSON テキスト
///
/// # Returns
/// 作成されたファイルのパス
pub(crate) fn write_data_file(dir: &TempDir, file_name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(file_name);
    std::fs::write(&path, content).unwrap();
    path
}
