// 命名ポリシー
//
// アプリケーション名と関連パスの単一ソースを提供します。

/// 現行アプリケーション名
pub const APP_NAME: &str = "strata-import";

/// 既定の設定ファイル名
pub const CONFIG_FILE: &str = ".strata-import.yaml";

/// 既定のエンティティスキーマ出力ディレクトリ
pub const OUTPUT_DIR: &str = "schema";

/// エンティティスキーマファイルの拡張子
pub const SCHEMA_FILE_EXTENSION: &str = "yaml";
