// strata-importライブラリのエントリーポイント
//
// モジュール構造:
// - cli: CLIレイヤー（ユーザー入力の受付とコマンドルーティング）
// - core: コアドメインロジック（型ディスパッチ、数値幅の解決、配列リテラルのコーデック）
// - adapters: データベース接続とスキーマ情報の取得
// - services: 取り込み、エンティティの組み立てと書き出し

pub mod adapters;
pub mod cli;
pub mod core;
pub mod services;
