// Adapters
// データベースへの接続とスキーマ情報の取得を抽象化

pub mod connection_string;
pub mod database;
pub mod database_introspector;
pub mod type_mapping;
