// Services Layer
// 設定の読み書き、スキーマの取り込み、エンティティの組み立てと書き出しを行うサービス層

pub mod config_loader;
pub mod config_serializer;
pub mod entity_assembler;
pub mod entity_writer;
pub mod schema_importer;
pub mod table_filter;
