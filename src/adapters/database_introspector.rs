// データベースイントロスペクター
//
// データベースからテーブルとカラムの情報を取得するための抽象化レイヤー。
// 各方言固有のINFORMATION_SCHEMA/PRAGMAクエリを実装します。

use crate::core::config::Dialect;
use crate::core::error::DatabaseError;
use anyhow::Result;
use async_trait::async_trait;
use sqlx::any::AnyRow;
use sqlx::{AnyPool, Row};
use std::collections::HashMap;

/// 生のカラム情報（DB固有フォーマット）
///
/// データベースから取得したカラム情報を保持する構造体。
/// TypeMappingService で ColumnDescriptor に変換されます。
#[derive(Debug, Clone, Default)]
pub struct RawColumnInfo {
    /// カラム名
    pub name: String,
    /// データ型（DB固有の型文字列）
    pub data_type: String,
    /// 完全な型定義（MySQLの `enum('a','b')`、`int unsigned` 等）
    pub column_type: Option<String>,
    /// ユーザー定義型名（PostgreSQLのENUM、配列要素型等）
    pub udt_name: Option<String>,
    /// NULL許可フラグ
    pub is_nullable: bool,
    /// デフォルト値
    pub default_value: Option<String>,
    /// 追加情報（MySQLの `auto_increment` 等）
    pub extra: Option<String>,
    /// カラムコメント
    pub comment: Option<String>,
}

/// 生のENUM情報（PostgreSQL専用）
#[derive(Debug, Clone)]
pub struct RawEnumInfo {
    /// ENUM型名
    pub name: String,
    /// ENUM値のリスト（順序付き）
    pub values: Vec<String>,
}

/// データベーススキーマ取得インターフェース
///
/// 各データベース方言固有のイントロスペクション処理を抽象化します。
#[async_trait]
pub trait DatabaseIntrospector: Send + Sync {
    /// テーブル名一覧を取得（名前順）
    async fn get_table_names(&self) -> Result<Vec<String>>;

    /// カラム情報を取得（定義順）
    async fn get_columns(&self, table_name: &str) -> Result<Vec<RawColumnInfo>>;

    /// ENUM定義を取得（PostgreSQL専用、他方言では空を返す）
    async fn get_enums(&self) -> Result<Vec<RawEnumInfo>>;
}

/// PostgreSQL用イントロスペクター
pub struct PostgresIntrospector {
    pool: AnyPool,
}

/// MySQL用イントロスペクター
pub struct MySqlIntrospector {
    pool: AnyPool,
}

/// SQLite用イントロスペクター
pub struct SqliteIntrospector {
    pool: AnyPool,
}

/// 方言に応じたイントロスペクターを作成
pub fn create_introspector(dialect: Dialect, pool: AnyPool) -> Box<dyn DatabaseIntrospector> {
    match dialect {
        Dialect::PostgreSQL => Box::new(PostgresIntrospector { pool }),
        Dialect::MySQL => Box::new(MySqlIntrospector { pool }),
        Dialect::SQLite => Box::new(SqliteIntrospector { pool }),
    }
}

/// クエリを実行し、失敗時はSQLを含むエラーに変換
async fn fetch_all(
    pool: &AnyPool,
    sql: &str,
    table_name: Option<&str>,
) -> Result<Vec<AnyRow>, DatabaseError> {
    let query = sqlx::query(sql);
    let query = match table_name {
        Some(name) => query.bind(name.to_string()),
        None => query,
    };

    query
        .fetch_all(pool)
        .await
        .map_err(|e| DatabaseError::Query {
            message: e.to_string(),
            sql: Some(sql.to_string()),
        })
}

/// 空文字列をNoneとして扱う
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

// =============================================================================
// PostgreSQL イントロスペクター実装
// =============================================================================

#[async_trait]
impl DatabaseIntrospector for PostgresIntrospector {
    async fn get_table_names(&self) -> Result<Vec<String>> {
        let sql = r#"
            SELECT table_name::text
            FROM information_schema.tables
            WHERE table_schema = 'public' AND table_type = 'BASE TABLE'
            ORDER BY table_name
        "#;

        let rows = fetch_all(&self.pool, sql, None).await?;
        Ok(rows.iter().map(|row| row.get::<String, _>(0)).collect())
    }

    async fn get_columns(&self, table_name: &str) -> Result<Vec<RawColumnInfo>> {
        let sql = r#"
            SELECT
                c.column_name::text,
                c.data_type::text,
                c.udt_name::text,
                c.is_nullable::text,
                c.column_default::text,
                pgd.description::text
            FROM information_schema.columns c
            LEFT JOIN pg_catalog.pg_statio_all_tables st
                ON st.schemaname = c.table_schema AND st.relname = c.table_name
            LEFT JOIN pg_catalog.pg_description pgd
                ON pgd.objoid = st.relid AND pgd.objsubid = c.ordinal_position
            WHERE c.table_name = $1 AND c.table_schema = 'public'
            ORDER BY c.ordinal_position
        "#;

        let rows = fetch_all(&self.pool, sql, Some(table_name)).await?;

        let columns = rows
            .iter()
            .map(|row| RawColumnInfo {
                name: row.get(0),
                data_type: row.get(1),
                column_type: None,
                udt_name: row.get(2),
                is_nullable: row.get::<String, _>(3) == "YES",
                default_value: row.get(4),
                extra: None,
                comment: non_empty(row.get(5)),
            })
            .collect();

        Ok(columns)
    }

    async fn get_enums(&self) -> Result<Vec<RawEnumInfo>> {
        let sql = r#"
            SELECT t.typname::text, e.enumlabel::text
            FROM pg_type t
            JOIN pg_enum e ON t.oid = e.enumtypid
            JOIN pg_namespace n ON n.oid = t.typnamespace
            WHERE n.nspname = 'public'
            ORDER BY t.typname, e.enumsortorder
        "#;

        let rows = fetch_all(&self.pool, sql, None).await?;

        // ENUM名ごとにグループ化（行は名前・定義順に並んでいる）
        let mut enums: Vec<RawEnumInfo> = Vec::new();
        for row in rows {
            let name: String = row.get(0);
            let value: String = row.get(1);

            match enums.last_mut() {
                Some(current) if current.name == name => current.values.push(value),
                _ => enums.push(RawEnumInfo {
                    name,
                    values: vec![value],
                }),
            }
        }

        Ok(enums)
    }
}

// =============================================================================
// MySQL イントロスペクター実装
// =============================================================================

#[async_trait]
impl DatabaseIntrospector for MySqlIntrospector {
    async fn get_table_names(&self) -> Result<Vec<String>> {
        let sql = r#"
            SELECT CAST(table_name AS CHAR)
            FROM information_schema.tables
            WHERE table_schema = DATABASE() AND table_type = 'BASE TABLE'
            ORDER BY table_name
        "#;

        let rows = fetch_all(&self.pool, sql, None).await?;
        Ok(rows.iter().map(|row| row.get::<String, _>(0)).collect())
    }

    async fn get_columns(&self, table_name: &str) -> Result<Vec<RawColumnInfo>> {
        let sql = r#"
            SELECT
                CAST(column_name AS CHAR),
                CAST(data_type AS CHAR),
                CAST(column_type AS CHAR),
                CAST(is_nullable AS CHAR),
                CAST(column_default AS CHAR),
                CAST(extra AS CHAR),
                CAST(column_comment AS CHAR)
            FROM information_schema.columns
            WHERE table_name = ? AND table_schema = DATABASE()
            ORDER BY ordinal_position
        "#;

        let rows = fetch_all(&self.pool, sql, Some(table_name)).await?;

        let columns = rows
            .iter()
            .map(|row| RawColumnInfo {
                name: row.get(0),
                data_type: row.get(1),
                column_type: row.get(2),
                udt_name: None,
                is_nullable: row.get::<String, _>(3) == "YES",
                default_value: row.get(4),
                extra: non_empty(row.get(5)),
                comment: non_empty(row.get(6)),
            })
            .collect();

        Ok(columns)
    }

    async fn get_enums(&self) -> Result<Vec<RawEnumInfo>> {
        // MySQLではENUMはカラム定義に埋め込まれるため、
        // 独立したENUM定義は取得できない
        Ok(Vec::new())
    }
}

// =============================================================================
// SQLite イントロスペクター実装
// =============================================================================

#[async_trait]
impl DatabaseIntrospector for SqliteIntrospector {
    async fn get_table_names(&self) -> Result<Vec<String>> {
        let sql = r#"
            SELECT name
            FROM sqlite_master
            WHERE type = 'table'
                AND name NOT LIKE 'sqlite_%'
            ORDER BY name
        "#;

        let rows = fetch_all(&self.pool, sql, None).await?;
        Ok(rows.iter().map(|row| row.get::<String, _>(0)).collect())
    }

    async fn get_columns(&self, table_name: &str) -> Result<Vec<RawColumnInfo>> {
        // PRAGMA関数形式ならテーブル名をバインドできる
        let sql = r#"
            SELECT name, type, "notnull", dflt_value
            FROM pragma_table_info(?)
            ORDER BY cid
        "#;

        let rows = fetch_all(&self.pool, sql, Some(table_name)).await?;

        let columns = rows
            .iter()
            .map(|row| {
                let not_null: i64 = row.get(2);
                RawColumnInfo {
                    name: row.get(0),
                    data_type: row.get(1),
                    is_nullable: not_null == 0,
                    default_value: row.get(3),
                    ..Default::default()
                }
            })
            .collect();

        Ok(columns)
    }

    async fn get_enums(&self) -> Result<Vec<RawEnumInfo>> {
        // SQLiteはENUM型をサポートしていない
        Ok(Vec::new())
    }
}

/// ENUM定義を名前で引けるマップに変換
pub fn enum_map(enums: Vec<RawEnumInfo>) -> HashMap<String, Vec<String>> {
    enums.into_iter().map(|e| (e.name, e.values)).collect()
}
