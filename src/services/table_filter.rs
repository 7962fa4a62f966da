// テーブル選択
//
// 取り込み対象のテーブルを、設定ファイルとCLI引数の包含・除外リストから決定します。

use crate::core::config::Config;
use std::collections::HashSet;
use tracing::warn;

/// テーブル選択条件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSelection {
    /// 取り込むテーブル（空の場合は全テーブル）
    pub include: Vec<String>,
    /// 除外するテーブル
    pub exclude: Vec<String>,
}

/// テーブル選択の結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedTables {
    /// 対象テーブル（イントロスペクション順）
    pub tables: Vec<String>,
    /// 包含リストにあるが存在しないテーブル
    pub missing: Vec<String>,
}

impl TableSelection {
    /// 設定とCLI引数から選択条件を作成
    ///
    /// CLI引数のリストが空でない場合は、設定ファイルのリストを置き換えます。
    pub fn from_config(config: &Config, tables: &[String], exclude_tables: &[String]) -> Self {
        let pick = |cli: &[String], configured: &[String]| {
            if cli.is_empty() {
                configured.to_vec()
            } else {
                cli.to_vec()
            }
        };

        Self {
            include: pick(tables, &config.tables),
            exclude: pick(exclude_tables, &config.exclude_tables),
        }
    }

    /// 対象テーブルを選択
    pub fn select(&self, all_tables: &[String]) -> SelectedTables {
        let include: HashSet<&str> = self.include.iter().map(String::as_str).collect();
        let exclude: HashSet<&str> = self.exclude.iter().map(String::as_str).collect();

        let tables = all_tables
            .iter()
            .filter(|t| include.is_empty() || include.contains(t.as_str()))
            .filter(|t| !exclude.contains(t.as_str()))
            .cloned()
            .collect();

        let existing: HashSet<&str> = all_tables.iter().map(String::as_str).collect();
        let missing: Vec<String> = self
            .include
            .iter()
            .filter(|t| !existing.contains(t.as_str()))
            .cloned()
            .collect();

        for table in &missing {
            warn!(table = %table, "Requested table does not exist in the database");
        }

        SelectedTables { tables, missing }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn config(tables: &[&str], exclude: &[&str]) -> Config {
        let mut config = crate::services::config_serializer::ConfigSerializer::default_config(
            crate::core::config::Dialect::SQLite,
        );
        config.tables = names(tables);
        config.exclude_tables = names(exclude);
        config
    }

    #[test]
    fn test_select_all_by_default() {
        let selection = TableSelection::default();
        let selected = selection.select(&names(&["posts", "users"]));

        assert_eq!(selected.tables, names(&["posts", "users"]));
        assert!(selected.missing.is_empty());
    }

    #[test]
    fn test_include_keeps_introspection_order() {
        let selection = TableSelection {
            include: names(&["users", "comments"]),
            exclude: Vec::new(),
        };
        let selected = selection.select(&names(&["comments", "posts", "users"]));

        assert_eq!(selected.tables, names(&["comments", "users"]));
    }

    #[test]
    fn test_exclude_applies_after_include() {
        let selection = TableSelection {
            include: names(&["users", "posts"]),
            exclude: names(&["posts"]),
        };
        let selected = selection.select(&names(&["posts", "users"]));

        assert_eq!(selected.tables, names(&["users"]));
    }

    #[test]
    fn test_missing_include_is_reported() {
        let selection = TableSelection {
            include: names(&["users", "ghosts"]),
            exclude: Vec::new(),
        };
        let selected = selection.select(&names(&["users"]));

        assert_eq!(selected.tables, names(&["users"]));
        assert_eq!(selected.missing, names(&["ghosts"]));
    }

    #[test]
    fn test_cli_lists_replace_config_lists() {
        let config = config(&["users"], &["schema_migrations"]);

        let selection = TableSelection::from_config(&config, &names(&["posts"]), &[]);
        assert_eq!(selection.include, names(&["posts"]));
        assert_eq!(selection.exclude, names(&["schema_migrations"]));

        let selection = TableSelection::from_config(&config, &[], &[]);
        assert_eq!(selection.include, names(&["users"]));
    }
}
