/// エラー型のテスト
///
/// カスタムエラー型が正しく動作し、適切なエラーメッセージを生成することを確認します。

#[cfg(test)]
mod error_tests {
    use std::path::PathBuf;
    use strata_import::core::error::{DatabaseError, ImportError, MappingError};

    /// MappingError::UnsupportedColumnType test
    #[test]
    fn test_unsupported_column_type() {
        let error = MappingError::UnsupportedColumnType {
            column: "location".to_string(),
            raw_type: "point".to_string(),
        };

        let error_str = error.to_string();
        assert!(error_str.contains("location"));
        assert!(error_str.contains("point"));
        assert!(error.is_unsupported_column_type());
        assert!(!error.is_malformed_array_literal());
        assert_eq!(error.column(), Some("location"));
    }

    /// MappingError::UnsupportedArrayElementType test
    #[test]
    fn test_unsupported_array_element_type() {
        let error = MappingError::UnsupportedArrayElementType {
            column: "scores".to_string(),
            element_type: "integer".to_string(),
        };

        assert!(error.to_string().contains("scores"));
        assert!(error.to_string().contains("integer"));
        assert!(error.is_unsupported_array_element_type());
        assert_eq!(error.column(), Some("scores"));
    }

    /// DatabaseError test
    #[test]
    fn test_database_errors() {
        let error = DatabaseError::Connection {
            message: "Failed to create connection pool".to_string(),
            cause: "connection refused".to_string(),
        };
        assert!(error.is_connection());
        assert!(error.to_string().contains("connection refused"));

        let error = DatabaseError::Query {
            message: "relation does not exist".to_string(),
            sql: Some("SELECT 1".to_string()),
        };
        assert!(error.is_query());
        assert!(!error.is_connection());
    }

    /// ImportError test
    #[test]
    fn test_import_errors() {
        let error = ImportError::UnmappedColumns {
            table: "places".to_string(),
            errors: vec![
                MappingError::UnsupportedColumnType {
                    column: "location".to_string(),
                    raw_type: "point".to_string(),
                },
                MappingError::UnsupportedColumnType {
                    column: "area".to_string(),
                    raw_type: "polygon".to_string(),
                },
            ],
        };
        let error_str = error.to_string();
        assert!(error.is_unmapped_columns());
        assert!(error_str.contains("places"));
        assert!(error_str.contains("2 unmapped column(s)"));
        assert!(error_str.contains("area"));

        let error = ImportError::OutputExists {
            path: PathBuf::from("schema/users.yaml"),
        };
        assert!(error.is_output_exists());
        assert!(error.to_string().contains("--force"));

        let error = ImportError::InvalidTableName {
            table: "../users".to_string(),
        };
        assert!(error.is_invalid_table_name());
        assert!(!error.is_output_exists());
        assert!(error.to_string().contains("'../users'"));
    }

    /// anyhowとの統合
    #[test]
    fn test_anyhow_integration() {
        let error: anyhow::Error = MappingError::MalformedArrayLiteral {
            raw: "oops".to_string(),
        }
        .into();

        let mapping_error = error.downcast_ref::<MappingError>().unwrap();
        assert!(mapping_error.is_malformed_array_literal());
    }
}
