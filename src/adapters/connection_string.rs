// 接続文字列ビルダー
//
// DatabaseConfig と Dialect から接続文字列を生成する。

use crate::core::config::{DatabaseConfig, Dialect};
use urlencoding::encode;

/// 接続文字列を生成
///
/// ユーザー名とパスワードはパーセントエンコードされます。
pub fn build_connection_string(dialect: Dialect, config: &DatabaseConfig) -> String {
    match dialect {
        Dialect::PostgreSQL => {
            let auth = encode_auth(config.user.as_deref().unwrap_or("postgres"), config);
            format!(
                "postgresql://{}@{}:{}/{}",
                auth,
                config.host,
                config.resolved_port(dialect),
                config.database
            )
        }
        Dialect::MySQL => {
            let auth = encode_auth(config.user.as_deref().unwrap_or("root"), config);
            format!(
                "mysql://{}@{}:{}/{}",
                auth,
                config.host,
                config.resolved_port(dialect),
                config.database
            )
        }
        Dialect::SQLite => format!("sqlite://{}", config.database),
    }
}

/// 認証部分（user[:password]）をエンコード
fn encode_auth(user: &str, config: &DatabaseConfig) -> String {
    let encoded_user = encode(user);
    match config.password.as_deref() {
        Some(password) if !password.is_empty() => {
            format!("{}:{}", encoded_user, encode(password))
        }
        _ => encoded_user.to_string(),
    }
}
