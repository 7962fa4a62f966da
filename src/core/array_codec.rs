// 配列リテラルコーデック
//
// `{a,b,c}` 形式の配列リテラルと文字列のシーケンスを相互変換します。
//
// 区切り文字（`,` `{` `}`）のエスケープは行いません。要素にこれらの文字が
// 含まれる場合、デコード結果では区切り位置と区別できません。
// また `{}` は空のシーケンスとしてデコードするため、`[""]` は `{}` に
// エンコードされ、デコードすると空のシーケンスに戻ります。

use crate::core::error::MappingError;
use std::fmt;
use std::str::FromStr;

/// 配列リテラルの開始文字
const OPEN: char = '{';
/// 配列リテラルの終了文字
const CLOSE: char = '}';
/// 要素の区切り文字
const SEPARATOR: &str = ",";

/// 文字列配列
///
/// 配列カラムの値を1つの不透明なデータベース値として運ぶための型です。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringArray(pub Vec<String>);

impl StringArray {
    /// 要素を取り出す
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }

    /// データベースから読み出した値をデコード
    ///
    /// NULL（`None`）は空の配列として扱います。
    pub fn scan(value: Option<&[u8]>) -> Result<Self, MappingError> {
        match value {
            None => Ok(Self::default()),
            Some(bytes) => {
                let raw = std::str::from_utf8(bytes).map_err(|_| {
                    MappingError::MalformedArrayLiteral {
                        raw: String::from_utf8_lossy(bytes).into_owned(),
                    }
                })?;
                raw.parse()
            }
        }
    }
}

impl From<Vec<String>> for StringArray {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

impl FromStr for StringArray {
    type Err = MappingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        decode(raw).map(Self)
    }
}

impl fmt::Display for StringArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(&self.0))
    }
}

/// 配列リテラルをデコード
///
/// 空文字列は空のシーケンスになります。それ以外は `{` で始まり `}` で
/// 終わる必要があり、内側を `,` で分割します（順序・重複は保持）。
pub fn decode(raw: &str) -> Result<Vec<String>, MappingError> {
    if raw.is_empty() {
        return Ok(Vec::new());
    }

    let inner = raw
        .strip_prefix(OPEN)
        .and_then(|rest| rest.strip_suffix(CLOSE))
        .ok_or_else(|| MappingError::MalformedArrayLiteral {
            raw: raw.to_string(),
        })?;

    if inner.is_empty() {
        return Ok(Vec::new());
    }

    Ok(inner.split(SEPARATOR).map(str::to_string).collect())
}

/// 配列リテラルにエンコード
pub fn encode<S: AsRef<str>>(values: &[S]) -> String {
    let joined = values
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    format!("{}{}{}", OPEN, joined, CLOSE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_decode_empty_input() {
        assert_eq!(decode("").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_decode_empty_literal() {
        assert_eq!(decode("{}").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_decode_preserves_order_and_duplicates() {
        assert_eq!(decode("{b,a,b}").unwrap(), strings(&["b", "a", "b"]));
    }

    #[test]
    fn test_decode_keeps_empty_elements() {
        assert_eq!(decode("{a,,b}").unwrap(), strings(&["a", "", "b"]));
    }

    #[test]
    fn test_decode_without_braces() {
        let err = decode("oops").unwrap_err();
        assert_eq!(
            err,
            MappingError::MalformedArrayLiteral {
                raw: "oops".to_string()
            }
        );
    }

    #[test]
    fn test_decode_requires_both_braces() {
        assert!(decode("{a,b").is_err());
        assert!(decode("a,b}").is_err());
        assert!(decode("{").is_err());
        assert!(decode("}").is_err());
    }

    #[test]
    fn test_encode() {
        assert_eq!(encode(&["x", "y", "z"]), "{x,y,z}");
        assert_eq!(encode::<&str>(&[]), "{}");
    }

    #[test]
    fn test_round_trip() {
        let values = strings(&["x", "y", "z"]);
        assert_eq!(decode(&encode(&values)).unwrap(), values);
    }

    #[test]
    fn test_embedded_separator_is_not_escaped() {
        // 区切り文字を含む要素は分割される
        let encoded = encode(&["a,b"]);
        assert_eq!(encoded, "{a,b}");
        assert_eq!(decode(&encoded).unwrap(), strings(&["a", "b"]));
    }

    #[test]
    fn test_scan_null_and_bytes() {
        assert_eq!(StringArray::scan(None).unwrap(), StringArray::default());
        assert_eq!(
            StringArray::scan(Some(&b"{red,green}"[..])).unwrap(),
            StringArray(strings(&["red", "green"]))
        );
        assert!(StringArray::scan(Some(&[0xff, 0xfe][..]))
            .unwrap_err()
            .is_malformed_array_literal());
    }

    #[test]
    fn test_from_str_and_display() {
        let array: StringArray = "{one,two}".parse().unwrap();
        assert_eq!(array.to_string(), "{one,two}");
        assert_eq!(array.into_inner(), strings(&["one", "two"]));
    }
}
