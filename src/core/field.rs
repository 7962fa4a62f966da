// フィールド記述子
//
// 方言に依存しないフィールド定義と、方言ごとのスキーマ型オーバーライドを表現します。
// オーバーライドは型階層ではなく、記述子に付随する単純なマップとして保持します。

use crate::core::column::ColumnAttributes;
use crate::core::config::Dialect;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// 方言ごとのスキーマ型オーバーライド（方言 -> ネイティブ型文字列）
pub type SchemaTypes = BTreeMap<Dialect, String>;

/// 値コーデック
///
/// ネイティブ表現を持たないフィールド値の変換方式を表します。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueCodec {
    /// `{a,b,c}` 形式の文字列配列（`core::array_codec`）
    StringArray,
}

/// フィールドの種別
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    Bytes,
    Bool,
    Float32,
    Float64,
    Int16,
    Int32,
    /// ターゲットのデフォルト幅の符号付き整数
    Int,
    Enum {
        values: Vec<String>,
    },
    Json,
    String,
    Time,
    Uuid,
    Uint,
    Other {
        codec: ValueCodec,
    },
}

impl FieldKind {
    /// 整数種別のビット幅（デフォルト幅の場合はNone）
    pub fn integer_bits(&self) -> Option<u32> {
        match self {
            FieldKind::Int16 => Some(16),
            FieldKind::Int32 => Some(32),
            _ => None,
        }
    }
}

/// スキーマ生成用のプレースホルダー値
///
/// 型情報を伝えるためだけの値で、行データとしては使用しません。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder {
    /// 空のJSONドキュメント
    EmptyJson,
    /// 生成済みのUUID
    Uuid(Uuid),
}

/// フィールド記述子
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// フィールド名
    pub name: String,

    /// フィールド種別
    pub kind: FieldKind,

    /// 方言ごとのスキーマ型オーバーライド
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub schema_type: SchemaTypes,

    /// プレースホルダー値（生成ファイルには出力しない）
    #[serde(skip)]
    pub placeholder: Option<Placeholder>,

    /// 省略可能フラグ
    #[serde(default)]
    pub optional: bool,

    /// NULL許可フラグ
    #[serde(default)]
    pub nillable: bool,

    /// デフォルト値
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    /// コメント
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl FieldDescriptor {
    /// 新しいフィールド記述子を作成
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            schema_type: SchemaTypes::new(),
            placeholder: None,
            optional: false,
            nillable: false,
            default: None,
            comment: None,
        }
    }

    /// スキーマ型オーバーライドを設定
    pub fn with_schema_types(mut self, schema_type: SchemaTypes) -> Self {
        self.schema_type = schema_type;
        self
    }

    /// プレースホルダー値を設定
    pub fn with_placeholder(mut self, placeholder: Placeholder) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// 指定方言のスキーマ型オーバーライドを取得
    pub fn schema_type_for(&self, dialect: Dialect) -> Option<&str> {
        self.schema_type.get(&dialect).map(String::as_str)
    }

    /// カラム属性を適用
    pub fn apply_attributes(&mut self, attributes: &ColumnAttributes) {
        self.optional = attributes.nullable;
        self.nillable = attributes.nullable;
        self.default = attributes.default.clone();
        self.comment = attributes.comment.clone();
    }
}
