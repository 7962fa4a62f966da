// カラム記述子
//
// イントロスペクションで得られたカラム情報を、方言固有の型記述子として表現します。
// 型記述子はサポート対象の型のみを列挙し、それ以外は Unsupported として元のラベルを保持します。

use serde::{Deserialize, Serialize};

/// 浮動小数点型のサブタイプ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FloatSubtype {
    /// 単精度（4バイト、約6桁）
    Single,
    /// 倍精度（8バイト、約15桁）
    Double,
    /// その他の精度指定
    Other(String),
}

impl FloatSubtype {
    /// 型ラベル
    pub fn label(&self) -> &str {
        match self {
            FloatSubtype::Single => "real",
            FloatSubtype::Double => "double precision",
            FloatSubtype::Other(label) => label,
        }
    }
}

/// 整数型のサブタイプ（バイト幅）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntegerSubtype {
    /// 2バイト
    Int2,
    /// 4バイト
    Int4,
    /// 8バイト
    Int8,
    /// 幅が確定しない整数型
    Other(String),
}

impl IntegerSubtype {
    /// 型ラベル
    pub fn label(&self) -> &str {
        match self {
            IntegerSubtype::Int2 => "smallint",
            IntegerSubtype::Int4 => "integer",
            IntegerSubtype::Int8 => "bigint",
            IntegerSubtype::Other(label) => label,
        }
    }
}

/// 自動増分整数型のサブタイプ（バイト幅）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SerialSubtype {
    /// 2バイト（smallserial）
    Small,
    /// 4バイト（serial）
    Regular,
    /// 8バイト（bigserial）
    Big,
}

/// 生の型記述子
///
/// 方言固有の型をタグ付き共用体で表現します。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawType {
    Binary,
    Bool,
    Decimal,
    Enum {
        /// ENUM値（定義順）
        values: Vec<String>,
    },
    Float(FloatSubtype),
    Integer(IntegerSubtype),
    Json,
    String,
    Time,
    Serial {
        subtype: SerialSubtype,
        /// 方言ネイティブの型名（例: "serial"）
        native_type: String,
    },
    Uuid,
    Array {
        element: Box<RawType>,
        /// 方言ネイティブの配列型名（例: "text[]"）
        native_type: String,
    },
    /// マッピングできない型（元のラベルを保持）
    Unsupported(String),
}

impl RawType {
    /// 型の種別名
    ///
    /// エラーメッセージで型を識別するために使用します。
    pub fn kind_name(&self) -> &str {
        match self {
            RawType::Binary => "binary",
            RawType::Bool => "bool",
            RawType::Decimal => "decimal",
            RawType::Enum { .. } => "enum",
            RawType::Float(_) => "float",
            RawType::Integer(_) => "integer",
            RawType::Json => "json",
            RawType::String => "string",
            RawType::Time => "time",
            RawType::Serial { .. } => "serial",
            RawType::Uuid => "uuid",
            RawType::Array { .. } => "array",
            RawType::Unsupported(label) => label,
        }
    }

    /// 配列要素として文字列型を作成
    pub fn string_array(native_type: impl Into<String>) -> Self {
        RawType::Array {
            element: Box::new(RawType::String),
            native_type: native_type.into(),
        }
    }
}

/// カラム属性
///
/// 型マッピングには関与せず、フィールド記述子へそのまま引き継がれます。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnAttributes {
    /// NULL許可フラグ
    pub nullable: bool,
    /// デフォルト値
    pub default: Option<String>,
    /// コメント
    pub comment: Option<String>,
}

/// カラム記述子
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// カラム名
    pub name: String,
    /// 生の型記述子
    pub raw_type: RawType,
    /// パススルー属性
    pub attributes: ColumnAttributes,
}

impl ColumnDescriptor {
    /// 新しいカラム記述子を作成（NOT NULL、デフォルト値なし）
    pub fn new(name: impl Into<String>, raw_type: RawType) -> Self {
        Self {
            name: name.into(),
            raw_type,
            attributes: ColumnAttributes::default(),
        }
    }

    /// NULL許可を設定
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.attributes.nullable = nullable;
        self
    }

    /// デフォルト値を設定
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.attributes.default = Some(default.into());
        self
    }

    /// コメントを設定
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.attributes.comment = Some(comment.into());
        self
    }
}
