// 自動増分カラムの解決

use crate::core::column::SerialSubtype;
use crate::core::config::Dialect;
use crate::core::field::{FieldDescriptor, FieldKind, SchemaTypes};

/// 自動増分フィールドリゾルバー
///
/// 幅に関係なく符号なし整数にマッピングし、元の方言にのみネイティブの
/// 自動増分型をオーバーライドとして付与します。他の方言は符号なし整数に
/// フォールバックします。
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialFieldResolver;

impl SerialFieldResolver {
    /// 新しいSerialFieldResolverを作成
    pub fn new() -> Self {
        Self
    }

    /// 自動増分カラムをフィールド記述子に変換
    pub fn resolve(
        &self,
        name: &str,
        _subtype: SerialSubtype,
        native_type: &str,
        source: Dialect,
    ) -> FieldDescriptor {
        let mut schema_type = SchemaTypes::new();
        schema_type.insert(source, native_type.to_string());

        FieldDescriptor::new(name, FieldKind::Uint).with_schema_types(schema_type)
    }
}
