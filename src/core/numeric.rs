// 数値型の幅・精度の解決
//
// 整数・浮動小数点のサブタイプから、具体的なフィールド種別を選択します。

use crate::core::column::{FloatSubtype, IntegerSubtype};
use crate::core::field::FieldKind;

/// 数値型リゾルバー
///
/// - real（4バイト、約6桁）のみ32ビット浮動小数点に、それ以外の浮動小数点・
///   任意精度の数値はすべて64ビット浮動小数点にまとめます。
/// - smallint（2バイト）は16ビット、integer（4バイト）は32ビット、
///   bigint（8バイト）はターゲットのデフォルト幅の整数にします。
///   bigintを64ビット固定の種別にはしません。
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericRangeResolver;

impl NumericRangeResolver {
    /// 新しいNumericRangeResolverを作成
    pub fn new() -> Self {
        Self
    }

    /// 浮動小数点サブタイプを解決
    pub fn resolve_float(&self, subtype: &FloatSubtype) -> FieldKind {
        match subtype {
            FloatSubtype::Single => FieldKind::Float32,
            FloatSubtype::Double | FloatSubtype::Other(_) => FieldKind::Float64,
        }
    }

    /// 整数サブタイプを解決
    ///
    /// 幅が確定しないサブタイプの場合はNoneを返します。
    pub fn resolve_integer(&self, subtype: &IntegerSubtype) -> Option<FieldKind> {
        match subtype {
            IntegerSubtype::Int2 => Some(FieldKind::Int16),
            IntegerSubtype::Int4 => Some(FieldKind::Int32),
            IntegerSubtype::Int8 => Some(FieldKind::Int),
            IntegerSubtype::Other(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_float() {
        let resolver = NumericRangeResolver::new();

        assert_eq!(resolver.resolve_float(&FloatSubtype::Single), FieldKind::Float32);
        assert_eq!(resolver.resolve_float(&FloatSubtype::Double), FieldKind::Float64);
        assert_eq!(
            resolver.resolve_float(&FloatSubtype::Other("float(53)".to_string())),
            FieldKind::Float64
        );
    }

    #[test]
    fn test_resolve_integer_widths() {
        let resolver = NumericRangeResolver::new();

        assert_eq!(
            resolver.resolve_integer(&IntegerSubtype::Int2),
            Some(FieldKind::Int16)
        );
        assert_eq!(
            resolver.resolve_integer(&IntegerSubtype::Int4),
            Some(FieldKind::Int32)
        );
        // bigint はデフォルト幅
        assert_eq!(
            resolver.resolve_integer(&IntegerSubtype::Int8),
            Some(FieldKind::Int)
        );
    }

    #[test]
    fn test_resolve_integer_unknown() {
        let resolver = NumericRangeResolver::new();
        assert_eq!(
            resolver.resolve_integer(&IntegerSubtype::Other("int3".to_string())),
            None
        );
    }
}
