/// The scalar types the binder knows how to store.
///
/// Each variant corresponds to exactly one Rust type; the binder downcasts the
/// slot to that type before writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ScalarType {
    /// `bool`
    Bool,
    /// `char`
    Char,
    /// `f32`
    F32,
    /// `f64`
    F64,
    /// `u8`
    U8,
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u64`
    U64,
    /// `u128`
    U128,
    /// `usize`
    USize,
    /// `i8`
    I8,
    /// `i16`
    I16,
    /// `i32`
    I32,
    /// `i64`
    I64,
    /// `i128`
    I128,
    /// `isize`
    ISize,
    /// `rust_decimal::Decimal`
    Decimal,
    /// A raw JSON number kept as text (`jsonbind_value::Number`).
    Number,
}

impl ScalarType {
    /// Returns true for the integer types.
    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            ScalarType::U8
                | ScalarType::U16
                | ScalarType::U32
                | ScalarType::U64
                | ScalarType::U128
                | ScalarType::USize
                | ScalarType::I8
                | ScalarType::I16
                | ScalarType::I32
                | ScalarType::I64
                | ScalarType::I128
                | ScalarType::ISize
        )
    }

    /// Returns true for the types bound from JSON numbers.
    pub const fn is_numeric(self) -> bool {
        !matches!(self, ScalarType::Bool | ScalarType::Char)
    }
}
