//! Scalar type implementations: bool, char, integers, floats

use crate::{Describe, DescriptorError, Kind, ScalarType, TypeDescriptor};

macro_rules! impl_describe_for_scalar {
    ($($type:ty => $scalar:ident),* $(,)?) => {
        $(
            impl Describe for $type {
                fn build_descriptor() -> Result<TypeDescriptor, DescriptorError> {
                    Ok(TypeDescriptor::named::<$type>(
                        stringify!($type),
                        Kind::Scalar(ScalarType::$scalar),
                    ))
                }
            }
        )*
    };
}

impl_describe_for_scalar! {
    bool => Bool,
    char => Char,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => USize,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => ISize,
    f32 => F32,
    f64 => F64,
}
