/// Implements [`Describe`](crate::Describe) for a struct with named fields.
///
/// Each listed field is bound from the JSON member of the same name, or from
/// the name given after `as`. Fields that are not listed keep their default
/// value. The struct must implement `Default` and every listed field's type
/// must implement `Describe`.
///
/// ```
/// use jsonbind_core::describe_struct;
///
/// #[derive(Default)]
/// struct Son {
///     age: u32,
///     name: String,
/// }
///
/// describe_struct!(Son { age, name as "Name" });
/// ```
#[macro_export]
macro_rules! describe_struct {
    (@name $field:ident $rename:literal) => {
        $rename
    };
    (@name $field:ident) => {
        ::core::stringify!($field)
    };
    ($ty:ident { $($field:ident $(as $rename:literal)?),* $(,)? }) => {
        impl $crate::Describe for $ty {
            fn build_descriptor(
            ) -> ::core::result::Result<$crate::TypeDescriptor, $crate::DescriptorError> {
                $crate::StructDef::builder::<$ty>()
                    $(
                        .field(
                            $crate::describe_struct!(@name $field $($rename)?),
                            |value: &mut $ty| &mut value.$field,
                        )
                    )*
                    .build()
            }
        }
    };
}

/// Implements [`Describe`](crate::Describe) for a fieldless enum.
///
/// Variants are bound from their name, or from their discriminant when the
/// JSON value is a number. The enum must implement `Clone` and `Default`.
///
/// ```
/// use jsonbind_core::describe_enum;
///
/// #[derive(Clone, Copy, Default)]
/// enum Status {
///     #[default]
///     Single,
///     Married,
///     Divorced = 5,
/// }
///
/// describe_enum!(Status { Single, Married, Divorced });
/// ```
#[macro_export]
macro_rules! describe_enum {
    ($ty:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::Describe for $ty {
            fn build_descriptor(
            ) -> ::core::result::Result<$crate::TypeDescriptor, $crate::DescriptorError> {
                $crate::EnumDef::builder::<$ty>()
                    $(
                        .variant(
                            ::core::stringify!($variant),
                            $ty::$variant,
                            $ty::$variant as i64,
                        )
                    )+
                    .build()
            }
        }
    };
}
