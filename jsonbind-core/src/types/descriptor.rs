use std::any::{Any, TypeId};
use std::fmt;

use super::{
    ArrayDef, DescriptorError, EnumDef, ListDef, MapDef, OptionDef, PointerDef, ScalarType,
    StructDef,
};

/// A type that can be bound from JSON.
///
/// Implementors return a freshly built [`TypeDescriptor`]; callers should go
/// through [`crate::describe`], which builds each descriptor once and caches it
/// for the lifetime of the process.
///
/// Values are bound in place: the binder default-constructs the target, then
/// fills it through the descriptor's accessors.
///
/// `build_descriptor` must not call [`crate::describe`] for `Self`. Member and
/// element descriptors are referenced lazily through [`DescribeFn`], which is
/// what lets recursive types terminate.
pub trait Describe: Any + Default {
    /// Builds the descriptor for `Self`.
    fn build_descriptor() -> Result<TypeDescriptor, DescriptorError>;
}

/// Lazily resolves the descriptor of a member, element or pointee type.
///
/// This is always `describe::<T>` for some `T`.
pub type DescribeFn = fn() -> Result<&'static TypeDescriptor, DescriptorError>;

/// Immutable metadata describing how to materialize one Rust type.
pub struct TypeDescriptor {
    /// Identity of the described type.
    pub type_id: TypeId,

    /// Short name of the described type, used in error messages (`i16`, `Vec<Person>`).
    pub type_name: &'static str,

    /// What kind of value this is, and how to build it.
    pub kind: Kind,
}

impl TypeDescriptor {
    /// Creates a descriptor for `T`, named after its short type name.
    pub fn of<T: Any>(kind: Kind) -> Self {
        Self::named::<T>(leak_short_type_name::<T>(), kind)
    }

    /// Creates a descriptor for `T` under an explicit name.
    pub fn named<T: Any>(type_name: &'static str, kind: Kind) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name,
            kind,
        }
    }

    /// Returns true if this descriptor describes `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Returns true if a JSON `null` may be bound to this type without error.
    ///
    /// Options become `None`, untyped values become null, and reference-like
    /// targets (strings, collections, structs, fixed arrays) are left untouched.
    /// Boxes are nullable when their pointee is.
    pub fn accepts_null(&self) -> bool {
        match &self.kind {
            Kind::Scalar(_) | Kind::Enum(_) => false,
            Kind::Pointer(ptr) => (ptr.pointee)().is_ok_and(TypeDescriptor::accepts_null),
            _ => true,
        }
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("type_name", &self.type_name)
            .field("kind", &self.kind.name())
            .finish_non_exhaustive()
    }
}

/// The kind of a described type.
pub enum Kind {
    /// Booleans, characters, numbers.
    Scalar(ScalarType),

    /// `String`.
    String,

    /// Fieldless enums, bound by variant name or discriminant.
    Enum(EnumDef),

    /// Fixed-size arrays, `[T; N]`.
    Array(ArrayDef),

    /// Growable sequences, `Vec<T>`, `VecDeque<T>`.
    List(ListDef),

    /// String-keyed maps.
    Map(MapDef),

    /// Structs with named members.
    Struct(StructDef),

    /// `Option<T>`.
    Option(OptionDef),

    /// `Box<T>`.
    Pointer(PointerDef),

    /// The untyped value model, which accepts any JSON value.
    Untyped,
}

impl Kind {
    /// A lowercase name for this kind, for diagnostics.
    pub const fn name(&self) -> &'static str {
        match self {
            Kind::Scalar(_) => "scalar",
            Kind::String => "string",
            Kind::Enum(_) => "enum",
            Kind::Array(_) => "array",
            Kind::List(_) => "list",
            Kind::Map(_) => "map",
            Kind::Struct(_) => "struct",
            Kind::Option(_) => "option",
            Kind::Pointer(_) => "pointer",
            Kind::Untyped => "untyped",
        }
    }
}

/// How JSON object keys are matched against struct member names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MemberMatching {
    /// Keys must equal the member name byte for byte.
    #[default]
    Exact,

    /// Keys are compared ignoring ASCII case; an exact match is preferred.
    AsciiCaseInsensitive,
}

/// Returns `T`'s type name with module paths stripped, leaked to `'static`.
///
/// `alloc::vec::Vec<my_crate::Person>` becomes `Vec<Person>`.
pub fn leak_short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    if !full.contains("::") {
        return full;
    }
    Box::leak(short_type_name(full).into_boxed_str())
}

fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment_start = 0;
    let mut chars = full.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            out.truncate(segment_start);
            continue;
        }
        out.push(c);
        if !(c.is_alphanumeric() || c == '_') {
            segment_start = out.len();
        }
    }
    out
}
