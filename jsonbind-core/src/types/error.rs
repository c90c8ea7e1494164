use std::fmt;

/// A type whose shape cannot be described.
///
/// Construction errors are cached like successes, so a broken type fails the
/// same way on every call without being rebuilt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorError {
    /// Short name of the type that failed to build.
    pub type_name: &'static str,

    /// What went wrong.
    pub kind: DescriptorErrorKind,
}

impl DescriptorError {
    /// Creates a new descriptor error.
    pub const fn new(type_name: &'static str, kind: DescriptorErrorKind) -> Self {
        Self { type_name, kind }
    }
}

/// Reasons a descriptor fails to build.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DescriptorErrorKind {
    /// Two struct members map to the same JSON name.
    DuplicateMember(&'static str),

    /// The enum declares no variants.
    EmptyEnum,

    /// Two enum variants share a name.
    DuplicateVariant(&'static str),

    /// Two enum variants share a discriminant.
    DuplicateDiscriminant(i64),

    /// `build_descriptor` returned a descriptor for another type.
    MismatchedType {
        /// Name of the type the descriptor actually describes.
        found: &'static str,
    },
}

impl fmt::Display for DescriptorErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescriptorErrorKind::DuplicateMember(name) => write!(f, "duplicate member `{name}`"),
            DescriptorErrorKind::EmptyEnum => write!(f, "enum has no variants"),
            DescriptorErrorKind::DuplicateVariant(name) => write!(f, "duplicate variant `{name}`"),
            DescriptorErrorKind::DuplicateDiscriminant(value) => {
                write!(f, "duplicate discriminant {value}")
            }
            DescriptorErrorKind::MismatchedType { found } => {
                write!(f, "descriptor describes `{found}` instead")
            }
        }
    }
}

impl fmt::Display for DescriptorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot describe {}: {}", self.type_name, self.kind)
    }
}

impl std::error::Error for DescriptorError {}
