use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use crate::{
    Describe, DescribeFn, DescriptorError, DescriptorErrorKind, Erased, Kind, MemberMatching,
    TypeDescriptor, describe, leak_short_type_name,
};

/// Borrows one member out of a struct slot.
///
/// Returns `None` if the slot is not the struct this accessor was built for.
pub type FieldAccessor = Box<dyn Fn(&mut Erased) -> Option<&mut Erased> + Send + Sync>;

/// One named member of a struct.
pub struct Field {
    /// JSON member name.
    pub name: &'static str,

    /// Descriptor of the member's type.
    pub descriptor: DescribeFn,

    access: FieldAccessor,
}

impl Field {
    /// Borrows this member out of a struct slot.
    #[inline]
    pub fn get<'a>(&self, owner: &'a mut Erased) -> Option<&'a mut Erased> {
        (self.access)(owner)
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field").field("name", &self.name).finish()
    }
}

/// Members of a struct, indexed by JSON name.
pub struct StructDef {
    fields: Vec<Field>,
    exact: HashMap<&'static str, usize>,
    folded: HashMap<String, usize>,
}

impl StructDef {
    /// Starts describing struct `S`.
    pub fn builder<S: Describe>() -> StructBuilder<S> {
        StructBuilder {
            type_name: leak_short_type_name::<S>(),
            fields: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Members in declaration order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Finds the member a JSON key binds to.
    pub fn field_index(&self, key: &str, matching: MemberMatching) -> Option<usize> {
        if let Some(&index) = self.exact.get(key) {
            return Some(index);
        }
        match matching {
            MemberMatching::Exact => None,
            MemberMatching::AsciiCaseInsensitive => {
                self.folded.get(&key.to_ascii_lowercase()).copied()
            }
        }
    }

    /// Finds the member a JSON key binds to.
    pub fn field(&self, key: &str, matching: MemberMatching) -> Option<&Field> {
        self.field_index(key, matching).map(|index| &self.fields[index])
    }
}

/// Builds the descriptor of a struct, one member at a time.
///
/// ```
/// use jsonbind_core::{Describe, DescriptorError, StructDef, TypeDescriptor};
///
/// #[derive(Default)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl Describe for Point {
///     fn build_descriptor() -> Result<TypeDescriptor, DescriptorError> {
///         StructDef::builder::<Point>()
///             .field("x", |p: &mut Point| &mut p.x)
///             .field("y", |p: &mut Point| &mut p.y)
///             .build()
///     }
/// }
/// ```
pub struct StructBuilder<S> {
    type_name: &'static str,
    fields: Vec<Field>,
    _marker: PhantomData<fn(&mut S)>,
}

impl<S: Describe> StructBuilder<S> {
    /// Overrides the name used in error messages.
    pub fn name(mut self, type_name: &'static str) -> Self {
        self.type_name = type_name;
        self
    }

    /// Adds a member bound from the JSON key `name`.
    pub fn field<F: Describe>(mut self, name: &'static str, project: fn(&mut S) -> &mut F) -> Self {
        let access = accessor(move |owner| {
            let owner = owner.downcast_mut::<S>()?;
            let member: &mut Erased = project(owner);
            Some(member)
        });
        self.fields.push(Field {
            name,
            descriptor: describe::<F>,
            access: Box::new(access),
        });
        self
    }

    /// Validates member names and produces the descriptor.
    pub fn build(self) -> Result<TypeDescriptor, DescriptorError> {
        let mut exact = HashMap::with_capacity(self.fields.len());
        let mut folded = HashMap::with_capacity(self.fields.len());
        for (index, field) in self.fields.iter().enumerate() {
            if exact.insert(field.name, index).is_some() {
                return Err(DescriptorError::new(
                    self.type_name,
                    DescriptorErrorKind::DuplicateMember(field.name),
                ));
            }
            folded
                .entry(field.name.to_ascii_lowercase())
                .or_insert(index);
        }
        Ok(TypeDescriptor::named::<S>(
            self.type_name,
            Kind::Struct(StructDef {
                fields: self.fields,
                exact,
                folded,
            }),
        ))
    }
}

// Pins the closure signature so its output borrows from its input.
fn accessor<A>(access: A) -> A
where
    A: Fn(&mut Erased) -> Option<&mut Erased> + Send + Sync + 'static,
{
    access
}
