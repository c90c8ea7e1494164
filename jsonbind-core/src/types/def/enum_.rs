use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::marker::PhantomData;

use crate::{
    Describe, DescriptorError, DescriptorErrorKind, Erased, Kind, TypeDescriptor,
    leak_short_type_name,
};

/// Overwrites an enum slot with the variant at the given index.
pub type VariantAssignFn = Box<dyn Fn(&mut Erased, usize) -> bool + Send + Sync>;

/// One variant of a fieldless enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variant {
    /// JSON name of the variant.
    pub name: &'static str,

    /// Numeric value the variant is bound from.
    pub discriminant: i64,
}

/// Variants of a fieldless enum, indexed by name and by discriminant.
pub struct EnumDef {
    variants: Vec<Variant>,
    by_name: HashMap<&'static str, usize>,
    by_discriminant: HashMap<i64, usize>,
    assign: VariantAssignFn,
}

impl EnumDef {
    /// Starts describing enum `E`.
    pub fn builder<E: Describe + Clone + Send + Sync>() -> EnumBuilder<E> {
        EnumBuilder {
            type_name: leak_short_type_name::<E>(),
            variants: Vec::new(),
            values: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Variants in declaration order.
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    /// Index of the variant named `name`. Names are matched exactly.
    pub fn variant_by_name(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Index of the variant with the given discriminant.
    pub fn variant_by_discriminant(&self, discriminant: i64) -> Option<usize> {
        self.by_discriminant.get(&discriminant).copied()
    }

    /// Writes the variant at `index` into `slot`.
    ///
    /// Returns false if `slot` is not the described enum or `index` is out of range.
    pub fn assign(&self, slot: &mut Erased, index: usize) -> bool {
        (self.assign)(slot, index)
    }
}

impl fmt::Debug for EnumDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumDef")
            .field("variants", &self.variants)
            .finish_non_exhaustive()
    }
}

/// Builds the descriptor of a fieldless enum.
pub struct EnumBuilder<E> {
    type_name: &'static str,
    variants: Vec<Variant>,
    values: Vec<E>,
    _marker: PhantomData<fn() -> E>,
}

impl<E: Describe + Clone + Send + Sync> EnumBuilder<E> {
    /// Overrides the name used in error messages.
    pub fn name(mut self, type_name: &'static str) -> Self {
        self.type_name = type_name;
        self
    }

    /// Adds a variant, bound from the string `name` or the number `discriminant`.
    pub fn variant(mut self, name: &'static str, value: E, discriminant: i64) -> Self {
        self.variants.push(Variant { name, discriminant });
        self.values.push(value);
        self
    }

    /// Validates the variant tables and produces the descriptor.
    pub fn build(self) -> Result<TypeDescriptor, DescriptorError> {
        let fail = |kind| Err(DescriptorError::new(self.type_name, kind));
        if self.variants.is_empty() {
            return fail(DescriptorErrorKind::EmptyEnum);
        }

        let mut by_name = HashMap::with_capacity(self.variants.len());
        let mut by_discriminant = HashMap::with_capacity(self.variants.len());
        for (index, variant) in self.variants.iter().enumerate() {
            if by_name.insert(variant.name, index).is_some() {
                return fail(DescriptorErrorKind::DuplicateVariant(variant.name));
            }
            match by_discriminant.entry(variant.discriminant) {
                Entry::Occupied(_) => {
                    return fail(DescriptorErrorKind::DuplicateDiscriminant(
                        variant.discriminant,
                    ));
                }
                Entry::Vacant(entry) => {
                    entry.insert(index);
                }
            }
        }

        let values = self.values;
        let assign: VariantAssignFn = Box::new(move |slot: &mut Erased, index: usize| {
            match (slot.downcast_mut::<E>(), values.get(index)) {
                (Some(slot), Some(value)) => {
                    *slot = value.clone();
                    true
                }
                _ => false,
            }
        });

        Ok(TypeDescriptor::named::<E>(
            self.type_name,
            Kind::Enum(EnumDef {
                variants: self.variants,
                by_name,
                by_discriminant,
                assign,
            }),
        ))
    }
}
