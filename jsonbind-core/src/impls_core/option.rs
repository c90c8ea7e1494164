use crate::{Describe, DescriptorError, Erased, Kind, OptionDef, TypeDescriptor, describe};

fn set_none<T: Describe>(option: &mut Erased) -> bool {
    match option.downcast_mut::<Option<T>>() {
        Some(option) => {
            *option = None;
            true
        }
        None => false,
    }
}

fn insert_some<T: Describe>(option: &mut Erased) -> Option<&mut Erased> {
    let inner: &mut Erased = option.downcast_mut::<Option<T>>()?.insert(T::default());
    Some(inner)
}

impl<T: Describe> Describe for Option<T> {
    fn build_descriptor() -> Result<TypeDescriptor, DescriptorError> {
        Ok(TypeDescriptor::of::<Self>(Kind::Option(OptionDef::new(
            describe::<T>,
            set_none::<T>,
            insert_some::<T>,
        ))))
    }
}
