use crate::{ArrayDef, Describe, DescriptorError, Erased, Kind, TypeDescriptor, describe};

fn get<T: Describe, const N: usize>(array: &mut Erased, index: usize) -> Option<&mut Erased> {
    let item: &mut Erased = array.downcast_mut::<[T; N]>()?.get_mut(index)?;
    Some(item)
}

impl<T: Describe, const N: usize> Describe for [T; N]
where
    [T; N]: Default,
{
    fn build_descriptor() -> Result<TypeDescriptor, DescriptorError> {
        Ok(TypeDescriptor::of::<Self>(Kind::Array(ArrayDef::new(
            describe::<T>,
            N,
            get::<T, N>,
        ))))
    }
}
