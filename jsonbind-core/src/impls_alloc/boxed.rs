use crate::{Describe, DescriptorError, Erased, Kind, PointerDef, TypeDescriptor, describe};

fn get<T: Describe>(pointer: &mut Erased) -> Option<&mut Erased> {
    let pointee: &mut Erased = &mut **pointer.downcast_mut::<Box<T>>()?;
    Some(pointee)
}

impl<T: Describe> Describe for Box<T> {
    fn build_descriptor() -> Result<TypeDescriptor, DescriptorError> {
        Ok(TypeDescriptor::of::<Self>(Kind::Pointer(PointerDef::new(
            describe::<T>,
            get::<T>,
        ))))
    }
}
