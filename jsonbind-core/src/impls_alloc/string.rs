use crate::{Describe, DescriptorError, Kind, TypeDescriptor};

impl Describe for String {
    fn build_descriptor() -> Result<TypeDescriptor, DescriptorError> {
        Ok(TypeDescriptor::named::<String>("String", Kind::String))
    }
}
