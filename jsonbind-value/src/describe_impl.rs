use jsonbind_core::{Describe, DescriptorError, Kind, ScalarType, TypeDescriptor};

use crate::{Number, Value};

impl Describe for Value {
    fn build_descriptor() -> Result<TypeDescriptor, DescriptorError> {
        Ok(TypeDescriptor::named::<Value>("Value", Kind::Untyped))
    }
}

impl Describe for Number {
    fn build_descriptor() -> Result<TypeDescriptor, DescriptorError> {
        Ok(TypeDescriptor::named::<Number>(
            "Number",
            Kind::Scalar(ScalarType::Number),
        ))
    }
}
