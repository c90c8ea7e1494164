use rust_decimal::Decimal;

use crate::{Describe, DescriptorError, Kind, ScalarType, TypeDescriptor};

impl Describe for Decimal {
    fn build_descriptor() -> Result<TypeDescriptor, DescriptorError> {
        Ok(TypeDescriptor::named::<Decimal>(
            "Decimal",
            Kind::Scalar(ScalarType::Decimal),
        ))
    }
}
