mod descriptor;
pub use descriptor::*;

mod scalar;
pub use scalar::*;

mod error;
pub use error::*;

mod def;
pub use def::*;
