mod array;
pub use array::*;

mod enum_;
pub use enum_::*;

mod list;
pub use list::*;

mod map;
pub use map::*;

mod option;
pub use option::*;

mod pointer;
pub use pointer::*;

mod struct_;
pub use struct_::*;
