use crate::{DescribeFn, Erased};

/// Returns the element at `index` of an array slot.
///
/// Returns `None` if the slot is not the described array or the index is out of bounds.
pub type ArrayGetFn = fn(array: &mut Erased, index: usize) -> Option<&mut Erased>;

/// Fields for fixed-size arrays (`[T; N]`)
#[derive(Clone, Copy)]
pub struct ArrayDef {
    /// descriptor of the items in the array
    pub element: DescribeFn,

    /// number of items, `N`
    pub len: usize,

    /// element access
    pub get: ArrayGetFn,
}

impl ArrayDef {
    /// Construct an `ArrayDef` from its element descriptor, length and accessor.
    pub const fn new(element: DescribeFn, len: usize, get: ArrayGetFn) -> Self {
        Self { element, len, get }
    }
}
