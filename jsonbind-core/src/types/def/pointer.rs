use crate::{DescribeFn, Erased};

/// Borrows the pointee of a pointer slot.
pub type PointerGetFn = fn(pointer: &mut Erased) -> Option<&mut Erased>;

/// Fields for owning pointers (`Box<T>`)
#[derive(Clone, Copy)]
pub struct PointerDef {
    /// descriptor of the pointee
    pub pointee: DescribeFn,

    /// pointee access
    pub get: PointerGetFn,
}

impl PointerDef {
    /// Construct a `PointerDef` from its pointee descriptor and accessor.
    pub const fn new(pointee: DescribeFn, get: PointerGetFn) -> Self {
        Self { pointee, get }
    }
}
