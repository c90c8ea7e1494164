use crate::{DescribeFn, Erased};

/// Empties a list slot. Returns false if the slot is not the described list.
pub type ListClearFn = fn(list: &mut Erased) -> bool;

/// Appends a default element to a list slot and returns it for binding.
///
/// Returns `None` if the slot is not the described list.
pub type ListPushFn = fn(list: &mut Erased) -> Option<&mut Erased>;

/// Fields for growable sequences (`Vec<T>`, `VecDeque<T>`)
#[derive(Clone, Copy)]
pub struct ListDef {
    /// descriptor of the items in the list
    pub element: DescribeFn,

    /// empties the list before binding a JSON array into it
    pub clear: ListClearFn,

    /// appends one default item
    pub push: ListPushFn,
}

impl ListDef {
    /// Construct a `ListDef` from its element descriptor and list operations.
    pub const fn new(element: DescribeFn, clear: ListClearFn, push: ListPushFn) -> Self {
        Self {
            element,
            clear,
            push,
        }
    }
}
