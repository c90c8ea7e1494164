use crate::{DescribeFn, Erased};

/// Sets an option slot to `None`. Returns false if the slot is not the described option.
pub type OptionSetNoneFn = fn(option: &mut Erased) -> bool;

/// Sets an option slot to `Some(default)` and returns the inner value for binding.
pub type OptionInsertSomeFn = fn(option: &mut Erased) -> Option<&mut Erased>;

/// Fields for `Option<T>`
#[derive(Clone, Copy)]
pub struct OptionDef {
    /// descriptor of `T`
    pub inner: DescribeFn,

    /// binds `null`
    pub set_none: OptionSetNoneFn,

    /// binds anything else
    pub insert_some: OptionInsertSomeFn,
}

impl OptionDef {
    /// Construct an `OptionDef` from its inner descriptor and option operations.
    pub const fn new(
        inner: DescribeFn,
        set_none: OptionSetNoneFn,
        insert_some: OptionInsertSomeFn,
    ) -> Self {
        Self {
            inner,
            set_none,
            insert_some,
        }
    }
}
