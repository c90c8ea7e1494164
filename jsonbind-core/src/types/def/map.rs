use crate::{DescribeFn, Erased};

/// Empties a map slot. Returns false if the slot is not the described map.
pub type MapClearFn = fn(map: &mut Erased) -> bool;

/// Stores a default value under `key` and returns it for binding.
///
/// An existing entry keeps its position but its value is reset, so the last
/// occurrence of a duplicate key wins.
pub type MapInsertFn = fn(map: &mut Erased, key: String) -> Option<&mut Erased>;

/// Fields for maps keyed by `String`
#[derive(Clone, Copy)]
pub struct MapDef {
    /// descriptor of the values in the map
    pub value: DescribeFn,

    /// empties the map before binding a JSON object into it
    pub clear: MapClearFn,

    /// inserts or resets one entry
    pub insert: MapInsertFn,
}

impl MapDef {
    /// Construct a `MapDef` from its value descriptor and map operations.
    pub const fn new(value: DescribeFn, clear: MapClearFn, insert: MapInsertFn) -> Self {
        Self {
            value,
            clear,
            insert,
        }
    }
}
