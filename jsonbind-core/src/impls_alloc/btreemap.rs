use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::{Describe, DescriptorError, Erased, Kind, MapDef, TypeDescriptor, describe};

fn clear<V: Describe>(map: &mut Erased) -> bool {
    map.downcast_mut::<BTreeMap<String, V>>()
        .map(BTreeMap::clear)
        .is_some()
}

fn insert<V: Describe>(map: &mut Erased, key: String) -> Option<&mut Erased> {
    let map = map.downcast_mut::<BTreeMap<String, V>>()?;
    let value: &mut Erased = match map.entry(key) {
        Entry::Occupied(entry) => {
            let value = entry.into_mut();
            *value = V::default();
            value
        }
        Entry::Vacant(entry) => entry.insert(V::default()),
    };
    Some(value)
}

impl<V: Describe> Describe for BTreeMap<String, V> {
    fn build_descriptor() -> Result<TypeDescriptor, DescriptorError> {
        Ok(TypeDescriptor::of::<Self>(Kind::Map(MapDef::new(
            describe::<V>,
            clear::<V>,
            insert::<V>,
        ))))
    }
}
