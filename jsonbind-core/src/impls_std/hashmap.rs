use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::BuildHasher;

use crate::{Describe, DescriptorError, Erased, Kind, MapDef, TypeDescriptor, describe};

fn clear<V, S>(map: &mut Erased) -> bool
where
    V: Describe,
    S: BuildHasher + Default + 'static,
{
    map.downcast_mut::<HashMap<String, V, S>>()
        .map(HashMap::clear)
        .is_some()
}

fn insert<V, S>(map: &mut Erased, key: String) -> Option<&mut Erased>
where
    V: Describe,
    S: BuildHasher + Default + 'static,
{
    let map = map.downcast_mut::<HashMap<String, V, S>>()?;
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

impl<V, S> Describe for HashMap<String, V, S>
where
    V: Describe,
    S: BuildHasher + Default + 'static,
{
    fn build_descriptor() -> Result<TypeDescriptor, DescriptorError> {
        Ok(TypeDescriptor::of::<Self>(Kind::Map(MapDef::new(
            describe::<V>,
            clear::<V, S>,
            insert::<V, S>,
        ))))
    }
}
