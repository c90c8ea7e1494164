use std::hash::BuildHasher;

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::{Describe, DescriptorError, Erased, Kind, MapDef, TypeDescriptor, describe};

fn clear<V, S>(map: &mut Erased) -> bool
where
    V: Describe,
    S: BuildHasher + Default + 'static,
{
    map.downcast_mut::<IndexMap<String, V, S>>()
        .map(IndexMap::clear)
        .is_some()
}

// Duplicate keys keep their first position.
fn insert<V, S>(map: &mut Erased, key: String) -> Option<&mut Erased>
where
    V: Describe,
    S: BuildHasher + Default + 'static,
{
    let map = map.downcast_mut::<IndexMap<String, V, S>>()?;
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

impl<V, S> Describe for IndexMap<String, V, S>
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

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use crate::{Kind, describe};

    #[test]
    fn duplicate_keys_keep_their_position() {
        let Kind::Map(def) = &describe::<IndexMap<String, i32>>().unwrap().kind else {
            panic!("expected a map");
        };
        let mut value = IndexMap::new();
        for (key, n) in [("a", 1), ("b", 2), ("a", 3)] {
            *(def.insert)(&mut value, key.to_owned())
                .and_then(|entry| entry.downcast_mut::<i32>())
                .unwrap() = n;
        }
        assert_eq!(value.into_iter().collect::<Vec<_>>(), [
            ("a".to_owned(), 3),
            ("b".to_owned(), 2)
        ]);
    }
}
