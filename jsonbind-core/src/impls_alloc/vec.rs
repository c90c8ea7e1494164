use std::collections::VecDeque;

use crate::{Describe, DescriptorError, Erased, Kind, ListDef, TypeDescriptor, describe};

fn vec_clear<T: Describe>(list: &mut Erased) -> bool {
    list.downcast_mut::<Vec<T>>().map(Vec::clear).is_some()
}

fn vec_push<T: Describe>(list: &mut Erased) -> Option<&mut Erased> {
    let list = list.downcast_mut::<Vec<T>>()?;
    list.push(T::default());
    let item: &mut Erased = list.last_mut()?;
    Some(item)
}

impl<T: Describe> Describe for Vec<T> {
    fn build_descriptor() -> Result<TypeDescriptor, DescriptorError> {
        Ok(TypeDescriptor::of::<Self>(Kind::List(ListDef::new(
            describe::<T>,
            vec_clear::<T>,
            vec_push::<T>,
        ))))
    }
}

fn deque_clear<T: Describe>(list: &mut Erased) -> bool {
    list.downcast_mut::<VecDeque<T>>()
        .map(VecDeque::clear)
        .is_some()
}

fn deque_push<T: Describe>(list: &mut Erased) -> Option<&mut Erased> {
    let list = list.downcast_mut::<VecDeque<T>>()?;
    list.push_back(T::default());
    let item: &mut Erased = list.back_mut()?;
    Some(item)
}

impl<T: Describe> Describe for VecDeque<T> {
    fn build_descriptor() -> Result<TypeDescriptor, DescriptorError> {
        Ok(TypeDescriptor::of::<Self>(Kind::List(ListDef::new(
            describe::<T>,
            deque_clear::<T>,
            deque_push::<T>,
        ))))
    }
}
