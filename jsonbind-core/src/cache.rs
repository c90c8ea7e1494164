//! Process-wide cache of type descriptors.
//!
//! Descriptors are keyed by `TypeId`. Each type gets a leaked `OnceLock` cell
//! the first time it is looked up; the descriptor is built inside that cell,
//! so concurrent first lookups of one type build it exactly once, while
//! lookups of other types proceed in parallel. Built descriptors (and
//! construction errors) are leaked and never change afterwards.
//!
//! The map itself sits behind a `parking_lot::RwLock`: lookups of known types
//! only take the read lock, and the write lock is held just long enough to
//! insert an empty cell.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::RwLock;

use crate::{Describe, DescriptorError, DescriptorErrorKind, TypeDescriptor, leak_short_type_name};

type Published = Result<&'static TypeDescriptor, DescriptorError>;

/// Per-type cell, filled by the first lookup.
type Cell = OnceLock<Published>;

static CACHE: OnceLock<RwLock<HashMap<TypeId, &'static Cell>>> = OnceLock::new();

/// Number of descriptors successfully built and published.
static BUILT: AtomicUsize = AtomicUsize::new(0);

fn cache() -> &'static RwLock<HashMap<TypeId, &'static Cell>> {
    CACHE.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Returns the descriptor of `T`, building and publishing it on first use.
///
/// Every call for the same `T` returns the same `&'static` reference, or the
/// same error if `T`'s shape cannot be described.
pub fn describe<T: Describe>() -> Result<&'static TypeDescriptor, DescriptorError> {
    cell_for(TypeId::of::<T>()).get_or_init(build::<T>).clone()
}

fn cell_for(key: TypeId) -> &'static Cell {
    // Fast path: check read lock first
    {
        let cache = cache().read();
        if let Some(&cell) = cache.get(&key) {
            return cell;
        }
    }

    // Slow path: another thread may have inserted the cell in the meantime
    let mut cache = cache().write();
    *cache
        .entry(key)
        .or_insert_with(|| &*Box::leak(Box::new(OnceLock::new())))
}

fn build<T: Describe>() -> Published {
    let descriptor = match T::build_descriptor() {
        Ok(descriptor) => descriptor,
        Err(err) => {
            debug!(type_name = err.type_name, error = %err, "failed to describe type");
            return Err(err);
        }
    };

    if !descriptor.is::<T>() {
        let err = DescriptorError::new(
            leak_short_type_name::<T>(),
            DescriptorErrorKind::MismatchedType {
                found: descriptor.type_name,
            },
        );
        debug!(type_name = err.type_name, error = %err, "failed to describe type");
        return Err(err);
    }

    let descriptor: &'static TypeDescriptor = Box::leak(Box::new(descriptor));
    BUILT.fetch_add(1, Ordering::Relaxed);
    debug!(
        type_name = descriptor.type_name,
        kind = descriptor.kind.name(),
        "published type descriptor"
    );
    Ok(descriptor)
}

/// A snapshot of the cache's counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Descriptors built and published so far.
    pub built: usize,

    /// Types looked up so far, including ones that failed to build.
    pub entries: usize,
}

/// Returns the cache's counters.
pub fn stats() -> CacheStats {
    CacheStats {
        built: BUILT.load(Ordering::Relaxed),
        entries: cache().read().len(),
    }
}
