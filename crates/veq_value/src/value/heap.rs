//! Heap wrapper for enforced Arc usage.
//!
//! `Heap<T>` wraps `Arc<T>` and is the ONLY way to allocate heap values in
//! the value system. The constructor is `pub(super)` (visible only within
//! the value module), so all allocations funnel through `Value`'s factory
//! methods.
//!
//! Beyond shared ownership, `Heap<T>` is where reference identity lives:
//! `ptr_eq` answers "same allocation?" and `addr` exposes the allocation
//! address as a stable integer for the engine's visited registry.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A heap-allocated value wrapper.
///
/// # Thread Safety
/// Uses `Arc` internally for thread-safe reference counting.
///
/// # Zero-Cost Abstraction
/// `#[repr(transparent)]` ensures the same memory layout as `Arc<T>`.
#[repr(transparent)]
pub struct Heap<T: ?Sized>(Arc<T>);

impl<T> Heap<T> {
    /// Create a new heap-allocated value.
    ///
    /// `pub(super)` - external code must use `Value`'s factory methods.
    #[inline]
    pub(super) fn new(value: T) -> Self {
        Heap(Arc::new(value))
    }
}

impl<T: ?Sized> Heap<T> {
    /// Whether two handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// The allocation address, stable for the lifetime of the value.
    ///
    /// Used as the reference-identity key in the engine's visited registry.
    /// The address is only meaningful while at least one handle is alive;
    /// it must never be dereferenced.
    #[inline]
    pub fn addr(&self) -> usize {
        Arc::as_ptr(&self.0).cast::<()>() as usize
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: ?Sized + fmt::Display> fmt::Display for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
