//! Allocator seam of the container.
//!
//! All memory of a container goes through [`RawAlloc`]. Failures are
//! reported as `None` and never abort the process, so the container can
//! turn them into recoverable errors.
use std::alloc::{self as sys, Layout};
use std::ptr::NonNull;

/// Minimal allocator interface required by the container.
///
/// # Safety
///
/// Implementors must return blocks that fit the requested layout,
/// and zero-filled in case of `alloc_zeroed`. On `realloc` failure
/// the original block must stay valid and untouched.
pub unsafe trait RawAlloc {
    /// Allocate a zero-filled block. Layout size is never zero.
    fn alloc_zeroed(&self, layout: Layout) -> Option<NonNull<u8>>;

    /// Resize a block, preserving its leading bytes.
    ///
    /// # Safety
    ///
    /// `ptr` must be allocated by this allocator with `old`, and
    /// `new_size` must form a valid layout with `old.align()`.
    unsafe fn realloc(&self, ptr: NonNull<u8>, old: Layout, new_size: usize)
        -> Option<NonNull<u8>>;

    /// Release a block.
    ///
    /// # Safety
    ///
    /// `ptr` must be allocated by this allocator with `layout`,
    /// and must not be used afterwards.
    unsafe fn dealloc(&self, ptr: NonNull<u8>, layout: Layout);
}

/// Allocator backed by the global allocator of the process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Global;

unsafe impl RawAlloc for Global {
    #[inline]
    fn alloc_zeroed(&self, layout: Layout) -> Option<NonNull<u8>> {
        debug_assert!(layout.size() > 0);
        // # SAFETY
        //
        // Layout size is non-zero as required by global allocator.
        NonNull::new(unsafe { sys::alloc_zeroed(layout) })
    }

    #[inline]
    unsafe fn realloc(
        &self,
        ptr: NonNull<u8>,
        old: Layout,
        new_size: usize,
    ) -> Option<NonNull<u8>> {
        NonNull::new(sys::realloc(ptr.as_ptr(), old, new_size))
    }

    #[inline]
    unsafe fn dealloc(&self, ptr: NonNull<u8>, layout: Layout) {
        sys::dealloc(ptr.as_ptr(), layout)
    }
}

unsafe impl<A: RawAlloc + ?Sized> RawAlloc for &A {
    #[inline]
    fn alloc_zeroed(&self, layout: Layout) -> Option<NonNull<u8>> {
        (**self).alloc_zeroed(layout)
    }

    #[inline]
    unsafe fn realloc(
        &self,
        ptr: NonNull<u8>,
        old: Layout,
        new_size: usize,
    ) -> Option<NonNull<u8>> {
        (**self).realloc(ptr, old, new_size)
    }

    #[inline]
    unsafe fn dealloc(&self, ptr: NonNull<u8>, layout: Layout) {
        (**self).dealloc(ptr, layout)
    }
}

/// Aligned pointer for storage without any allocated byte.
#[inline]
pub(crate) fn dangling(align: usize) -> NonNull<u8> {
    debug_assert!(align.is_power_of_two());
    // # SAFETY
    //
    // Alignment is always positive, so the pointer is never null.
    unsafe { NonNull::new_unchecked(align as *mut u8) }
}
