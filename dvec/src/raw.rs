//! Untyped engine of the container.
//!
//! [`RawVec`] owns one contiguous block treated as an array of opaque,
//! fixed-size slots. Elements are moved in and out by byte copies and
//! compared only through caller-supplied comparators. This is the only
//! place that touches the backing memory directly.
use crate::alloc::{dangling, Global, RawAlloc};
use crate::error::{Error, Result};
use crate::layout::{grown_capacity, storage_layout, ElemLayout};
use crate::sort::sort_strided;
use std::alloc::Layout;
use std::cmp::Ordering;
use std::fmt;
use std::ptr::NonNull;

/// Growable array of fixed-stride byte slots.
///
/// Slots `[0, len)` are live, slot `i` starts at byte offset `i * stride`.
/// Storage is exactly `capacity * stride` bytes and is owned exclusively
/// by this value. It is released when the value is dropped or torn down.
#[repr(C)]
pub struct RawVec<A: RawAlloc = Global> {
    cap: usize,
    len: usize,
    elem: ElemLayout,
    ptr: NonNull<u8>,
    alloc: A,
}

// # SAFETY
//
// RawVec exclusively owns its storage and contains plain bytes.
unsafe impl<A: RawAlloc + Send> Send for RawVec<A> {}
unsafe impl<A: RawAlloc + Sync> Sync for RawVec<A> {}

impl RawVec {
    /// Create a container of opaque elements of `stride` bytes,
    /// with storage for `cap` elements.
    #[inline]
    pub fn new(stride: usize, cap: usize) -> Result<Self> {
        Self::new_in(stride, cap, Global)
    }

    /// Create a container for elements of given layout.
    #[inline]
    pub fn with_layout(elem: ElemLayout, cap: usize) -> Result<Self> {
        Self::with_layout_in(elem, cap, Global)
    }
}

impl<A: RawAlloc> RawVec<A> {
    #[inline]
    pub fn new_in(stride: usize, cap: usize, alloc: A) -> Result<Self> {
        Self::with_layout_in(ElemLayout::bytes(stride)?, cap, alloc)
    }

    /// Create a container for elements of given layout with given
    /// allocator. Zero capacity allocates nothing.
    pub fn with_layout_in(elem: ElemLayout, cap: usize, alloc: A) -> Result<Self> {
        let layout = storage_layout(elem, cap).map_err(|e| {
            log::warn!("reject capacity {} of stride {}: {}", cap, elem.size(), e);
            e
        })?;
        let ptr = if layout.size() == 0 {
            dangling(layout.align())
        } else {
            match alloc.alloc_zeroed(layout) {
                Some(ptr) => ptr,
                None => {
                    log::warn!("failed to allocate {} bytes", layout.size());
                    return Err(Error::AllocationFailure);
                }
            }
        };
        Ok(RawVec {
            cap,
            len: 0,
            elem,
            ptr,
            alloc,
        })
    }

    /// Returns number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns number of allocated element slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns byte size of one element.
    #[inline]
    pub fn stride(&self) -> usize {
        self.elem.size()
    }

    /// Returns alignment of one element.
    #[inline]
    pub fn align(&self) -> usize {
        self.elem.align()
    }

    #[inline]
    pub fn elem_layout(&self) -> ElemLayout {
        self.elem
    }

    #[inline]
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Append one element at the end.
    ///
    /// `elem` must be exactly `stride` bytes. When no free slot is left,
    /// capacity is doubled first. If growth fails, the container is left
    /// exactly as before the call.
    pub fn push(&mut self, elem: &[u8]) -> Result<()> {
        let stride = self.stride();
        if elem.len() != stride {
            return Err(Error::InvalidArgument);
        }
        if self.len == self.cap {
            self.grow()?;
        }
        let start = self.len * stride;
        self.storage_mut()[start..start + stride].copy_from_slice(elem);
        self.len += 1;
        Ok(())
    }

    /// Returns bytes of element at given index, or `None` if
    /// index is out of bound.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<&[u8]> {
        if idx >= self.len {
            return None;
        }
        let stride = self.stride();
        Some(&self.storage()[idx * stride..(idx + 1) * stride])
    }

    /// Returns mutable bytes of element at given index, or `None`
    /// if index is out of bound.
    #[inline]
    pub fn get_mut(&mut self, idx: usize) -> Option<&mut [u8]> {
        if idx >= self.len {
            return None;
        }
        let stride = self.stride();
        Some(&mut self.storage_mut()[idx * stride..(idx + 1) * stride])
    }

    /// Sort all live elements in place with a three-way comparator.
    /// The sort is not stable.
    #[inline]
    pub fn sort_by<F>(&mut self, cmp: F)
    where
        F: FnMut(&[u8], &[u8]) -> Ordering,
    {
        let stride = self.stride();
        let n_bytes = self.len * stride;
        sort_strided(&mut self.storage_mut()[..n_bytes], stride, cmp)
    }

    /// Remove the last element.
    ///
    /// Only the length changes. Bytes of the removed slot stay in
    /// storage until overwritten by a later append.
    #[inline]
    pub fn remove_last(&mut self) -> Result<()> {
        if self.len == 0 {
            return Err(Error::Underflow);
        }
        self.len -= 1;
        Ok(())
    }

    /// Release storage and consume the container.
    #[inline]
    pub fn teardown(self) {
        drop(self)
    }

    /// Returns bytes of all live elements.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage()[..self.len * self.stride()]
    }

    /// Returns mutable bytes of all live elements.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        let n_bytes = self.len * self.stride();
        &mut self.storage_mut()[..n_bytes]
    }

    /// Returns bytes of slots beyond the live elements.
    /// Removed elements remain visible here until overwritten.
    #[inline]
    pub fn spare_bytes(&self) -> &[u8] {
        &self.storage()[self.len * self.stride()..]
    }

    #[inline]
    fn storage(&self) -> &[u8] {
        // # SAFETY
        //
        // Storage is always `cap * stride` bytes and fully initialized,
        // as every allocated byte is zero-filled at first.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.cap * self.stride()) }
    }

    #[inline]
    fn storage_mut(&mut self) -> &mut [u8] {
        // # SAFETY
        //
        // Same as `storage()`, and we hold exclusive borrow of self.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.cap * self.stride()) }
    }

    #[inline]
    fn current_layout(&self) -> Layout {
        // # SAFETY
        //
        // Current capacity has been validated by `storage_layout` when
        // it was set, so size and alignment always form a valid layout.
        unsafe {
            Layout::from_size_align_unchecked(self.cap * self.stride(), self.elem.storage_align())
        }
    }

    fn grow(&mut self) -> Result<()> {
        let (new_cap, new_layout) = grown_capacity(self.cap)
            .and_then(|cap| storage_layout(self.elem, cap).map(|layout| (cap, layout)))
            .map_err(|e| {
                log::warn!("cannot grow capacity {}: {}", self.cap, e);
                e
            })?;
        let old_layout = self.current_layout();
        let new_ptr = if old_layout.size() == 0 {
            self.alloc.alloc_zeroed(new_layout)
        } else {
            // # SAFETY
            //
            // Pointer is allocated by the same allocator with old layout,
            // and new layout is validated above with the same alignment.
            unsafe {
                self.alloc
                    .realloc(self.ptr, old_layout, new_layout.size())
                    .map(|ptr| {
                        ptr.as_ptr()
                            .add(old_layout.size())
                            .write_bytes(0, new_layout.size() - old_layout.size());
                        ptr
                    })
            }
        };
        match new_ptr {
            Some(ptr) => {
                log::debug!(
                    "grow capacity from {} to {} with stride {}",
                    self.cap,
                    new_cap,
                    self.stride()
                );
                self.ptr = ptr;
                self.cap = new_cap;
                Ok(())
            }
            None => {
                log::warn!(
                    "failed to reallocate {} bytes, keep capacity {}",
                    new_layout.size(),
                    self.cap
                );
                Err(Error::ReallocationFailure)
            }
        }
    }

    /// Give storage back to allocator and reset to empty state.
    fn release(&mut self) {
        let layout = self.current_layout();
        if layout.size() > 0 {
            log::trace!("release {} bytes", layout.size());
            // # SAFETY
            //
            // Pointer and layout are valid, and pointer is replaced with
            // dangling one immediately so it's never used again.
            unsafe { self.alloc.dealloc(self.ptr, layout) }
        }
        self.ptr = dangling(layout.align());
        self.len = 0;
        self.cap = 0;
    }
}

impl<A: RawAlloc> Drop for RawVec<A> {
    #[inline]
    fn drop(&mut self) {
        self.release()
    }
}

impl<A: RawAlloc> fmt::Debug for RawVec<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawVec")
            .field("capacity", &self.cap)
            .field("length", &self.len)
            .field("stride", &self.stride())
            .field("align", &self.align())
            .finish()
    }
}
