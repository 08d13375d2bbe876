//! Element metadata and storage sizing.
use crate::error::{Error, Result};
use std::alloc::Layout;
use std::mem::{align_of, size_of};

/// Storage is always aligned to at least 16 bytes, so that
/// byte slots can be viewed as any primitive type.
pub const MIN_ALIGN: usize = 16;

/// Capacity multiplier applied when an append finds no free slot.
pub const GROWTH_FACTOR: usize = 2;

/// Capacity taken when growing from an empty storage.
/// Doubling alone would stall at zero.
pub const MIN_GROW_CAPACITY: usize = 1;

/// Size and alignment of one element slot.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElemLayout {
    size: usize,
    align: usize,
}

impl ElemLayout {
    /// Create element layout with given size and alignment.
    ///
    /// Size must be positive and a multiple of alignment,
    /// alignment must be power of two.
    #[inline]
    pub fn new(size: usize, align: usize) -> Result<Self> {
        if size == 0 || !align.is_power_of_two() || size % align != 0 {
            return Err(Error::InvalidArgument);
        }
        Ok(ElemLayout { size, align })
    }

    /// Layout of opaque elements with byte alignment.
    #[inline]
    pub fn bytes(stride: usize) -> Result<Self> {
        Self::new(stride, 1)
    }

    /// Layout of given type. Zero-sized types are rejected.
    #[inline]
    pub fn of<T>() -> Result<Self> {
        Self::new(size_of::<T>(), align_of::<T>())
    }

    /// Byte size of one element, a.k.a. stride.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn align(&self) -> usize {
        self.align
    }

    /// Alignment of the backing storage.
    #[inline]
    pub fn storage_align(&self) -> usize {
        usize::max(self.align, MIN_ALIGN)
    }
}

/// Compute memory layout of storage holding `cap` elements.
#[inline]
pub fn storage_layout(elem: ElemLayout, cap: usize) -> Result<Layout> {
    let n_bytes = cap.checked_mul(elem.size).ok_or(Error::Overflow)?;
    Layout::from_size_align(n_bytes, elem.storage_align()).map_err(|_| Error::Overflow)
}

/// Capacity after one growth step.
#[inline]
pub fn grown_capacity(cap: usize) -> Result<usize> {
    if cap == 0 {
        return Ok(MIN_GROW_CAPACITY);
    }
    cap.checked_mul(GROWTH_FACTOR).ok_or(Error::Overflow)
}
