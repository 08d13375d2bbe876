//! Typed view over the untyped engine.
//!
//! [`TypedVec`] forwards every operation to [`RawVec`] with
//! `stride = size_of::<T>()` and casts byte slots back to `T` through
//! `bytemuck`, so element types are checked at compile time and no
//! raw pointer reaches the caller.
use crate::alloc::{Global, RawAlloc};
use crate::error::{Error, Result};
use crate::layout::ElemLayout;
use crate::raw::RawVec;
use bytemuck::Pod;
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::mem::{align_of, size_of};

/// Growable array of `T`, sharing the memory layout of [`RawVec`].
#[repr(transparent)]
pub struct TypedVec<T, A: RawAlloc = Global> {
    raw: RawVec<A>,
    _marker: PhantomData<T>,
}

impl<T: Pod> TypedVec<T> {
    /// Create a vector with storage for `cap` elements.
    #[inline]
    pub fn with_capacity(cap: usize) -> Result<Self> {
        Self::with_capacity_in(cap, Global)
    }

    /// Create a vector holding a copy of given elements.
    pub fn from_slice(src: &[T]) -> Result<Self> {
        let mut vec = Self::with_capacity(src.len())?;
        for v in src {
            vec.push(*v)?;
        }
        Ok(vec)
    }
}

impl<T: Pod, A: RawAlloc> TypedVec<T, A> {
    #[inline]
    pub fn with_capacity_in(cap: usize, alloc: A) -> Result<Self> {
        let raw = RawVec::with_layout_in(ElemLayout::of::<T>()?, cap, alloc)?;
        Ok(TypedVec {
            raw,
            _marker: PhantomData,
        })
    }

    /// Reinterpret an untyped container as typed one.
    ///
    /// Fails if stride of the container differs from size of `T`,
    /// or its storage is not aligned for `T`.
    #[inline]
    pub fn from_raw(raw: RawVec<A>) -> Result<Self> {
        if raw.stride() != size_of::<T>()
            || raw.elem_layout().storage_align() < align_of::<T>()
        {
            return Err(Error::InvalidArgument);
        }
        Ok(TypedVec {
            raw,
            _marker: PhantomData,
        })
    }

    #[inline]
    pub fn into_raw(self) -> RawVec<A> {
        self.raw
    }

    #[inline]
    pub fn as_raw(&self) -> &RawVec<A> {
        &self.raw
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    #[inline]
    pub fn allocator(&self) -> &A {
        self.raw.allocator()
    }

    /// Append one element, doubling capacity if full.
    #[inline]
    pub fn push(&mut self, item: T) -> Result<()> {
        self.raw.push(bytemuck::bytes_of(&item))
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<&T> {
        self.raw.get(idx).map(bytemuck::from_bytes)
    }

    #[inline]
    pub fn get_mut(&mut self, idx: usize) -> Option<&mut T> {
        self.raw.get_mut(idx).map(bytemuck::from_bytes_mut)
    }

    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|idx| self.get(idx))
    }

    #[inline]
    pub fn remove_last(&mut self) -> Result<()> {
        self.raw.remove_last()
    }

    /// Remove the last element and return a copy of it.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        let item = *self.last()?;
        self.raw.remove_last().ok()?;
        Some(item)
    }

    /// Sort elements in place. The sort is not stable.
    #[inline]
    pub fn sort_by<F>(&mut self, mut cmp: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.raw
            .sort_by(|a, b| cmp(bytemuck::from_bytes(a), bytemuck::from_bytes(b)))
    }

    #[inline]
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(|a, b| a.cmp(b))
    }

    #[inline]
    pub fn teardown(self) {
        self.raw.teardown()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        bytemuck::cast_slice(self.raw.as_bytes())
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        bytemuck::cast_slice_mut(self.raw.as_bytes_mut())
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }
}

impl<T: Pod + fmt::Debug, A: RawAlloc> fmt::Debug for TypedVec<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T: Pod, A: RawAlloc> IntoIterator for &'a TypedVec<T, A> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
