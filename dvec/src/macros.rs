/// Declare a named vector type for a concrete element type.
///
/// The generated type is a transparent wrapper of [`TypedVec`](crate::TypedVec),
/// so its layout is that of [`RawVec`](crate::RawVec), and every method
/// forwards to the engine without extra checks.
///
/// ```
/// dvec::declare_vec!(pub I32Vec, i32);
///
/// let mut vec = I32Vec::with_capacity(2).unwrap();
/// vec.push(3).unwrap();
/// vec.push(1).unwrap();
/// vec.sort_by(|a, b| a.cmp(b));
/// assert_eq!(Some(&1), vec.get(0));
/// ```
#[macro_export]
macro_rules! declare_vec {
    ($(#[$meta:meta])* $vis:vis $name:ident, $ty:ty) => {
        $(#[$meta])*
        #[repr(transparent)]
        $vis struct $name($crate::TypedVec<$ty>);

        #[allow(dead_code)]
        impl $name {
            #[inline]
            pub fn with_capacity(cap: usize) -> $crate::Result<Self> {
                $crate::TypedVec::with_capacity(cap).map($name)
            }

            #[inline]
            pub fn push(&mut self, item: $ty) -> $crate::Result<()> {
                self.0.push(item)
            }

            #[inline]
            pub fn remove_last(&mut self) -> $crate::Result<()> {
                self.0.remove_last()
            }

            #[inline]
            pub fn get(&self, idx: usize) -> ::std::option::Option<&$ty> {
                self.0.get(idx)
            }

            #[inline]
            pub fn get_mut(&mut self, idx: usize) -> ::std::option::Option<&mut $ty> {
                self.0.get_mut(idx)
            }

            #[inline]
            pub fn sort_by<F>(&mut self, cmp: F)
            where
                F: FnMut(&$ty, &$ty) -> ::std::cmp::Ordering,
            {
                self.0.sort_by(cmp)
            }

            #[inline]
            pub fn teardown(self) {
                self.0.teardown()
            }

            #[inline]
            pub fn len(&self) -> usize {
                self.0.len()
            }

            #[inline]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            #[inline]
            pub fn capacity(&self) -> usize {
                self.0.capacity()
            }

            #[inline]
            pub fn as_slice(&self) -> &[$ty] {
                self.0.as_slice()
            }
        }

        impl ::std::convert::From<$name> for $crate::TypedVec<$ty> {
            #[inline]
            fn from(src: $name) -> Self {
                src.0
            }
        }

        impl ::std::convert::From<$crate::TypedVec<$ty>> for $name {
            #[inline]
            fn from(src: $crate::TypedVec<$ty>) -> Self {
                $name(src)
            }
        }

        impl ::std::convert::AsRef<$crate::RawVec> for $name {
            #[inline]
            fn as_ref(&self) -> &$crate::RawVec {
                self.0.as_raw()
            }
        }
    };
}
