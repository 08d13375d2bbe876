//! Growable contiguous container of fixed-stride elements.
//!
//! The untyped engine [`RawVec`] manages one aligned block of opaque
//! slots: allocation, doubling growth, bounds-checked lookup, in-place
//! sort and removal from the end. [`TypedVec`] and [`declare_vec!`]
//! present element-typed views over the same engine.
//!
//! Storage never shrinks, and elements can only be appended to or
//! removed from the end. The container is not synchronized.
pub mod alloc;
pub mod error;
pub mod layout;
#[macro_use]
mod macros;
pub mod raw;
pub mod sort;
pub mod typed;

pub use crate::alloc::{Global, RawAlloc};
pub use crate::error::{error_message, Error, Result};
pub use crate::layout::ElemLayout;
pub use crate::raw::RawVec;
pub use crate::typed::TypedVec;
