//! The integer types that can back a reflected enum.

use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

mod private {
    pub trait Sealed {}

    impl Sealed for i8 {}
    impl Sealed for i16 {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for isize {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
    impl Sealed for usize {}
}

/// Marker trait implemented by the primitive integer types that can appear
/// in the `#[repr]` attribute of a reflected enum.
///
/// This trait is sealed and cannot be implemented outside this crate.
pub trait EnumRepr:
    private::Sealed + Copy + Eq + Hash + Debug + Display + Send + Sync + 'static
{
}

impl EnumRepr for i8 {}
impl EnumRepr for i16 {}
impl EnumRepr for i32 {}
impl EnumRepr for i64 {}
impl EnumRepr for isize {}
impl EnumRepr for u8 {}
impl EnumRepr for u16 {}
impl EnumRepr for u32 {}
impl EnumRepr for u64 {}
impl EnumRepr for usize {}
