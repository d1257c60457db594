//! Reexports structs and traits you're likely to need.

#[cfg(feature = "derive")]
pub use enum_meta_macros::EnumMeta;

pub use crate::{
    error::EnumMetaError,
    info::{EnumInfo, NOT_FOUND},
    meta::{EnumMeta, Variant},
    registry::enum_info,
};
