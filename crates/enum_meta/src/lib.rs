//! enum-meta gives integer-backed enums reflective capabilities: converting
//! between symbolic names and values in both directions, and enumerating all
//! declared names and values in declaration order.
//!
//! Rust enums don't carry this information at runtime. This crate retrofits
//! it with a derive macro that records every variant's name and value at
//! compile time, and a process-wide registry that builds per-type lookup
//! tables from that record the first time a type is queried.
//!
//! # Overview
//!
//! An enum becomes reflective by deriving [`EnumMeta`]. The derive requires
//! unit variants and an explicit integer `#[repr]`, and follows C-style
//! enumerator semantics: a variant without an explicit discriminant gets the
//! previous variant's value plus one, and the first variant defaults to 0.
//! These are the rules rustc itself applies, the derive merely makes the
//! computed values observable.
//!
//! ```
//! use enum_meta::prelude::*;
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, EnumMeta)]
//! #[repr(i32)]
//! enum Animal {
//!     Cat = -5,
//!     Dog,
//!     Horse = 7,
//! }
//!
//! // Variant to name and back.
//! assert_eq!(Animal::Dog.name(), "Dog");
//! assert_eq!(Animal::from_name("Horse"), Some(Animal::Horse));
//! assert_eq!(Animal::from_name("Camel"), None);
//!
//! // All names and values, in declaration order.
//! assert_eq!(enum_meta::names::<Animal>(), &["Cat", "Dog", "Horse"]);
//! assert_eq!(
//!     enum_meta::values::<Animal>(),
//!     &[Animal::Cat, Animal::Dog, Animal::Horse]
//! );
//!
//! // The implicit-value rule: Dog = Cat + 1.
//! assert_eq!(Animal::Dog.to_repr(), -4);
//! assert_eq!(Animal::from_repr(7), Some(Animal::Horse));
//! ```
//!
//! The derive also emits the std conversion traits that fit this data:
//! `From<E> for Repr`, `TryFrom<Repr> for E`, `Display` (the variant name)
//! and `FromStr` (name to variant). The fallible ones fail with
//! [`EnumMetaError`].
//!
//! # The registry
//!
//! Lookup tables live in [`EnumInfo`], one instance per enum type, created
//! by [`enum_info`] the first time the type is touched and immutable for
//! the rest of the process. Initialization is guarded so it runs exactly
//! once even when multiple threads race the first access; afterwards all
//! queries are plain reads that need no synchronization.
//!
//! A lookup miss is not an error: name-to-value queries return an `Option`,
//! and value-to-name queries fall back to the [`NOT_FOUND`] sentinel.
//! Misses can only occur through raw repr values or strings; a value of the
//! enum type itself always resolves.
//!
//! [`EnumMeta`] can also be implemented by hand when the variant list has
//! to be assembled some other way; [`Variant`] is the building block. The
//! maps keep the last write for duplicate names or values in a hand-written
//! list, while the ordered sequences keep every entry.

pub mod error;
mod info;
mod meta;
pub mod prelude;
mod registry;
mod repr;

#[cfg(feature = "derive")]
pub use enum_meta_macros::EnumMeta;

pub use crate::{
    error::EnumMetaError,
    info::{EnumInfo, NOT_FOUND},
    meta::{EnumMeta, Variant},
    registry::{enum_info, name, names, value, values},
    repr::EnumRepr,
};
