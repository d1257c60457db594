//! Everything related to errors.
//!
//! Lookup misses are not errors in this crate: the query API models them as
//! `Option`s or the [`NOT_FOUND`] sentinel. [`EnumMetaError`] only backs the
//! fallible std conversions (`TryFrom`, `FromStr`) emitted by the derive.
//!
//! [`NOT_FOUND`]: crate::NOT_FOUND

use thiserror::Error;

/// Conversion errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnumMetaError {
    #[error("no variant named {name} in {type_name}")]
    NameNotFound {
        type_name: &'static str,
        name: String,
    },
    #[error("{value} is not a value of {type_name}")]
    ValueNotFound {
        type_name: &'static str,
        value: String,
    },
}
