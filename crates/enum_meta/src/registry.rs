//! The process-wide, type-indexed registry.

use std::any::{Any, TypeId, type_name};

use dashmap::DashMap;
use fnv::FnvBuildHasher;
use once_cell::sync::Lazy;

use crate::{info::EnumInfo, meta::EnumMeta};

type AnyInfo = &'static (dyn Any + Send + Sync);

static REGISTRY: Lazy<DashMap<TypeId, AnyInfo, FnvBuildHasher>> =
    Lazy::new(DashMap::default);

/// The [`EnumInfo`] of `E`.
///
/// The info is built from [`EnumMeta::VARIANTS`] the first time this
/// function is called for `E` and cached for the rest of the process.
/// Initialization runs exactly once per type, even when multiple threads
/// race the first access; every call returns the same reference.
pub fn enum_info<E: EnumMeta>() -> &'static EnumInfo<E> {
    let info = *REGISTRY.entry(TypeId::of::<E>()).or_insert_with(|| {
        let info: &'static EnumInfo<E> = Box::leak(Box::new(EnumInfo::new()));
        info
    });

    match info.downcast_ref::<EnumInfo<E>>() {
        Some(info) => info,
        // The entry is keyed by E's TypeId and only ever written above.
        None => unreachable!("registry entry has the wrong type for {}", type_name::<E>()),
    }
}

/// The symbolic name of `value`, [`NOT_FOUND`] if it is absent.
///
/// [`NOT_FOUND`]: crate::NOT_FOUND
pub fn name<E: EnumMeta>(value: E) -> &'static str {
    enum_info::<E>().name(value)
}

/// The variant of `E` named `name`, `None` if there is no such variant.
pub fn value<E: EnumMeta>(name: &str) -> Option<E> {
    enum_info::<E>().value(name)
}

/// All declared names of `E`, in declaration order.
pub fn names<E: EnumMeta>() -> &'static [&'static str] {
    enum_info::<E>().names()
}

/// All declared values of `E`, in declaration order, index-aligned with
/// [`names`].
pub fn values<E: EnumMeta>() -> &'static [E] {
    enum_info::<E>().values()
}
