//! Per-type lookup tables.

use fnv::FnvHashMap;

use crate::meta::EnumMeta;

/// Sentinel returned by value-to-name queries when the value is not part
/// of the enum.
pub const NOT_FOUND: &str = "N/A";

/// The reflective metadata of one enum type: the declared names and values
/// in declaration order, and reverse maps for lookups in both directions.
///
/// An `EnumInfo` is built exactly once per enum type, from
/// [`EnumMeta::VARIANTS`], the first time the type is queried through
/// [`enum_info`] or one of the APIs built on top of it. It is never
/// modified afterwards, so it can be read from any number of threads
/// without synchronization.
///
/// [`enum_info`]: crate::enum_info
pub struct EnumInfo<E: EnumMeta> {
    names: Box<[&'static str]>,
    values: Box<[E]>,
    by_value: FnvHashMap<E::Repr, &'static str>,
    by_name: FnvHashMap<&'static str, E>,
}

impl<E: EnumMeta> EnumInfo<E> {
    pub(crate) fn new() -> Self {
        let variants = E::VARIANTS;
        let mut names = Vec::with_capacity(variants.len());
        let mut values = Vec::with_capacity(variants.len());
        let mut by_value =
            FnvHashMap::with_capacity_and_hasher(variants.len(), Default::default());
        let mut by_name =
            FnvHashMap::with_capacity_and_hasher(variants.len(), Default::default());

        for variant in variants {
            names.push(variant.name);
            values.push(variant.value);
            // Last write wins on duplicates, the ordered sequences keep
            // every entry.
            by_value.insert(variant.value.to_repr(), variant.name);
            by_name.insert(variant.name, variant.value);
        }

        EnumInfo {
            names: names.into_boxed_slice(),
            values: values.into_boxed_slice(),
            by_value,
            by_name,
        }
    }

    /// The symbolic name of `value`.
    ///
    /// Returns [`NOT_FOUND`] if the value is absent, which can only happen
    /// when a hand-written [`EnumMeta`] implementation doesn't list it.
    pub fn name(&self, value: E) -> &'static str {
        self.name_of(value.to_repr())
    }

    /// The symbolic name of the variant with the underlying value `repr`,
    /// [`NOT_FOUND`] if no variant has this value.
    pub fn name_of(&self, repr: E::Repr) -> &'static str {
        self.get_name(repr).unwrap_or(NOT_FOUND)
    }

    /// The symbolic name of the variant with the underlying value `repr`,
    /// `None` if no variant has this value.
    pub fn get_name(&self, repr: E::Repr) -> Option<&'static str> {
        self.by_value.get(&repr).copied()
    }

    /// The variant named `name`, `None` if there is no such variant.
    pub fn value(&self, name: &str) -> Option<E> {
        self.by_name.get(name).copied()
    }

    /// All declared names, in declaration order.
    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    /// All declared values, in declaration order, index-aligned with
    /// [`names`].
    ///
    /// [`names`]: EnumInfo::names
    pub fn values(&self) -> &[E] {
        &self.values
    }

    /// The number of declared variants.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if the enum has no variants.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over all (name, value) pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, E)> + '_ {
        self.names.iter().copied().zip(self.values.iter().copied())
    }
}
