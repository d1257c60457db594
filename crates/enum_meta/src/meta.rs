//! The trait that connects an enum to its reflective metadata.

use crate::{registry::enum_info, repr::EnumRepr};

/// One declared variant of a reflected enum: its symbolic name and the
/// variant itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Variant<E> {
    /// The variant's identifier, exactly as declared.
    pub name: &'static str,
    /// The variant.
    pub value: E,
}

/// Trait implemented by enums with reflective metadata.
///
/// This trait is normally derived. The derive requires an enum with unit
/// variants and an integer repr, and records every variant in declaration
/// order with C-style enumerator semantics: a variant without an explicit
/// discriminant gets the previous variant's value plus one, and the first
/// variant defaults to 0.
///
/// Implementations must keep [`VARIANTS`], [`to_repr`] and [`from_repr`]
/// consistent with each other: `from_repr(v.to_repr())` must return the
/// variant `v` for every listed variant. A hand-written implementation may
/// list duplicate names or values; the registry's reverse maps then keep
/// the last write while the ordered sequences keep every entry.
///
/// [`VARIANTS`]: EnumMeta::VARIANTS
/// [`to_repr`]: EnumMeta::to_repr
/// [`from_repr`]: EnumMeta::from_repr
pub trait EnumMeta: Sized + Copy + Send + Sync + 'static {
    /// The underlying integer type.
    type Repr: EnumRepr;

    /// All declared variants, in declaration order.
    const VARIANTS: &'static [Variant<Self>];

    /// Convert `self` to its underlying integer value.
    fn to_repr(self) -> Self::Repr;

    /// Convert an underlying integer value back to the variant it belongs
    /// to, `None` if no variant has this value.
    fn from_repr(repr: Self::Repr) -> Option<Self>;

    /// The symbolic name of `self`.
    fn name(self) -> &'static str {
        enum_info::<Self>().name(self)
    }

    /// The variant named `name`, `None` if there is no such variant.
    fn from_name(name: &str) -> Option<Self> {
        enum_info::<Self>().value(name)
    }
}
