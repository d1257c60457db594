//! The custom derives offered by enum-meta.

use proc_macro::TokenStream;

mod derive;

/// Derive `EnumMeta` for an enum with unit variants and an integer repr.
///
/// The derive records every variant's name and value in declaration order
/// and implements the `EnumMeta` trait. Values follow C-style enumerator
/// semantics: an explicit discriminant must be an integer literal and sets
/// the running counter, a variant without one gets the previous value plus
/// one, and the first variant defaults to 0.
///
/// Besides `EnumMeta`, the derive emits `From<E> for Repr`,
/// `TryFrom<Repr> for E`, `Display` (the variant name) and `FromStr` (name
/// to variant).
#[proc_macro_derive(EnumMeta)]
pub fn enum_meta_derive(input: TokenStream) -> TokenStream {
    let ast = syn::parse_macro_input!(input as syn::DeriveInput);
    match derive::enum_meta::impl_enum_meta(&ast) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}
