use itertools::Itertools;
use proc_macro2::{Literal, TokenStream};
use quote::quote;
use syn::spanned::Spanned;

use super::get_repr_int;

pub fn impl_enum_meta(ast: &syn::DeriveInput) -> syn::Result<TokenStream> {
    let name = &ast.ident;
    let repr = match get_repr_int(ast) {
        Some(repr) => repr,
        None => {
            return Err(syn::Error::new(
                ast.span(),
                "`EnumMeta` can only be derived for enums with an integer repr.",
            ));
        }
    };

    let syn::Data::Enum(data) = &ast.data else {
        return Err(syn::Error::new(ast.span(), "Not an enum."));
    };

    let entries = enum_entries(data)?;

    let idents = entries.iter().map(|entry| &entry.ident).collect_vec();
    let names = idents.iter().map(|ident| ident.to_string()).collect_vec();
    let values = entries
        .iter()
        .map(|entry| Literal::i128_unsuffixed(entry.value))
        .collect_vec();
    let name_str = name.to_string();

    let enum_meta_impl = quote! {
        impl ::enum_meta::EnumMeta for #name {
            type Repr = #repr;

            const VARIANTS: &'static [::enum_meta::Variant<Self>] = &[
                #(
                    ::enum_meta::Variant { name: #names, value: #name::#idents },
                )*
            ];

            fn to_repr(self) -> #repr {
                self as #repr
            }

            fn from_repr(repr: #repr) -> ::std::option::Option<Self> {
                match repr {
                    #(
                        #values => ::std::option::Option::Some(#name::#idents),
                    )*
                    _ => ::std::option::Option::None,
                }
            }
        }

        impl ::std::convert::From<#name> for #repr {
            fn from(value: #name) -> Self {
                value as #repr
            }
        }

        impl ::std::convert::TryFrom<#repr> for #name {
            type Error = ::enum_meta::EnumMetaError;

            fn try_from(value: #repr) -> ::std::result::Result<Self, Self::Error> {
                <Self as ::enum_meta::EnumMeta>::from_repr(value).ok_or_else(|| {
                    ::enum_meta::EnumMetaError::ValueNotFound {
                        type_name: #name_str,
                        value: ::std::string::ToString::to_string(&value),
                    }
                })
            }
        }

        impl ::std::str::FromStr for #name {
            type Err = ::enum_meta::EnumMetaError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as ::enum_meta::EnumMeta>::from_name(s).ok_or_else(|| {
                    ::enum_meta::EnumMetaError::NameNotFound {
                        type_name: #name_str,
                        name: ::std::string::ToString::to_string(s),
                    }
                })
            }
        }

        impl ::std::fmt::Display for #name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(<Self as ::enum_meta::EnumMeta>::name(*self))
            }
        }
    };

    Ok(enum_meta_impl)
}

#[derive(Debug)]
struct Entry {
    ident: syn::Ident,
    value: i128,
}

/// Assigns a value to every variant with C-style enumerator semantics: an
/// explicit discriminant sets the running counter, a variant without one
/// gets the previous value plus one, and the first variant defaults to 0.
fn enum_entries(data: &syn::DataEnum) -> syn::Result<Vec<Entry>> {
    let mut entries = Vec::with_capacity(data.variants.len());
    let mut next_value = 0i128;

    for variant in data.variants.iter() {
        if !matches!(variant.fields, syn::Fields::Unit) {
            return Err(syn::Error::new(
                variant.span(),
                "`EnumMeta` can only be derived for enums with unit variants.",
            ));
        }

        let value = match &variant.discriminant {
            Some((_, expr)) => discriminant_value(expr)?,
            None => next_value,
        };
        next_value = value + 1;

        entries.push(Entry {
            ident: variant.ident.clone(),
            value,
        });
    }

    Ok(entries)
}

fn discriminant_value(expr: &syn::Expr) -> syn::Result<i128> {
    match expr {
        syn::Expr::Lit(syn::ExprLit {
            lit: syn::Lit::Int(lit),
            ..
        }) => lit.base10_parse(),
        syn::Expr::Unary(syn::ExprUnary {
            op: syn::UnOp::Neg(_),
            expr,
            ..
        }) => Ok(-discriminant_value(expr)?),
        syn::Expr::Group(group) => discriminant_value(&group.expr),
        _ => Err(syn::Error::new(
            expr.span(),
            "discriminant must be an integer literal",
        )),
    }
}
