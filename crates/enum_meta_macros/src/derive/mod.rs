pub mod enum_meta;

fn get_repr_int(ast: &syn::DeriveInput) -> Option<syn::Ident> {
    for attr in &ast.attrs {
        if attr.path().is_ident("repr") {
            let p: Result<syn::Path, _> = attr.parse_args();
            if let Ok(p) = p {
                if p.is_ident("i8")
                    || p.is_ident("i16")
                    || p.is_ident("i32")
                    || p.is_ident("i64")
                    || p.is_ident("isize")
                    || p.is_ident("u8")
                    || p.is_ident("u16")
                    || p.is_ident("u32")
                    || p.is_ident("u64")
                    || p.is_ident("usize")
                {
                    return p.get_ident().map(Clone::clone);
                }
            }
        }
    }

    None
}
