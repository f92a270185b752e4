//!
//! Utilities for the derive macros.
//!

use quote::quote;

pub fn path_contains(path: &syn::Path, st: &str) -> bool {
    path.segments.iter().any(|seg| seg.ident == st)
}

///
/// Is this type a path ending in (or containing) `Span`?
///
pub fn is_span_type(ty: &syn::Type) -> bool {
    match ty {
        syn::Type::Path(syn::TypePath { path, .. }) => path_contains(path, "Span"),
        _ => false,
    }
}

pub fn get_struct_member_where_type(
    st: &syn::ItemStruct,
    pred: impl Fn(&syn::Type) -> bool,
) -> Option<syn::Expr> {
    let member: syn::Member = match &st.fields {
        syn::Fields::Named(syn::FieldsNamed { named, .. }) => named
            .iter()
            .find_map(|f| pred(&f.ty).then(|| f.ident.clone()).flatten())
            .map(syn::Member::Named),
        syn::Fields::Unnamed(syn::FieldsUnnamed { unnamed, .. }) => unnamed
            .iter()
            .enumerate()
            .find_map(|(i, f)| pred(&f.ty).then(|| syn::Member::Unnamed(syn::Index::from(i)))),
        syn::Fields::Unit => None,
    }?;

    syn::parse2(quote! {
        self.#member
    })
    .ok()
}
