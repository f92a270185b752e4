//!
//! Macros for the main crate.
//!

mod utils;

use proc_macro::TokenStream as Tokens;
use quote::quote;
use syn::parse_macro_input;
use utils::{get_struct_member_where_type, is_span_type};

///
/// ## Spanned
///
/// Implements `crate::common::Spanned` for a struct holding a `Span` field.
///
/// ### Example
///
/// ```ignore
/// use crate::common::{Span, Spanned};
///
/// #[derive(Spanned)]
/// struct Token {
///     span: Span,
///     text: String,
/// }
/// ```
///
#[proc_macro_derive(Spanned)]
pub fn derive_spanned(target: Tokens) -> Tokens {
    let target: syn::Item = parse_macro_input!(target);

    let syn::Item::Struct(st) = &target else {
        return syn::Error::new_spanned(&target, "`Spanned` can only be derived for structs.")
            .into_compile_error()
            .into();
    };

    let Some(member) = get_struct_member_where_type(st, is_span_type) else {
        return syn::Error::new_spanned(st, "Expected a field of type `Span`.")
            .into_compile_error()
            .into();
    };

    let ident = &st.ident;
    let (impl_generics, ty_generics, where_clause) = st.generics.split_for_impl();

    quote! {
        impl #impl_generics crate::common::Spanned for #ident #ty_generics #where_clause {
            fn span(&self) -> crate::common::Span {
                #member
            }
        }
    }
    .into()
}
