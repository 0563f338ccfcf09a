#![doc = include_str!("../README.md")]

#[cfg(any(feature = "serde", doc))]
use proc_macro::TokenStream;
#[cfg(any(feature = "serde", doc))]
use quote::quote;
#[cfg(any(feature = "serde", doc))]
use syn::{parse_macro_input, DeriveInput};

/// Derive Serde's Serialize trait based on Display
///
/// Enabled through the `serde` feature. The deriving crate must itself depend
/// on `serde`.
#[cfg(any(feature = "serde", doc))]
#[proc_macro_derive(SerializeFromDisplay)]
pub fn derive_serialize_from_display_trait(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        const _: () = {
            fn assert_display<T: ::std::fmt::Display>() {}
            fn assert_traits #impl_generics () #where_clause {
                assert_display::<#name #ty_generics>();
            }
        };
        impl #impl_generics serde::ser::Serialize for #name #ty_generics #where_clause {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }
    };

    TokenStream::from(expanded)
}
