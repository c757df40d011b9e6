//! Index alias generation.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Ident, LitInt, Token, parse::Parse, parse::ParseStream};

/// `peano!(D, 64)`: alias prefix and highest index.
pub struct PeanoInput {
    pub prefix: Ident,
    pub max: usize,
}

impl Parse for PeanoInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let prefix: Ident = input.parse()?;
        input.parse::<Token![,]>()?;
        let lit: LitInt = input.parse()?;
        let max = lit.base10_parse::<usize>()?;
        Ok(PeanoInput { prefix, max })
    }
}

/// `{prefix}0 = Z`, `{prefix}n = S<{prefix}(n-1)>` up to `max`.
pub fn expand_peano(input: PeanoInput) -> TokenStream {
    let PeanoInput { prefix, max } = input;

    let zero = format_ident!("{}0", prefix);
    let mut types = vec![quote! {
        #[doc = "Index 0."]
        pub type #zero = Z;
    }];

    for n in 1..=max {
        let curr = format_ident!("{}{}", prefix, n);
        let prev = format_ident!("{}{}", prefix, n - 1);
        let doc = format!("Index {n}.");
        types.push(quote! {
            #[doc = #doc]
            pub type #curr = S<#prev>;
        });
    }

    quote! { #(#types)* }
}
