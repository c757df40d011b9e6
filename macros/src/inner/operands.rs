//! Operand tuple expansion for the apply engine.
//!
//! For every arity `1..=max` this generates:
//! - `Flatten` for the accumulator cons-list `(A0, (A1, ... ()))`, turning
//!   the resolved values back into a flat argument tuple;
//! - `Operands` for the flat operand tuple `(O0, O1, ...)`, which rejects
//!   valueless operands before any of them is consumed and then starts the
//!   recursive resolution.
//!
//! The expansion refers to `Flatten`, `Operands`, `Operand`, `Continue`,
//! `InvalidAccess` and `rejected` by name; they must be in scope at the call
//! site.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::{LitInt, parse::Parse, parse::ParseStream};

pub struct OperandsInput {
    pub max: usize,
}

impl Parse for OperandsInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        let max = lit.base10_parse::<usize>()?;
        if max == 0 {
            return Err(syn::Error::new(lit.span(), "arity must be at least 1"));
        }
        Ok(OperandsInput { max })
    }
}

/// Right-nested cons-list `(x0, (x1, ... ()))` over `items`.
fn cons(items: &[TokenStream]) -> TokenStream {
    items
        .iter()
        .rev()
        .fold(quote! { () }, |tail, head| quote! { (#head, #tail) })
}

fn idents(prefix: &str, n: usize) -> Vec<Ident> {
    (0..n).map(|k| format_ident!("{}{}", prefix, k)).collect()
}

fn expand_flatten(n: usize) -> TokenStream {
    let types = idents("A", n);
    let values = idents("a", n);

    let list_type = cons(&types.iter().map(|t| quote! { #t }).collect::<Vec<_>>());
    let list_pat = cons(&values.iter().map(|v| quote! { #v }).collect::<Vec<_>>());

    quote! {
        impl<#(#types),*> Flatten for #list_type {
            type Tuple = (#(#types,)*);

            #[inline(always)]
            fn flatten(self) -> Self::Tuple {
                let #list_pat = self;
                (#(#values,)*)
            }
        }
    }
}

fn expand_operands(n: usize) -> TokenStream {
    let operands = idents("O", n);
    let values = idents("o", n);
    let indices = idents("i", n);
    let positions = 0..n;

    let chain_type = cons(
        &operands
            .iter()
            .map(|o| quote! { (<#o as Operand>::Cursor, usize) })
            .collect::<Vec<_>>(),
    );
    let chain_value = cons(
        &values
            .iter()
            .zip(&indices)
            .map(|(v, i)| quote! { (Operand::into_cursor(#v), #i) })
            .collect::<Vec<_>>(),
    );

    quote! {
        impl<Op, R, #(#operands),*> Operands<Op, R> for (#(#operands,)*)
        where
            #(#operands: Operand,)*
            #chain_type: Continue<Op, (), R>,
        {
            #[inline]
            fn apply(self, op: Op) -> Result<R, InvalidAccess> {
                let (#(#values,)*) = self;
                #(
                    let Some(#indices) = Operand::index(&#values) else {
                        rejected(#positions);
                        return Err(InvalidAccess);
                    };
                )*
                let chain = #chain_value;
                // SAFETY: every index was just read from its own operand, and
                // `Operand` is an unsafe trait vouching for it.
                Ok(unsafe { Continue::resume(chain, op, ()) })
            }
        }
    }
}

pub fn expand_impl_operands(input: OperandsInput) -> TokenStream {
    let impls = (1..=input.max).map(|n| {
        let flatten = expand_flatten(n);
        let operands = expand_operands(n);
        quote! { #flatten #operands }
    });
    quote! { #(#impls)* }
}
