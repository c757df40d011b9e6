//! Procedural macros for altvariant.
//!
//! | Macro | Purpose |
//! |-------|---------|
//! | `peano!(D, 64)` | Index aliases `D0 = Z` .. `D64 = S<D63>` |
//! | `impl_operands!(4)` | `Flatten` / `Operands` impls for operand tuples of arity 1..=4 |
//!
//! Both are internal: they expand to code that names items of the calling
//! module directly.

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod inner;

/// Generate Peano index aliases.
///
/// # Usage
/// ```ignore
/// peano!(D, 64);  // D0 = Z, D1 = S<D0>, ..., D64 = S<D63>
/// ```
#[proc_macro]
pub fn peano(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::peano::PeanoInput);
    inner::peano::expand_peano(input).into()
}

/// Generate the apply engine's per-arity impls.
///
/// # Usage
/// ```ignore
/// impl_operands!(4);  // operand tuples (O0,) .. (O0, O1, O2, O3)
/// ```
#[proc_macro]
pub fn impl_operands(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::operands::OperandsInput);
    inner::operands::expand_impl_operands(input).into()
}
