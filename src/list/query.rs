//! Index and type queries over alternative lists.

use super::node::{HCons, HNil};
use super::peano::{Peano, S, Z};

// =============================================================================
// Lookup by index
// =============================================================================

/// The alternative at position `I`.
#[diagnostic::on_unimplemented(
    message = "index `{I}` is out of bounds for alternative list `{Self}`",
    label = "no alternative at this position"
)]
pub trait At<I> {
    type Out;
}

impl<H, T> At<Z> for HCons<H, T> {
    type Out = H;
}

impl<H, T, N> At<S<N>> for HCons<H, T>
where
    T: At<N>,
{
    type Out = <T as At<N>>::Out;
}

/// Shorthand for `<L as At<I>>::Out`.
pub type AltAt<L, I> = <L as At<I>>::Out;

// =============================================================================
// Search by type
// =============================================================================

/// `T` occurs in the list at position `I`.
///
/// `I` is meant to be inferred. If `T` is absent there is no impl; if it
/// occurs more than once the index is ambiguous. Both are build errors, and
/// the alternative must then be selected by position.
#[diagnostic::on_unimplemented(
    message = "`{T}` is not an alternative of `{Self}`",
    label = "type not found in alternative list",
    note = "if the type occurs more than once, select the alternative by index instead"
)]
pub trait IndexOf<T, I: Peano> {
    const INDEX: usize = I::VALUE;
}

impl<T, Tail> IndexOf<T, Z> for HCons<T, Tail> {}

impl<H, Tail, T, N> IndexOf<T, S<N>> for HCons<H, Tail>
where
    N: Peano,
    Tail: IndexOf<T, N>,
{
}

// =============================================================================
// Length
// =============================================================================

/// Number of alternatives.
pub trait Len {
    const LEN: usize;
}

impl Len for HNil {
    const LEN: usize = 0;
}

impl<H, T: Len> Len for HCons<H, T> {
    const LEN: usize = 1 + T::LEN;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::peano::{D0, D1, D2};

    type L = crate::alts![u8, &'static str, u8, ()];

    fn index_of<T, I: Peano>() -> usize
    where
        L: IndexOf<T, I>,
    {
        <L as IndexOf<T, I>>::INDEX
    }

    #[test]
    fn lookup_by_position() {
        let a: AltAt<L, D0> = 7u8;
        let b: AltAt<L, D1> = "seven";
        let c: AltAt<L, D2> = 7u8;
        assert_eq!((a, b, c), (7, "seven", 7));
    }

    #[test]
    fn search_by_unique_type() {
        assert_eq!(index_of::<&'static str, _>(), 1);
        assert_eq!(index_of::<(), _>(), 3);
    }

    #[test]
    fn length() {
        assert_eq!(<L as Len>::LEN, 4);
        assert_eq!(<HNil as Len>::LEN, 0);
    }
}
