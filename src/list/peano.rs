//! Peano numbers used as alternative indices.

use core::marker::PhantomData;

/// Type-level natural number.
pub trait Peano: 'static {
    /// Runtime value of the number.
    const VALUE: usize;
}

/// Zero (base case)
pub struct Z;

impl Peano for Z {
    const VALUE: usize = 0;
}

/// Successor (S<N> = N + 1)
pub struct S<N>(PhantomData<N>);

impl<N: Peano> Peano for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

// D0 = Z, D1 = S<D0>, ..., D64
macros::peano!(D, 64);
