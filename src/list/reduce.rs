//! Const reductions over every alternative of a list.
//!
//! Capability gating (all alternatives `Clone`, `Eq`, `Hash`, ...) is an AND
//! reduction expressed by the recursive capability lists in
//! [`storage::caps`](crate::storage::caps). The reductions here are the ones
//! a `const fn` can compute.

use core::mem;

use super::node::{HCons, HNil};

/// Layout and drop facts folded over all alternatives.
pub trait Reduce {
    /// OR of `mem::needs_drop` per alternative. When false, destroying the
    /// live alternative is a no-op and is skipped entirely.
    const NEEDS_DROP: bool;

    /// Largest alternative size in bytes.
    const MAX_SIZE: usize;

    /// Strictest alternative alignment.
    const MAX_ALIGN: usize;
}

const fn max(a: usize, b: usize) -> usize {
    if a > b { a } else { b }
}

impl Reduce for HNil {
    const NEEDS_DROP: bool = false;
    const MAX_SIZE: usize = 0;
    const MAX_ALIGN: usize = 1;
}

impl<H, T: Reduce> Reduce for HCons<H, T> {
    const NEEDS_DROP: bool = mem::needs_drop::<H>() || T::NEEDS_DROP;
    const MAX_SIZE: usize = max(mem::size_of::<H>(), T::MAX_SIZE);
    const MAX_ALIGN: usize = max(mem::align_of::<H>(), T::MAX_ALIGN);
}
