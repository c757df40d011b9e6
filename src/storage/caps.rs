//! Capability lists: per-alternative operations gated on every alternative.
//!
//! Each trait is implemented for `HCons<H, T>` only when `H` has the
//! capability and `T` implements the same list trait, i.e. it is an AND
//! reduction over the list. The container gains the matching std trait
//! exactly when its list implements the capability list.
//!
//! Every operation takes a zero-based alternative index and raw storage
//! pointers. Callers guarantee that the named alternative is live.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ptr;

use super::slot::{AlternativeList, Slot};
use crate::list::{HCons, HNil};

type Storage<L> = <L as AlternativeList>::Storage;

macro_rules! out_of_range {
    ($index:expr) => {
        unreachable!("alternative index {} out of range", $index)
    };
}

// =============================================================================
// Clone
// =============================================================================

/// Every alternative is `Clone`.
///
/// # Safety
/// `clone_at` must initialize exactly the alternative at `index` in `dst`.
#[diagnostic::on_unimplemented(
    message = "not every alternative of `{Self}` implements `Clone`",
    label = "the container is only `Clone` when all alternatives are"
)]
pub unsafe trait CloneList: AlternativeList {
    /// Clone the alternative at `index` from `src` into uninitialized `dst`.
    ///
    /// # Safety
    /// `src` holds a live alternative at `index`; `dst` holds nothing live.
    unsafe fn clone_at(src: *const Storage<Self>, dst: *mut Storage<Self>, index: usize);

    /// `Clone::clone_from` between two live alternatives at the same `index`.
    ///
    /// # Safety
    /// Both `dst` and `src` hold a live alternative at `index`.
    unsafe fn clone_from_at(dst: *mut Storage<Self>, src: *const Storage<Self>, index: usize);
}

unsafe impl CloneList for HNil {
    unsafe fn clone_at(_: *const Storage<Self>, _: *mut Storage<Self>, index: usize) {
        out_of_range!(index)
    }

    unsafe fn clone_from_at(_: *mut Storage<Self>, _: *const Storage<Self>, index: usize) {
        out_of_range!(index)
    }
}

unsafe impl<H: Clone, T: CloneList> CloneList for HCons<H, T> {
    #[inline]
    unsafe fn clone_at(src: *const Storage<Self>, dst: *mut Storage<Self>, index: usize) {
        unsafe {
            if index == 0 {
                let value = (*Slot::head(src)).clone();
                ptr::write(Slot::head_mut(dst), value);
            } else {
                T::clone_at(Slot::rest(src), Slot::rest_mut(dst), index - 1);
            }
        }
    }

    #[inline]
    unsafe fn clone_from_at(dst: *mut Storage<Self>, src: *const Storage<Self>, index: usize) {
        unsafe {
            if index == 0 {
                (*Slot::head_mut(dst)).clone_from(&*Slot::head(src));
            } else {
                T::clone_from_at(Slot::rest_mut(dst), Slot::rest(src), index - 1);
            }
        }
    }
}

/// Every alternative is `Copy`: the storage union itself is `Copy` and the
/// container may run in trivial mode.
///
/// # Safety
/// Implemented only through the recursive impls below.
#[diagnostic::on_unimplemented(
    message = "not every alternative of `{Self}` implements `Copy`",
    label = "trivial mode requires all alternatives to be `Copy`"
)]
pub unsafe trait CopyList: AlternativeList<Storage: Copy> {}

unsafe impl CopyList for HNil {}

unsafe impl<H: Copy, T: CopyList> CopyList for HCons<H, T> {}

// =============================================================================
// Equality and ordering
// =============================================================================

/// Every alternative is `PartialEq`.
///
/// # Safety
/// `eq_at` must only read the alternative at `index`.
#[diagnostic::on_unimplemented(
    message = "not every alternative of `{Self}` implements `PartialEq`"
)]
pub unsafe trait PartialEqList: AlternativeList {
    /// # Safety
    /// Both `a` and `b` hold a live alternative at `index`.
    unsafe fn eq_at(a: *const Storage<Self>, b: *const Storage<Self>, index: usize) -> bool;
}

unsafe impl PartialEqList for HNil {
    unsafe fn eq_at(_: *const Storage<Self>, _: *const Storage<Self>, index: usize) -> bool {
        out_of_range!(index)
    }
}

unsafe impl<H: PartialEq, T: PartialEqList> PartialEqList for HCons<H, T> {
    #[inline]
    unsafe fn eq_at(a: *const Storage<Self>, b: *const Storage<Self>, index: usize) -> bool {
        unsafe {
            if index == 0 {
                *Slot::head(a) == *Slot::head(b)
            } else {
                T::eq_at(Slot::rest(a), Slot::rest(b), index - 1)
            }
        }
    }
}

/// Every alternative is `Eq`.
///
/// # Safety
/// Implemented only through the recursive impls below.
pub unsafe trait EqList: PartialEqList {}

unsafe impl EqList for HNil {}

unsafe impl<H: Eq, T: EqList> EqList for HCons<H, T> {}

/// Every alternative is `PartialOrd`.
///
/// # Safety
/// `partial_cmp_at` must only read the alternative at `index`.
#[diagnostic::on_unimplemented(
    message = "not every alternative of `{Self}` implements `PartialOrd`"
)]
pub unsafe trait PartialOrdList: PartialEqList {
    /// # Safety
    /// Both `a` and `b` hold a live alternative at `index`.
    unsafe fn partial_cmp_at(
        a: *const Storage<Self>,
        b: *const Storage<Self>,
        index: usize,
    ) -> Option<Ordering>;
}

unsafe impl PartialOrdList for HNil {
    unsafe fn partial_cmp_at(
        _: *const Storage<Self>,
        _: *const Storage<Self>,
        index: usize,
    ) -> Option<Ordering> {
        out_of_range!(index)
    }
}

unsafe impl<H: PartialOrd, T: PartialOrdList> PartialOrdList for HCons<H, T> {
    #[inline]
    unsafe fn partial_cmp_at(
        a: *const Storage<Self>,
        b: *const Storage<Self>,
        index: usize,
    ) -> Option<Ordering> {
        unsafe {
            if index == 0 {
                (*Slot::head(a)).partial_cmp(&*Slot::head(b))
            } else {
                T::partial_cmp_at(Slot::rest(a), Slot::rest(b), index - 1)
            }
        }
    }
}

/// Every alternative is `Ord`.
///
/// # Safety
/// `cmp_at` must only read the alternative at `index`.
#[diagnostic::on_unimplemented(message = "not every alternative of `{Self}` implements `Ord`")]
pub unsafe trait OrdList: EqList + PartialOrdList {
    /// # Safety
    /// Both `a` and `b` hold a live alternative at `index`.
    unsafe fn cmp_at(a: *const Storage<Self>, b: *const Storage<Self>, index: usize) -> Ordering;
}

unsafe impl OrdList for HNil {
    unsafe fn cmp_at(_: *const Storage<Self>, _: *const Storage<Self>, index: usize) -> Ordering {
        out_of_range!(index)
    }
}

unsafe impl<H: Ord, T: OrdList> OrdList for HCons<H, T> {
    #[inline]
    unsafe fn cmp_at(a: *const Storage<Self>, b: *const Storage<Self>, index: usize) -> Ordering {
        unsafe {
            if index == 0 {
                (*Slot::head(a)).cmp(&*Slot::head(b))
            } else {
                T::cmp_at(Slot::rest(a), Slot::rest(b), index - 1)
            }
        }
    }
}

// =============================================================================
// Hash and Debug
// =============================================================================

/// Every alternative is `Hash`.
///
/// # Safety
/// `hash_at` must only read the alternative at `index`.
#[diagnostic::on_unimplemented(message = "not every alternative of `{Self}` implements `Hash`")]
pub unsafe trait HashList: AlternativeList {
    /// Feed the alternative at `index` to `state`, exactly as its own `Hash`
    /// impl would.
    ///
    /// # Safety
    /// `p` holds a live alternative at `index`.
    unsafe fn hash_at<Hs: Hasher>(p: *const Storage<Self>, index: usize, state: &mut Hs);
}

unsafe impl HashList for HNil {
    unsafe fn hash_at<Hs: Hasher>(_: *const Storage<Self>, index: usize, _: &mut Hs) {
        out_of_range!(index)
    }
}

unsafe impl<H: Hash, T: HashList> HashList for HCons<H, T> {
    #[inline]
    unsafe fn hash_at<Hs: Hasher>(p: *const Storage<Self>, index: usize, state: &mut Hs) {
        unsafe {
            if index == 0 {
                (*Slot::head(p)).hash(state);
            } else {
                T::hash_at(Slot::rest(p), index - 1, state);
            }
        }
    }
}

/// Every alternative is `Debug`.
///
/// # Safety
/// `fmt_at` must only read the alternative at `index`.
#[diagnostic::on_unimplemented(message = "not every alternative of `{Self}` implements `Debug`")]
pub unsafe trait DebugList: AlternativeList {
    /// # Safety
    /// `p` holds a live alternative at `index`.
    unsafe fn fmt_at(p: *const Storage<Self>, index: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

unsafe impl DebugList for HNil {
    unsafe fn fmt_at(_: *const Storage<Self>, index: usize, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        out_of_range!(index)
    }
}

unsafe impl<H: fmt::Debug, T: DebugList> DebugList for HCons<H, T> {
    unsafe fn fmt_at(p: *const Storage<Self>, index: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        unsafe {
            if index == 0 {
                fmt::Debug::fmt(&*Slot::head(p), f)
            } else {
                T::fmt_at(Slot::rest(p), index - 1, f)
            }
        }
    }
}
