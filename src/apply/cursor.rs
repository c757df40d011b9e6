//! Per-operand resolution.
//!
//! A cursor points at the storage of one operand with the value category it
//! was passed in (`Ref` shared, `Mut` exclusive, `Own` by value). Dispatch
//! walks the operand's list: at position 0 it resolves the head slot, pushes
//! it onto the accumulator and resumes with the next operand; otherwise it
//! narrows the cursor to the rest of the union and decrements the index.
//! The walk is fully monomorphized, so the compiler sees nested branches on
//! the index and nothing else.

use core::marker::PhantomData;
use core::mem::MaybeUninit;
use core::ptr;

use super::resolve::{Continue, Push};
use crate::list::{HCons, HNil};
use crate::storage::{AlternativeList, Slot};

/// Shared view of an operand's storage.
pub struct Ref<'a, L: AlternativeList> {
    ptr: *const L::Storage,
    _borrow: PhantomData<&'a ()>,
}

/// Exclusive view of an operand's storage.
pub struct Mut<'a, L: AlternativeList> {
    ptr: *mut L::Storage,
    _borrow: PhantomData<&'a mut ()>,
}

/// Storage moved out of an operand. Never drops anything by itself: the
/// resolved alternative is read out exactly once.
pub struct Own<L: AlternativeList> {
    storage: MaybeUninit<L::Storage>,
}

impl<'a, L: AlternativeList> Ref<'a, L> {
    /// # Safety
    /// `ptr` must stay valid and unaliased by writers for `'a`.
    #[inline(always)]
    pub(crate) unsafe fn from_ptr(ptr: *const L::Storage) -> Self {
        Self { ptr, _borrow: PhantomData }
    }
}

impl<'a, L: AlternativeList> Mut<'a, L> {
    /// # Safety
    /// `ptr` must stay valid and otherwise unaliased for `'a`.
    #[inline(always)]
    pub(crate) unsafe fn from_ptr(ptr: *mut L::Storage) -> Self {
        Self { ptr, _borrow: PhantomData }
    }
}

impl<L: AlternativeList> Own<L> {
    #[inline(always)]
    pub(crate) fn new(storage: MaybeUninit<L::Storage>) -> Self {
        Self { storage }
    }
}

/// Resolve one operand, then continue with `Rest`.
///
/// `Acc` is the cons-list of values resolved so far; `R` is the single result
/// type every combination must produce.
pub trait Dispatch<F, Acc, Rest, R> {
    /// # Safety
    /// `index` must be the live alternative of the cursor's storage.
    unsafe fn dispatch(self, index: usize, op: F, acc: Acc, rest: Rest) -> R;
}

// =============================================================================
// Shared
// =============================================================================

impl<'a, H, T, F, Acc, Rest, R> Dispatch<F, Acc, Rest, R> for Ref<'a, HCons<H, T>>
where
    H: 'a,
    T: AlternativeList,
    Acc: Push<&'a H>,
    Rest: Continue<F, <Acc as Push<&'a H>>::Out, R>,
    Ref<'a, T>: Dispatch<F, Acc, Rest, R>,
{
    #[inline(always)]
    unsafe fn dispatch(self, index: usize, op: F, acc: Acc, rest: Rest) -> R {
        unsafe {
            if index == 0 {
                let value: &'a H = &*Slot::head(self.ptr);
                rest.resume(op, acc.push(value))
            } else {
                Ref::<'a, T>::from_ptr(Slot::rest(self.ptr)).dispatch(index - 1, op, acc, rest)
            }
        }
    }
}

impl<F, Acc, Rest, R> Dispatch<F, Acc, Rest, R> for Ref<'_, HNil> {
    unsafe fn dispatch(self, index: usize, _: F, _: Acc, _: Rest) -> R {
        unreachable!("alternative index {index} out of range")
    }
}

// =============================================================================
// Exclusive
// =============================================================================

impl<'a, H, T, F, Acc, Rest, R> Dispatch<F, Acc, Rest, R> for Mut<'a, HCons<H, T>>
where
    H: 'a,
    T: AlternativeList,
    Acc: Push<&'a mut H>,
    Rest: Continue<F, <Acc as Push<&'a mut H>>::Out, R>,
    Mut<'a, T>: Dispatch<F, Acc, Rest, R>,
{
    #[inline(always)]
    unsafe fn dispatch(self, index: usize, op: F, acc: Acc, rest: Rest) -> R {
        unsafe {
            if index == 0 {
                let value: &'a mut H = &mut *Slot::head_mut(self.ptr);
                rest.resume(op, acc.push(value))
            } else {
                Mut::<'a, T>::from_ptr(Slot::rest_mut(self.ptr)).dispatch(index - 1, op, acc, rest)
            }
        }
    }
}

impl<F, Acc, Rest, R> Dispatch<F, Acc, Rest, R> for Mut<'_, HNil> {
    unsafe fn dispatch(self, index: usize, _: F, _: Acc, _: Rest) -> R {
        unreachable!("alternative index {index} out of range")
    }
}

// =============================================================================
// Owned
// =============================================================================

impl<H, T, F, Acc, Rest, R> Dispatch<F, Acc, Rest, R> for Own<HCons<H, T>>
where
    T: AlternativeList,
    Acc: Push<H>,
    Rest: Continue<F, <Acc as Push<H>>::Out, R>,
    Own<T>: Dispatch<F, Acc, Rest, R>,
{
    #[inline(always)]
    unsafe fn dispatch(self, index: usize, op: F, acc: Acc, rest: Rest) -> R {
        let base = self.storage.as_ptr();
        unsafe {
            if index == 0 {
                let value: H = ptr::read(Slot::head(base));
                rest.resume(op, acc.push(value))
            } else {
                let narrowed = ptr::read(Slot::rest(base).cast::<MaybeUninit<T::Storage>>());
                Own::<T>::new(narrowed).dispatch(index - 1, op, acc, rest)
            }
        }
    }
}

impl<F, Acc, Rest, R> Dispatch<F, Acc, Rest, R> for Own<HNil> {
    unsafe fn dispatch(self, index: usize, _: F, _: Acc, _: Rest) -> R {
        unreachable!("alternative index {index} out of range")
    }
}
