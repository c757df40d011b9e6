//! Recursive union layout.
//!
//! An alternative list `HCons<A, HCons<B, HCons<C, HNil>>>` is stored as
//!
//! ```text
//! Slot<A, Slot<B, Slot<C, Void>>>
//!   head: A        rest: Slot<B, ..>
//! ```
//!
//! `#[repr(C)]` pins every field to offset 0, so the union is exactly as large
//! and as aligned as its largest and most aligned alternative. Which field is
//! live is recorded outside the union, in the discriminant of
//! [`RawVariant`](super::RawVariant).

use core::mem::ManuallyDrop;
use core::ptr;

use crate::list::{HCons, HNil, IndexOf, Len, Peano, Reduce, S, Z};

/// One alternative's slot plus the union of all remaining ones.
#[repr(C)]
pub union Slot<H, R> {
    head: ManuallyDrop<H>,
    rest: ManuallyDrop<R>,
}

impl<H: Copy, R: Copy> Clone for Slot<H, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H: Copy, R: Copy> Copy for Slot<H, R> {}

impl<H, R> Slot<H, R> {
    /// # Safety
    /// `this` must point into a live allocation of `Self`.
    #[inline(always)]
    pub(crate) unsafe fn head(this: *const Self) -> *const H {
        unsafe { (&raw const (*this).head).cast() }
    }

    /// # Safety
    /// `this` must point into a live allocation of `Self`.
    #[inline(always)]
    pub(crate) unsafe fn head_mut(this: *mut Self) -> *mut H {
        unsafe { (&raw mut (*this).head).cast() }
    }

    /// # Safety
    /// `this` must point into a live allocation of `Self`.
    #[inline(always)]
    pub(crate) unsafe fn rest(this: *const Self) -> *const R {
        unsafe { (&raw const (*this).rest).cast() }
    }

    /// # Safety
    /// `this` must point into a live allocation of `Self`.
    #[inline(always)]
    pub(crate) unsafe fn rest_mut(this: *mut Self) -> *mut R {
        unsafe { (&raw mut (*this).rest).cast() }
    }
}

/// Terminator of the recursive union. Uninhabited: no index ever reaches it.
#[derive(Clone, Copy)]
pub enum Void {}

// =============================================================================
// AlternativeList
// =============================================================================

/// A type list that has a recursive union storage.
///
/// Indices used by the methods here are zero-based alternative positions,
/// not discriminants.
///
/// # Safety
/// `Storage` must be able to hold every alternative at offset 0, and
/// `drop_at` must drop exactly the alternative at `index`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an alternative list",
    note = "build alternative lists with `alts![A, B, ...]`"
)]
pub unsafe trait AlternativeList: Len + Reduce + Sized {
    type Storage;

    /// Drop the alternative at `index` in place.
    ///
    /// # Safety
    /// `storage` must hold a live alternative at `index`.
    unsafe fn drop_at(storage: *mut Self::Storage, index: usize);
}

unsafe impl AlternativeList for HNil {
    type Storage = Void;

    unsafe fn drop_at(_: *mut Void, index: usize) {
        unreachable!("alternative index {index} out of range")
    }
}

unsafe impl<H, T: AlternativeList> AlternativeList for HCons<H, T> {
    type Storage = Slot<H, T::Storage>;

    #[inline]
    unsafe fn drop_at(storage: *mut Self::Storage, index: usize) {
        unsafe {
            if index == 0 {
                ptr::drop_in_place(Slot::head_mut(storage));
            } else {
                T::drop_at(Slot::rest_mut(storage), index - 1);
            }
        }
    }
}

// =============================================================================
// Locate - pointer projection to one alternative
// =============================================================================

/// Projects the storage of a list onto the slot of alternative `T` at `I`.
///
/// # Safety
/// The returned pointers must address the slot of `T` inside `storage`.
pub unsafe trait Locate<T, I: Peano>: IndexOf<T, I> + AlternativeList {
    /// # Safety
    /// `storage` must point into a live allocation of `Self::Storage`.
    unsafe fn locate(storage: *const Self::Storage) -> *const T;

    /// # Safety
    /// `storage` must point into a live allocation of `Self::Storage`.
    unsafe fn locate_mut(storage: *mut Self::Storage) -> *mut T;
}

unsafe impl<T, Tail: AlternativeList> Locate<T, Z> for HCons<T, Tail> {
    #[inline(always)]
    unsafe fn locate(storage: *const Self::Storage) -> *const T {
        unsafe { Slot::head(storage) }
    }

    #[inline(always)]
    unsafe fn locate_mut(storage: *mut Self::Storage) -> *mut T {
        unsafe { Slot::head_mut(storage) }
    }
}

unsafe impl<H, Tail, T, N> Locate<T, S<N>> for HCons<H, Tail>
where
    N: Peano,
    Tail: Locate<T, N>,
{
    #[inline(always)]
    unsafe fn locate(storage: *const Self::Storage) -> *const T {
        unsafe { Tail::locate(Slot::rest(storage)) }
    }

    #[inline(always)]
    unsafe fn locate_mut(storage: *mut Self::Storage) -> *mut T {
        unsafe { Tail::locate_mut(Slot::rest_mut(storage)) }
    }
}
