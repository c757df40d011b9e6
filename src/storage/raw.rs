//! Discriminant plus storage region: the engine under both container modes.
//!
//! Invariant: `tag == 0` means nothing in `storage` is live; `tag == k + 1`
//! means exactly alternative `k` is live. The tag is cleared *before* a live
//! alternative is dropped and set *after* a new one is fully written, so a
//! panic at any point leaves the tag naming either a live region or nothing.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::mem::MaybeUninit;
use core::ptr;

use super::caps::{CloneList, DebugList, HashList, OrdList, PartialEqList, PartialOrdList};
use super::slot::{AlternativeList, Locate};
use crate::list::Peano;
use crate::trace::ConstructGuard;

/// Value fed to the hasher by a valueless container.
pub const VALUELESS_HASH: u64 = 0x9e37_79b9_7f4a_7c15;

/// Discriminant and recursive union storage.
pub struct RawVariant<L: AlternativeList> {
    tag: u8,
    storage: MaybeUninit<L::Storage>,
}

impl<L: AlternativeList<Storage: Copy>> Clone for RawVariant<L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L: AlternativeList<Storage: Copy>> Copy for RawVariant<L> {}

impl<L: AlternativeList> RawVariant<L> {
    /// Discriminant 0.
    #[inline(always)]
    pub const fn valueless() -> Self {
        const {
            assert!(
                L::LEN < u8::MAX as usize,
                "alternative lists are limited to 254 alternatives"
            )
        };
        Self { tag: 0, storage: MaybeUninit::uninit() }
    }

    #[inline(always)]
    pub fn discriminant(&self) -> u8 {
        self.tag
    }

    /// Zero-based index of the live alternative.
    #[inline(always)]
    pub fn index(&self) -> Option<usize> {
        (self.tag as usize).checked_sub(1)
    }

    #[inline(always)]
    pub fn is_valueless(&self) -> bool {
        self.tag == 0
    }

    #[inline(always)]
    pub fn holds<T, I: Peano>(&self) -> bool
    where
        L: Locate<T, I>,
    {
        self.tag as usize == I::VALUE + 1
    }

    #[inline(always)]
    pub fn as_ptr(&self) -> *const L::Storage {
        self.storage.as_ptr()
    }

    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut L::Storage {
        self.storage.as_mut_ptr()
    }

    /// Pointer to the slot of `T`, live or not.
    #[inline(always)]
    pub fn target<T, I: Peano>(&self) -> *const T
    where
        L: Locate<T, I>,
    {
        unsafe { L::locate(self.as_ptr()) }
    }

    #[inline(always)]
    pub fn target_mut<T, I: Peano>(&mut self) -> *mut T
    where
        L: Locate<T, I>,
    {
        unsafe { L::locate_mut(self.as_mut_ptr()) }
    }

    /// Take the storage out by value, leaving `self` valueless.
    #[inline(always)]
    pub(crate) fn take_storage(&mut self) -> MaybeUninit<L::Storage> {
        self.tag = 0;
        unsafe { ptr::read(&self.storage) }
    }

    // =========================================================================
    // Construct / destroy
    // =========================================================================

    /// Build the alternative `T` from `f` into empty storage.
    ///
    /// `f` runs before anything is written, so a panic in `f` leaves the
    /// storage untouched and still valueless.
    ///
    /// # Safety
    /// `self` must be valueless.
    #[inline]
    pub unsafe fn construct_with<T, I: Peano, F>(&mut self, f: F) -> &mut T
    where
        L: Locate<T, I>,
        F: FnOnce() -> T,
    {
        debug_assert!(self.is_valueless());
        let value = f();
        let slot = self.target_mut::<T, I>();
        unsafe {
            ptr::write(slot, value);
            self.tag = (I::VALUE + 1) as u8;
            &mut *slot
        }
    }

    /// Drop the live alternative, if any. Afterwards `self` is valueless.
    #[inline]
    pub fn destroy(&mut self) {
        let index = self.index();
        self.tag = 0;
        if L::NEEDS_DROP {
            if let Some(index) = index {
                unsafe { L::drop_at(self.as_mut_ptr(), index) };
            }
        }
    }

    /// Destroy the current alternative, then build `T` from `f`.
    ///
    /// If `f` panics the container stays valueless: the old value is already
    /// gone and the new one never existed.
    #[inline]
    pub fn emplace_with<T, I: Peano, F>(&mut self, f: F) -> &mut T
    where
        L: Locate<T, I>,
        F: FnOnce() -> T,
    {
        self.destroy();
        let guard = ConstructGuard::new(I::VALUE);
        let slot = unsafe { self.construct_with::<T, I, F>(f) };
        guard.disarm();
        slot
    }

    /// Assign a value of `T`.
    ///
    /// When `T` is already live it is assigned in place and the old value is
    /// dropped by plain assignment; `f` runs first, so a panic in `f` leaves
    /// the old value intact. Otherwise this is [`emplace_with`](Self::emplace_with).
    #[inline]
    pub fn assign_with<T, I: Peano, F>(&mut self, f: F) -> &mut T
    where
        L: Locate<T, I>,
        F: FnOnce() -> T,
    {
        if self.holds::<T, I>() {
            let value = f();
            let slot = unsafe { &mut *self.target_mut::<T, I>() };
            *slot = value;
            slot
        } else {
            self.emplace_with::<T, I, F>(f)
        }
    }

    /// Move the live `T` out, leaving `self` valueless.
    ///
    /// # Safety
    /// `T` at `I` must be live.
    #[inline]
    pub unsafe fn take_unchecked<T, I: Peano>(&mut self) -> T
    where
        L: Locate<T, I>,
    {
        debug_assert!(self.holds::<T, I>());
        self.tag = 0;
        unsafe { ptr::read(self.target::<T, I>()) }
    }

    // =========================================================================
    // Copy construction / assignment
    // =========================================================================

    /// Copy-construct from `source`.
    ///
    /// A valueless source yields a valueless result. A panicking `clone`
    /// leaves the result valueless.
    pub fn clone_raw(&self) -> Self
    where
        L: CloneList,
    {
        let mut out = Self::valueless();
        if let Some(index) = self.index() {
            let guard = ConstructGuard::new(index);
            unsafe { L::clone_at(self.as_ptr(), out.as_mut_ptr(), index) };
            guard.disarm();
            out.tag = self.tag;
        }
        out
    }

    /// Copy-assign from `source`.
    ///
    /// Same live alternative on both sides: `Clone::clone_from` in place.
    /// Otherwise destroy, then clone; a panicking `clone` leaves `self`
    /// valueless.
    pub fn clone_from_raw(&mut self, source: &Self)
    where
        L: CloneList,
    {
        match (self.index(), source.index()) {
            (Some(mine), Some(theirs)) if mine == theirs => unsafe {
                L::clone_from_at(self.as_mut_ptr(), source.as_ptr(), mine);
            },
            (_, theirs) => {
                self.destroy();
                if let Some(index) = theirs {
                    let guard = ConstructGuard::new(index);
                    unsafe { L::clone_at(source.as_ptr(), self.as_mut_ptr(), index) };
                    guard.disarm();
                    self.tag = source.tag;
                }
            }
        }
    }

    // =========================================================================
    // Comparison / hashing / formatting
    // =========================================================================

    pub fn eq_raw(&self, other: &Self) -> bool
    where
        L: PartialEqList,
    {
        if self.tag != other.tag {
            return false;
        }
        match self.index() {
            None => true,
            Some(index) => unsafe { L::eq_at(self.as_ptr(), other.as_ptr(), index) },
        }
    }

    /// Valueless first, then by index, then by the alternative's own order.
    pub fn partial_cmp_raw(&self, other: &Self) -> Option<Ordering>
    where
        L: PartialOrdList,
    {
        match self.tag.cmp(&other.tag) {
            Ordering::Equal => match self.index() {
                None => Some(Ordering::Equal),
                Some(index) => unsafe { L::partial_cmp_at(self.as_ptr(), other.as_ptr(), index) },
            },
            ordering => Some(ordering),
        }
    }

    pub fn cmp_raw(&self, other: &Self) -> Ordering
    where
        L: OrdList,
    {
        self.tag.cmp(&other.tag).then_with(|| match self.index() {
            None => Ordering::Equal,
            Some(index) => unsafe { L::cmp_at(self.as_ptr(), other.as_ptr(), index) },
        })
    }

    /// The discriminant is not mixed in: a live value hashes exactly as the
    /// value itself.
    pub fn hash_raw<Hs: Hasher>(&self, state: &mut Hs)
    where
        L: HashList,
    {
        match self.index() {
            None => VALUELESS_HASH.hash(state),
            Some(index) => unsafe { L::hash_at(self.as_ptr(), index, state) },
        }
    }

    pub fn fmt_raw(&self, name: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result
    where
        L: DebugList,
    {
        struct Live<'a, L: DebugList>(&'a RawVariant<L>, usize);

        impl<L: DebugList> fmt::Debug for Live<'_, L> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                unsafe { L::fmt_at(self.0.as_ptr(), self.1, f) }
            }
        }

        match self.index() {
            None => write!(f, "{name}(<valueless>)"),
            Some(index) => f.debug_tuple(name).field(&Live(self, index)).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::{D0, D1, D2};
    use std::cell::Cell;
    use std::rc::Rc;
    use std::string::{String, ToString};

    type L = crate::alts![u32, String, Counted];

    struct Counted(Rc<Cell<u32>>);

    impl Drop for Counted {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn drop_all(mut raw: RawVariant<L>) {
        raw.destroy();
    }

    #[test]
    fn construct_sets_tag_after_write() {
        let mut raw = RawVariant::<L>::valueless();
        assert_eq!(raw.discriminant(), 0);
        unsafe { raw.construct_with::<String, D1, _>(|| "x".to_string()) };
        assert_eq!(raw.discriminant(), 2);
        assert_eq!(raw.index(), Some(1));
        drop_all(raw);
    }

    #[test]
    fn destroy_runs_destructor_once_and_resets() {
        let drops = Rc::new(Cell::new(0));
        let mut raw = RawVariant::<L>::valueless();
        raw.emplace_with::<Counted, D2, _>(|| Counted(drops.clone()));
        raw.destroy();
        assert!(raw.is_valueless());
        raw.destroy();
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn panicking_emplace_leaves_valueless() {
        let drops = Rc::new(Cell::new(0));
        let mut raw = RawVariant::<L>::valueless();
        raw.emplace_with::<Counted, D2, _>(|| Counted(drops.clone()));

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            raw.emplace_with::<u32, D0, _>(|| panic!("no"));
        }));
        assert!(result.is_err());
        assert!(raw.is_valueless());
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn same_alternative_assignment_keeps_old_value_on_panic() {
        let mut raw = RawVariant::<L>::valueless();
        raw.emplace_with::<String, D1, _>(|| "kept".to_string());

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            raw.assign_with::<String, D1, _>(|| panic!("no"));
        }));
        assert!(result.is_err());
        assert_eq!(unsafe { &*raw.target::<String, D1>() }, "kept");
        drop_all(raw);
    }

    #[test]
    fn clone_from_reuses_live_alternative() {
        let mut a = RawVariant::<crate::alts![u32, String]>::valueless();
        let mut b = RawVariant::<crate::alts![u32, String]>::valueless();
        a.emplace_with::<String, D1, _>(|| String::with_capacity(64));
        b.emplace_with::<String, D1, _>(|| "abc".to_string());

        let before = unsafe { (*a.target::<String, D1>()).as_ptr() };
        a.clone_from_raw(&b);
        let after = unsafe { (*a.target::<String, D1>()).as_ptr() };
        assert_eq!(before, after);
        assert!(a.eq_raw(&b));

        a.destroy();
        b.destroy();
    }
}
