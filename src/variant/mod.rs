//! # Layer 3: Containers
//!
//! - `general.rs`: [`Variant`], any alternatives, destroys its live value on
//!   drop, `Clone` when every alternative is.
//! - `trivial.rs`: [`TrivialVariant`], every alternative `Copy`; the
//!   container itself is `Copy` and never runs a destructor.
//!
//! Both share one API, generated below over their [`RawVariant`].

pub mod general;
pub mod trivial;

pub use general::Variant;
pub use trivial::TrivialVariant;

use crate::list::Peano;
use crate::storage::{AlternativeList, Locate, RawVariant};

/// Returned by `which()` for a valueless container.
pub const NONE: usize = usize::MAX;

/// Access to the discriminant and storage behind a container.
pub trait Container {
    type List: AlternativeList;

    fn as_raw(&self) -> &RawVariant<Self::List>;

    fn as_raw_mut(&mut self) -> &mut RawVariant<Self::List>;
}

/// `container.get_if()` that also accepts a missing container.
///
/// `None` when `container` is `None`, valueless, or holds another
/// alternative.
#[inline]
pub fn get_if<V, T, I>(container: Option<&V>) -> Option<&T>
where
    V: Container,
    I: Peano,
    V::List: Locate<T, I>,
{
    let raw = container?.as_raw();
    raw.holds::<T, I>().then(|| unsafe { &*raw.target::<T, I>() })
}

/// Mutable [`get_if`].
#[inline]
pub fn get_if_mut<V, T, I>(container: Option<&mut V>) -> Option<&mut T>
where
    V: Container,
    I: Peano,
    V::List: Locate<T, I>,
{
    let raw = container?.as_raw_mut();
    if raw.holds::<T, I>() { Some(unsafe { &mut *raw.target_mut::<T, I>() }) } else { None }
}

macro_rules! impl_variant_common {
    ($name:ident, $bound:path) => {
        impl<L: $bound> $name<L> {
            /// A container holding nothing. Never panics.
            #[inline]
            pub const fn valueless() -> Self {
                Self { raw: $crate::storage::RawVariant::valueless() }
            }

            /// Hold `value` as the alternative of type `T`.
            ///
            /// The alternative is chosen by exact type; `I` is inferred. A
            /// type that is not in the list, or occurs in it more than once,
            /// does not compile: use [`with_index`](Self::with_index) then.
            #[inline]
            pub fn new<T, I>(value: T) -> Self
            where
                I: $crate::list::Peano,
                L: $crate::storage::Locate<T, I>,
            {
                Self::new_with::<T, I, _>(|| value)
            }

            /// Hold the alternative of type `T` built by `f`.
            #[inline]
            pub fn new_with<T, I, F>(f: F) -> Self
            where
                I: $crate::list::Peano,
                L: $crate::storage::Locate<T, I>,
                F: FnOnce() -> T,
            {
                let mut this = Self::valueless();
                unsafe { this.raw.construct_with::<T, I, F>(f) };
                this
            }

            /// Hold `value` as the alternative at position `I`.
            #[inline]
            pub fn with_index<I>(value: $crate::list::AltAt<L, I>) -> Self
            where
                I: $crate::list::Peano,
                L: $crate::list::At<I> + $crate::storage::Locate<$crate::list::AltAt<L, I>, I>,
            {
                Self::new::<$crate::list::AltAt<L, I>, I>(value)
            }

            /// Construct the alternative selected by an in-place tag.
            #[inline]
            pub fn in_place<Tag, I>(_tag: Tag, value: Tag::Out) -> Self
            where
                I: $crate::list::Peano,
                Tag: $crate::tag::InPlace<L, I>,
                L: $crate::storage::Locate<Tag::Out, I>,
            {
                Self::new::<Tag::Out, I>(value)
            }

            /// Construct the alternative selected by an in-place tag from `f`.
            #[inline]
            pub fn in_place_with<Tag, I, F>(_tag: Tag, f: F) -> Self
            where
                I: $crate::list::Peano,
                Tag: $crate::tag::InPlace<L, I>,
                L: $crate::storage::Locate<Tag::Out, I>,
                F: FnOnce() -> Tag::Out,
            {
                Self::new_with::<Tag::Out, I, F>(f)
            }

            // -----------------------------------------------------------------
            // Introspection
            // -----------------------------------------------------------------

            /// Position of the live alternative, or [`NONE`](crate::NONE).
            #[inline]
            pub fn which(&self) -> usize {
                self.raw.index().unwrap_or($crate::variant::NONE)
            }

            #[inline]
            pub fn index(&self) -> Option<usize> {
                self.raw.index()
            }

            #[inline]
            pub fn is_valueless(&self) -> bool {
                self.raw.is_valueless()
            }

            /// Whether `T` is the live alternative.
            #[inline]
            pub fn holds<T, I>(&self) -> bool
            where
                I: $crate::list::Peano,
                L: $crate::storage::Locate<T, I>,
            {
                self.raw.holds::<T, I>()
            }

            // -----------------------------------------------------------------
            // Checked access
            // -----------------------------------------------------------------

            #[inline]
            pub fn get<T, I>(&self) -> Result<&T, $crate::InvalidAccess>
            where
                I: $crate::list::Peano,
                L: $crate::storage::Locate<T, I>,
            {
                self.get_if::<T, I>().ok_or($crate::InvalidAccess)
            }

            #[inline]
            pub fn get_mut<T, I>(&mut self) -> Result<&mut T, $crate::InvalidAccess>
            where
                I: $crate::list::Peano,
                L: $crate::storage::Locate<T, I>,
            {
                self.get_if_mut::<T, I>().ok_or($crate::InvalidAccess)
            }

            #[inline]
            pub fn get_at<I>(&self) -> Result<&$crate::list::AltAt<L, I>, $crate::InvalidAccess>
            where
                I: $crate::list::Peano,
                L: $crate::list::At<I> + $crate::storage::Locate<$crate::list::AltAt<L, I>, I>,
            {
                self.get::<$crate::list::AltAt<L, I>, I>()
            }

            #[inline]
            pub fn get_at_mut<I>(
                &mut self,
            ) -> Result<&mut $crate::list::AltAt<L, I>, $crate::InvalidAccess>
            where
                I: $crate::list::Peano,
                L: $crate::list::At<I> + $crate::storage::Locate<$crate::list::AltAt<L, I>, I>,
            {
                self.get_mut::<$crate::list::AltAt<L, I>, I>()
            }

            #[inline]
            pub fn get_if<T, I>(&self) -> Option<&T>
            where
                I: $crate::list::Peano,
                L: $crate::storage::Locate<T, I>,
            {
                $crate::variant::get_if::<Self, T, I>(Some(self))
            }

            #[inline]
            pub fn get_if_mut<T, I>(&mut self) -> Option<&mut T>
            where
                I: $crate::list::Peano,
                L: $crate::storage::Locate<T, I>,
            {
                $crate::variant::get_if_mut::<Self, T, I>(Some(self))
            }

            #[inline]
            pub fn get_if_at<I>(&self) -> Option<&$crate::list::AltAt<L, I>>
            where
                I: $crate::list::Peano,
                L: $crate::list::At<I> + $crate::storage::Locate<$crate::list::AltAt<L, I>, I>,
            {
                self.get_if::<$crate::list::AltAt<L, I>, I>()
            }

            #[inline]
            pub fn get_if_at_mut<I>(&mut self) -> Option<&mut $crate::list::AltAt<L, I>>
            where
                I: $crate::list::Peano,
                L: $crate::list::At<I> + $crate::storage::Locate<$crate::list::AltAt<L, I>, I>,
            {
                self.get_if_mut::<$crate::list::AltAt<L, I>, I>()
            }

            // -----------------------------------------------------------------
            // Unchecked access
            // -----------------------------------------------------------------

            /// Pointer to the slot of `T`, whether or not `T` is live.
            #[inline]
            pub fn target<T, I>(&self) -> *const T
            where
                I: $crate::list::Peano,
                L: $crate::storage::Locate<T, I>,
            {
                self.raw.target::<T, I>()
            }

            #[inline]
            pub fn target_mut<T, I>(&mut self) -> *mut T
            where
                I: $crate::list::Peano,
                L: $crate::storage::Locate<T, I>,
            {
                self.raw.target_mut::<T, I>()
            }

            /// # Safety
            /// `T` must be the live alternative.
            #[inline]
            pub unsafe fn get_unchecked<T, I>(&self) -> &T
            where
                I: $crate::list::Peano,
                L: $crate::storage::Locate<T, I>,
            {
                debug_assert!(self.holds::<T, I>());
                unsafe { &*self.target::<T, I>() }
            }

            /// # Safety
            /// `T` must be the live alternative.
            #[inline]
            pub unsafe fn get_unchecked_mut<T, I>(&mut self) -> &mut T
            where
                I: $crate::list::Peano,
                L: $crate::storage::Locate<T, I>,
            {
                debug_assert!(self.holds::<T, I>());
                unsafe { &mut *self.target_mut::<T, I>() }
            }

            // -----------------------------------------------------------------
            // Mutation
            // -----------------------------------------------------------------

            /// Assign `value` as the alternative of type `T`.
            ///
            /// If `T` is already live it is assigned in place. Otherwise the
            /// old alternative is destroyed first.
            #[inline]
            pub fn assign<T, I>(&mut self, value: T) -> &mut T
            where
                I: $crate::list::Peano,
                L: $crate::storage::Locate<T, I>,
            {
                self.raw.assign_with::<T, I, _>(|| value)
            }

            /// Assign the alternative of type `T` built by `f`.
            ///
            /// Same live alternative: `f` runs first, and a panic in `f`
            /// leaves the old value untouched. Different alternative: the old
            /// one is destroyed, then `f` runs; a panic in `f` leaves the
            /// container valueless.
            #[inline]
            pub fn assign_with<T, I, F>(&mut self, f: F) -> &mut T
            where
                I: $crate::list::Peano,
                L: $crate::storage::Locate<T, I>,
                F: FnOnce() -> T,
            {
                self.raw.assign_with::<T, I, F>(f)
            }

            /// Destroy the live alternative, then hold `value`.
            #[inline]
            pub fn emplace<T, I>(&mut self, value: T) -> &mut T
            where
                I: $crate::list::Peano,
                L: $crate::storage::Locate<T, I>,
            {
                self.raw.emplace_with::<T, I, _>(|| value)
            }

            /// Destroy the live alternative, then hold the value built by `f`.
            ///
            /// Afterwards the container holds either the new value or, if `f`
            /// panicked, nothing. Never the old value.
            #[inline]
            pub fn emplace_with<T, I, F>(&mut self, f: F) -> &mut T
            where
                I: $crate::list::Peano,
                L: $crate::storage::Locate<T, I>,
                F: FnOnce() -> T,
            {
                self.raw.emplace_with::<T, I, F>(f)
            }

            /// [`emplace`](Self::emplace) by position.
            #[inline]
            pub fn emplace_at<I>(
                &mut self,
                value: $crate::list::AltAt<L, I>,
            ) -> &mut $crate::list::AltAt<L, I>
            where
                I: $crate::list::Peano,
                L: $crate::list::At<I> + $crate::storage::Locate<$crate::list::AltAt<L, I>, I>,
            {
                self.emplace::<$crate::list::AltAt<L, I>, I>(value)
            }

            /// [`emplace_with`](Self::emplace_with) selected by an in-place tag.
            #[inline]
            pub fn emplace_in_place<Tag, I, F>(&mut self, _tag: Tag, f: F) -> &mut Tag::Out
            where
                I: $crate::list::Peano,
                Tag: $crate::tag::InPlace<L, I>,
                L: $crate::storage::Locate<Tag::Out, I>,
                F: FnOnce() -> Tag::Out,
            {
                self.emplace_with::<Tag::Out, I, F>(f)
            }

            /// Destroy the live alternative, if any.
            #[inline]
            pub fn reset(&mut self) {
                self.raw.destroy();
            }

            /// Move the whole container out, leaving `self` valueless.
            #[inline]
            pub fn take(&mut self) -> Self {
                core::mem::replace(self, Self::valueless())
            }

            /// Exchange contents with `other`.
            ///
            /// Moves are bitwise in Rust, so this cannot fail and never
            /// leaves either side valueless.
            #[inline]
            pub fn swap(&mut self, other: &mut Self) {
                core::mem::swap(self, other);
            }

            /// Move the live `T` out, or give the container back.
            #[inline]
            pub fn into_inner<T, I>(self) -> Result<T, Self>
            where
                I: $crate::list::Peano,
                L: $crate::storage::Locate<T, I>,
            {
                if !self.holds::<T, I>() {
                    return Err(self);
                }
                let mut this = core::mem::ManuallyDrop::new(self);
                Ok(unsafe { this.raw.take_unchecked::<T, I>() })
            }

            // -----------------------------------------------------------------
            // Visitation
            // -----------------------------------------------------------------

            /// [`apply`](crate::apply) with `self` as the only operand.
            #[inline]
            pub fn visit<'a, F, R>(&'a self, op: F) -> Result<R, $crate::InvalidAccess>
            where
                (&'a Self,): $crate::apply::Operands<F, R>,
            {
                $crate::apply::apply(op, (self,))
            }

            #[inline]
            pub fn visit_mut<'a, F, R>(&'a mut self, op: F) -> Result<R, $crate::InvalidAccess>
            where
                (&'a mut Self,): $crate::apply::Operands<F, R>,
            {
                $crate::apply::apply(op, (self,))
            }

            #[inline]
            pub fn into_visit<F, R>(self, op: F) -> Result<R, $crate::InvalidAccess>
            where
                (Self,): $crate::apply::Operands<F, R>,
            {
                $crate::apply::apply(op, (self,))
            }
        }

        impl<L: $bound> $crate::variant::Container for $name<L> {
            type List = L;

            #[inline(always)]
            fn as_raw(&self) -> &$crate::storage::RawVariant<L> {
                &self.raw
            }

            #[inline(always)]
            fn as_raw_mut(&mut self) -> &mut $crate::storage::RawVariant<L> {
                &mut self.raw
            }
        }

        impl<L: $bound> Default for $name<L> {
            /// Valueless.
            fn default() -> Self {
                Self::valueless()
            }
        }

        // ---------------------------------------------------------------------
        // Comparison, hashing, formatting
        // ---------------------------------------------------------------------

        impl<L> PartialEq for $name<L>
        where
            L: $bound + $crate::storage::PartialEqList,
        {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                self.raw.eq_raw(&other.raw)
            }
        }

        impl<L> Eq for $name<L> where L: $bound + $crate::storage::EqList {}

        impl<L> PartialOrd for $name<L>
        where
            L: $bound + $crate::storage::PartialOrdList,
        {
            #[inline]
            fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
                self.raw.partial_cmp_raw(&other.raw)
            }
        }

        impl<L> Ord for $name<L>
        where
            L: $bound + $crate::storage::OrdList,
        {
            #[inline]
            fn cmp(&self, other: &Self) -> core::cmp::Ordering {
                self.raw.cmp_raw(&other.raw)
            }
        }

        impl<L> core::hash::Hash for $name<L>
        where
            L: $bound + $crate::storage::HashList,
        {
            #[inline]
            fn hash<Hs: core::hash::Hasher>(&self, state: &mut Hs) {
                self.raw.hash_raw(state)
            }
        }

        impl<L> core::fmt::Debug for $name<L>
        where
            L: $bound + $crate::storage::DebugList,
        {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                self.raw.fmt_raw(stringify!($name), f)
            }
        }

        // ---------------------------------------------------------------------
        // Apply operands
        // ---------------------------------------------------------------------

        // SAFETY: `index` and the cursor both come from `self.raw`.
        unsafe impl<'a, L: $bound> $crate::apply::Operand for &'a $name<L> {
            type Cursor = $crate::apply::Ref<'a, L>;

            #[inline(always)]
            fn index(&self) -> Option<usize> {
                self.raw.index()
            }

            #[inline(always)]
            fn into_cursor(self) -> Self::Cursor {
                unsafe { $crate::apply::Ref::from_ptr(self.raw.as_ptr()) }
            }
        }

        // SAFETY: `index` and the cursor both come from `self.raw`.
        unsafe impl<'a, L: $bound> $crate::apply::Operand for &'a mut $name<L> {
            type Cursor = $crate::apply::Mut<'a, L>;

            #[inline(always)]
            fn index(&self) -> Option<usize> {
                self.raw.index()
            }

            #[inline(always)]
            fn into_cursor(self) -> Self::Cursor {
                unsafe { $crate::apply::Mut::from_ptr(self.raw.as_mut_ptr()) }
            }
        }

        // SAFETY: `index` is read before `take_storage` clears the tag.
        unsafe impl<L: $bound> $crate::apply::Operand for $name<L> {
            type Cursor = $crate::apply::Own<L>;

            #[inline(always)]
            fn index(&self) -> Option<usize> {
                self.raw.index()
            }

            #[inline(always)]
            fn into_cursor(self) -> Self::Cursor {
                let mut this = core::mem::ManuallyDrop::new(self);
                $crate::apply::Own::new(this.raw.take_storage())
            }
        }
    };
}

pub(crate) use impl_variant_common;
