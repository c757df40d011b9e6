//! In-place tags.
//!
//! Zero-sized values that pick an alternative for construction or emplace
//! explicitly, by position (`InPlaceIndex<I>`) or by type (`InPlaceType<T>`),
//! bypassing type-directed selection.

use core::fmt;
use core::marker::PhantomData;

use crate::list::{At, IndexOf, Peano};

/// Select the alternative at position `I`.
pub struct InPlaceIndex<I>(PhantomData<I>);

/// Select the alternative of type `T`.
pub struct InPlaceType<T>(PhantomData<fn() -> T>);

/// `InPlaceIndex::<I>` as a value.
pub const fn in_place_index<I: Peano>() -> InPlaceIndex<I> {
    InPlaceIndex(PhantomData)
}

/// `InPlaceType::<T>` as a value.
pub const fn in_place_type<T>() -> InPlaceType<T> {
    InPlaceType(PhantomData)
}

macro_rules! impl_marker_traits {
    ($name:ident<$param:ident>, $label:literal) => {
        impl<$param> Clone for $name<$param> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<$param> Copy for $name<$param> {}

        impl<$param> Default for $name<$param> {
            fn default() -> Self {
                Self(PhantomData)
            }
        }

        impl<$param> fmt::Debug for $name<$param> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, "<{}>"), core::any::type_name::<$param>())
            }
        }
    };
}

impl_marker_traits!(InPlaceIndex<I>, "InPlaceIndex");
impl_marker_traits!(InPlaceType<T>, "InPlaceType");

/// Resolves a tag against alternative list `L` to an alternative type and
/// its position `I`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not select an alternative of `{L}`",
    label = "no matching alternative"
)]
pub trait InPlace<L, I: Peano> {
    type Out;
}

impl<L, I> InPlace<L, I> for InPlaceIndex<I>
where
    I: Peano,
    L: At<I>,
{
    type Out = <L as At<I>>::Out;
}

impl<L, T, I> InPlace<L, I> for InPlaceType<T>
where
    I: Peano,
    L: IndexOf<T, I>,
{
    type Out = T;
}
