//! Alternative list nodes.

use core::marker::PhantomData;

/// Empty alternative list.
pub struct HNil;

/// Alternative list cons cell: `H` followed by the list `T`.
pub struct HCons<H, T>(PhantomData<(H, T)>);

/// Build an alternative list type.
///
/// ```
/// use altvariant::{alts, HCons, HNil};
///
/// type L = alts![u8, String];
/// let _: Option<L> = None::<HCons<u8, HCons<String, HNil>>>;
/// ```
#[macro_export]
macro_rules! alts {
    () => { $crate::list::HNil };
    ($head:ty $(, $rest:ty)* $(,)?) => {
        $crate::list::HCons<$head, $crate::alts![$($rest),*]>
    };
}
