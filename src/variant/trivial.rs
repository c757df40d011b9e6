//! Trivial mode: every alternative is `Copy`, so the container is too.

use crate::storage::{CopyList, RawVariant};

/// [`Variant`](super::Variant) for lists whose alternatives are all `Copy`.
///
/// Copying, assigning and dropping are plain bit operations: there is no
/// `Drop` impl and the container is itself `Copy`.
///
/// ```
/// use altvariant::{alts, TrivialVariant};
///
/// let a = TrivialVariant::<alts![u32, f64]>::new(1.5_f64);
/// let b = a;
/// assert_eq!(a, b);
/// ```
pub struct TrivialVariant<L: CopyList> {
    raw: RawVariant<L>,
}

super::impl_variant_common!(TrivialVariant, CopyList);

impl<L: CopyList> Clone for TrivialVariant<L> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<L: CopyList> Copy for TrivialVariant<L> {}

impl<L: CopyList> TrivialVariant<L> {
    #[inline(always)]
    pub(crate) fn from_raw(raw: RawVariant<L>) -> Self {
        Self { raw }
    }

    #[inline(always)]
    pub(crate) fn into_raw(self) -> RawVariant<L> {
        self.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alts;

    type Num = alts![u8, i64, f32];

    #[test]
    fn copies_are_independent() {
        let mut a = TrivialVariant::<Num>::new(5_i64);
        let b = a;
        a.assign(2.0_f32);
        assert_eq!(a.which(), 2);
        assert_eq!(b.get::<i64, _>(), Ok(&5));
    }

    #[test]
    fn needs_no_drop() {
        assert!(!core::mem::needs_drop::<TrivialVariant<Num>>());
    }

    #[test]
    fn same_layout_rules_as_general_mode() {
        assert_eq!(
            core::mem::size_of::<TrivialVariant<Num>>(),
            core::mem::size_of::<crate::Variant<Num>>()
        );
        assert_eq!(core::mem::size_of::<TrivialVariant<Num>>(), 16);
    }

    #[test]
    fn reset_and_default() {
        let mut v = TrivialVariant::<Num>::new(1_u8);
        v.reset();
        assert!(v.is_valueless());
        assert_eq!(v, TrivialVariant::default());
    }
}
