//! General mode: destroys the live alternative on drop.

use crate::storage::{AlternativeList, CloneList, CopyList, RawVariant};

use super::TrivialVariant;

/// A possibly-empty container holding at most one value of one of the types
/// in `L`.
///
/// The value lives inline: `size_of::<Variant<L>>()` is the size of the
/// largest alternative plus the discriminant, rounded to the strictest
/// alignment. No allocation ever happens.
///
/// ```
/// use altvariant::{alts, Variant};
///
/// let mut v = Variant::<alts![i32, String]>::new(42_i32);
/// assert_eq!(v.which(), 0);
/// assert_eq!(v.get::<i32, _>(), Ok(&42));
///
/// v.assign(String::from("hello"));
/// assert_eq!(v.which(), 1);
/// assert!(v.get::<i32, _>().is_err());
/// ```
///
/// A container is *valueless* when default-constructed, after [`reset`] or
/// [`take`], or when building a new alternative panicked after the old one
/// was already destroyed. Accessors report that state rather than
/// misbehaving.
///
/// [`reset`]: Variant::reset
/// [`take`]: Variant::take
pub struct Variant<L: AlternativeList> {
    raw: RawVariant<L>,
}

super::impl_variant_common!(Variant, AlternativeList);

impl<L: AlternativeList> Drop for Variant<L> {
    #[inline]
    fn drop(&mut self) {
        self.raw.destroy();
    }
}

impl<L: CloneList> Clone for Variant<L> {
    fn clone(&self) -> Self {
        Self { raw: self.raw.clone_raw() }
    }

    /// Assigns in place when both sides hold the same alternative.
    fn clone_from(&mut self, source: &Self) {
        self.raw.clone_from_raw(&source.raw);
    }
}

impl<L: CopyList> From<TrivialVariant<L>> for Variant<L> {
    fn from(value: TrivialVariant<L>) -> Self {
        Self { raw: value.into_raw() }
    }
}

impl<L: CopyList> Variant<L> {
    /// Same value in trivial mode.
    pub fn into_trivial(self) -> TrivialVariant<L> {
        let this = core::mem::ManuallyDrop::new(self);
        TrivialVariant::from_raw(this.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alts;
    use crate::list::{D0, D1, D2};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::string::{String, ToString};
    use std::vec::Vec;

    struct Logged(&'static str, Rc<RefCell<Vec<&'static str>>>);

    impl Drop for Logged {
        fn drop(&mut self) {
            self.1.borrow_mut().push(self.0);
        }
    }

    #[test]
    fn default_is_valueless() {
        let v = Variant::<alts![i32, String]>::default();
        assert!(v.is_valueless());
        assert_eq!(v.which(), crate::NONE);
        assert_eq!(v.index(), None);
    }

    #[test]
    fn drop_destroys_live_alternative() {
        let log = Rc::new(RefCell::new(Vec::new()));
        {
            let _v = Variant::<alts![u8, Logged]>::new(Logged("a", log.clone()));
        }
        assert_eq!(*log.borrow(), ["a"]);
    }

    #[test]
    fn emplace_destroys_even_same_alternative() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut v = Variant::<alts![u8, Logged]>::new(Logged("old", log.clone()));
        v.emplace(Logged("new", log.clone()));
        assert_eq!(*log.borrow(), ["old"]);
        drop(v);
        assert_eq!(*log.borrow(), ["old", "new"]);
    }

    #[test]
    fn take_leaves_valueless() {
        let mut v = Variant::<alts![i32, String]>::new("x".to_string());
        let moved = v.take();
        assert!(v.is_valueless());
        assert_eq!(moved.get::<String, _>().map(String::as_str), Ok("x"));
    }

    #[test]
    fn into_inner_returns_container_on_mismatch() {
        let v = Variant::<alts![i32, String]>::new(3_i32);
        let v = v.into_inner::<String, _>().unwrap_err();
        assert_eq!(v.into_inner::<i32, _>().ok(), Some(3));
    }

    #[test]
    fn duplicate_types_by_index() {
        let mut v = Variant::<alts![u8, u8, u16]>::with_index::<D1>(7);
        assert_eq!(v.which(), 1);
        assert_eq!(v.get_at::<D1>(), Ok(&7));
        assert!(v.get_at::<D0>().is_err());
        *v.emplace_at::<D0>(1) += 1;
        assert_eq!(v.get_if_at::<D0>(), Some(&2));
        assert_eq!(v.get_at::<D2>().ok(), None);
    }

    #[test]
    fn clone_preserves_alternative() {
        let v = Variant::<alts![i32, String]>::new("abc".to_string());
        let w = v.clone();
        assert_eq!(v, w);
        assert_eq!(w.which(), 1);

        let empty = Variant::<alts![i32, String]>::valueless();
        assert!(empty.clone().is_valueless());
    }

    #[test]
    fn trivial_round_trip() {
        let v = Variant::<alts![u8, f64]>::new(1.5_f64);
        let t = v.into_trivial();
        let back = Variant::from(t);
        assert_eq!(back.get::<f64, _>(), Ok(&1.5));
    }
}
