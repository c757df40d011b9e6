//! Container behavior: construction, access, emplace, panic safety, equality.

use std::cell::RefCell;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::rc::Rc;

use altvariant::{InvalidAccess, NONE, Variant, alts, apply};

type IntOrString = alts![i32, String];

type Log = Rc<RefCell<Vec<&'static str>>>;

struct A(Log);

impl Drop for A {
    fn drop(&mut self) {
        self.0.borrow_mut().push("drop A");
    }
}

struct B;

impl B {
    fn build(log: &Log) -> B {
        log.borrow_mut().push("build B");
        panic!("B cannot be built");
    }
}

// =============================================================================
// Construction and access
// =============================================================================

#[test]
fn test_construct_selects_exact_type() {
    let v = Variant::<IntOrString>::new(42_i32);

    assert_eq!(v.which(), 0);
    assert_eq!(v.get::<i32, _>(), Ok(&42));
    assert_eq!(v.get::<String, _>(), Err(InvalidAccess));
}

#[test]
fn test_valueless_access_fails() {
    let mut v = Variant::<IntOrString>::valueless();

    assert_eq!(v.which(), NONE);
    assert_eq!(v.get::<i32, _>(), Err(InvalidAccess));
    assert_eq!(v.get_mut::<String, _>(), Err(InvalidAccess));
    assert_eq!(v.get_if::<i32, _>(), None);
    assert!(v.into_inner::<i32, _>().is_err());
}

#[test]
fn test_get_mut_edits_in_place() {
    let mut v = Variant::<IntOrString>::new(String::from("ab"));
    v.get_mut::<String, _>().unwrap().push('c');
    assert_eq!(v.get::<String, _>().unwrap(), "abc");
}

// =============================================================================
// Emplace
// =============================================================================

#[test]
fn test_emplace_destroys_old_exactly_once() {
    let log: Log = Rc::default();
    let mut v = Variant::<alts![i32, A]>::new(A(log.clone()));

    v.emplace(42_i32);

    assert_eq!(v.which(), 0);
    assert_eq!(v.get::<i32, _>(), Ok(&42));
    drop(v);
    assert_eq!(*log.borrow(), ["drop A"]);
}

#[test]
fn test_emplace_from_empty_string() {
    let mut v = Variant::<IntOrString>::new(String::new());
    v.emplace(42_i32);
    assert_eq!(v.which(), 0);
    assert_eq!(v.get::<i32, _>(), Ok(&42));
}

// =============================================================================
// Panic safety
// =============================================================================

#[test]
fn test_panicking_assignment_leaves_valueless() {
    let log: Log = Rc::default();
    let mut v = Variant::<alts![A, B]>::new(A(log.clone()));

    let result = catch_unwind(AssertUnwindSafe(|| {
        v.assign_with(|| B::build(&log));
    }));

    assert!(result.is_err());
    assert_eq!(v.which(), NONE);
    assert!(v.is_valueless());
    // A went first, then B's constructor ran and panicked.
    assert_eq!(*log.borrow(), ["drop A", "build B"]);

    drop(v);
    assert_eq!(log.borrow().len(), 2);
}

#[test]
fn test_panicking_same_alternative_assignment_keeps_value() {
    let mut v = Variant::<IntOrString>::new(String::from("kept"));

    let result = catch_unwind(AssertUnwindSafe(|| {
        v.assign_with::<String, _, _>(|| panic!("no"));
    }));

    assert!(result.is_err());
    assert_eq!(v.get::<String, _>().map(String::as_str), Ok("kept"));
}

#[test]
fn test_recovers_after_valueless() {
    let mut v = Variant::<IntOrString>::new(1_i32);
    let _ = catch_unwind(AssertUnwindSafe(|| {
        v.emplace_with::<String, _, _>(|| panic!("no"));
    }));
    assert!(v.is_valueless());

    v.assign(7_i32);
    assert_eq!(v.get::<i32, _>(), Ok(&7));
}

// =============================================================================
// Apply rejects valueless operands
// =============================================================================

#[test]
fn test_apply_with_valueless_operand_skips_operation() {
    let v1 = Variant::<IntOrString>::valueless();
    let v2 = Variant::<IntOrString>::new(1_i32);
    let called = RefCell::new(false);

    struct Touch<'a>(&'a RefCell<bool>);

    impl<X, Y> altvariant::Operation<(X, Y)> for Touch<'_> {
        type Output = ();
        fn call(self, _: (X, Y)) {
            *self.0.borrow_mut() = true;
        }
    }

    assert_eq!(apply(Touch(&called), (&v1, &v2)), Err(InvalidAccess));
    assert!(!*called.borrow());
}

// =============================================================================
// Equality
// =============================================================================

#[test]
fn test_equality_requires_same_alternative() {
    let v1 = Variant::<IntOrString>::new(42_i32);
    let v2 = Variant::<IntOrString>::new(42_i32);
    let v3 = Variant::<IntOrString>::new(String::from("42"));

    assert_eq!(v1, v2);
    assert_eq!(v2, v1);
    assert_ne!(v1, v3);
    assert_ne!(v3, v1);
    assert_eq!(Variant::<IntOrString>::valueless(), Variant::valueless());
    assert_ne!(v1, Variant::valueless());
}

#[test]
fn test_debug_output() {
    let v = Variant::<IntOrString>::new(5_i32);
    assert_eq!(format!("{v:?}"), "Variant(5)");
    assert_eq!(format!("{:?}", Variant::<IntOrString>::valueless()), "Variant(<valueless>)");
}
