//! Tests for apply / apply_as over one to four operands.

use std::fmt::Debug;

use altvariant::apply::{Operand, Ref};
use altvariant::{InvalidAccess, Operation, TrivialVariant, Variant, alts, apply, apply_as};

type Num = alts![i32, f64];
type Text = alts![String, char];

// =============================================================================
// Operations
// =============================================================================

/// Renders every operand with `Debug`, joined by spaces.
struct Render;

impl<A: Debug> Operation<(&A,)> for Render {
    type Output = String;
    fn call(self, (a,): (&A,)) -> String {
        format!("{a:?}")
    }
}

impl<A: Debug, B: Debug> Operation<(&A, &B)> for Render {
    type Output = String;
    fn call(self, (a, b): (&A, &B)) -> String {
        format!("{a:?} {b:?}")
    }
}

impl<A: Debug, B: Debug, C: Debug> Operation<(&A, &B, &C)> for Render {
    type Output = String;
    fn call(self, (a, b, c): (&A, &B, &C)) -> String {
        format!("{a:?} {b:?} {c:?}")
    }
}

impl<A: Debug, B: Debug, C: Debug, D: Debug> Operation<(&A, &B, &C, &D)> for Render {
    type Output = String;
    fn call(self, (a, b, c, d): (&A, &B, &C, &D)) -> String {
        format!("{a:?} {b:?} {c:?} {d:?}")
    }
}

/// Doubles the value in place.
struct Double;

impl Operation<(&mut i32,)> for Double {
    type Output = ();
    fn call(self, (x,): (&mut i32,)) {
        *x *= 2;
    }
}

impl Operation<(&mut f64,)> for Double {
    type Output = ();
    fn call(self, (x,): (&mut f64,)) {
        *x *= 2.0;
    }
}

/// Moves the value out and widens it.
struct Widen;

impl Operation<(i32,)> for Widen {
    type Output = f64;
    fn call(self, (x,): (i32,)) -> f64 {
        x.into()
    }
}

impl Operation<(f64,)> for Widen {
    type Output = f64;
    fn call(self, (x,): (f64,)) -> f64 {
        x
    }
}

/// Outputs differ per alternative; only usable through `apply_as`.
struct Raw;

impl Operation<(&i32,)> for Raw {
    type Output = i32;
    fn call(self, (x,): (&i32,)) -> i32 {
        *x
    }
}

impl Operation<(&f64,)> for Raw {
    type Output = f32;
    fn call(self, (x,): (&f64,)) -> f32 {
        *x as f32
    }
}

// =============================================================================
// Single operand
// =============================================================================

#[test]
fn test_apply_shared() {
    let v = Variant::<Num>::new(1.5_f64);
    assert_eq!(apply(Render, (&v,)), Ok("1.5".to_string()));
    assert_eq!(v.visit(Render), Ok("1.5".to_string()));
}

#[test]
fn test_apply_mutable() {
    let mut v = Variant::<Num>::new(21_i32);
    assert_eq!(apply(Double, (&mut v,)), Ok(()));
    assert_eq!(v.get::<i32, _>(), Ok(&42));

    v.assign(0.25_f64);
    v.visit_mut(Double).unwrap();
    assert_eq!(v.get::<f64, _>(), Ok(&0.5));
}

#[test]
fn test_apply_by_value() {
    let v = Variant::<Num>::new(3_i32);
    assert_eq!(apply(Widen, (v,)), Ok(3.0));
    assert_eq!(Variant::<Num>::new(0.5_f64).into_visit(Widen), Ok(0.5));
}

#[test]
fn test_apply_by_value_moves_without_double_drop() {
    use std::rc::Rc;

    let shared = Rc::new(());
    let v = Variant::<alts![Rc<()>]>::new(shared.clone());
    assert_eq!(Rc::strong_count(&shared), 2);

    let count = apply(|moved: Rc<()>| Rc::strong_count(&moved), (v,));
    assert_eq!(count, Ok(2));
    assert_eq!(Rc::strong_count(&shared), 1);
}

#[test]
fn test_apply_closure_over_single_alternative() {
    let v = Variant::<alts![u64]>::new(9_u64);
    assert_eq!(apply(|x: &u64| x + 1, (&v,)), Ok(10));
}

// =============================================================================
// Several operands
// =============================================================================

#[test]
fn test_apply_two_operands_every_combination() {
    let ints = Variant::<Num>::new(1_i32);
    let floats = Variant::<Num>::new(2.5_f64);
    let text = Variant::<Text>::new('c');

    assert_eq!(apply(Render, (&ints, &floats)), Ok("1 2.5".to_string()));
    assert_eq!(apply(Render, (&floats, &ints)), Ok("2.5 1".to_string()));
    assert_eq!(apply(Render, (&ints, &text)), Ok("1 'c'".to_string()));
    assert_eq!(apply(Render, (&text, &text)), Ok("'c' 'c'".to_string()));
}

#[test]
fn test_apply_three_and_four_operands() {
    let a = Variant::<Num>::new(1_i32);
    let b = Variant::<Text>::new(String::from("s"));
    let c = TrivialVariant::<alts![u8, bool]>::new(true);

    assert_eq!(apply(Render, (&a, &b, &c)), Ok("1 \"s\" true".to_string()));
    assert_eq!(apply(Render, (&c, &a, &b, &c)), Ok("true 1 \"s\" true".to_string()));
}

#[test]
fn test_apply_mixed_value_categories() {
    struct Store;

    impl<X: Copy + Into<f64>, Y: Copy + Into<f64>> Operation<(&mut X, Y)> for Store {
        type Output = f64;
        fn call(self, (target, source): (&mut X, Y)) -> f64 {
            (*target).into() + source.into()
        }
    }

    let mut a = Variant::<Num>::new(1_i32);
    let b = TrivialVariant::<Num>::new(0.5_f64);
    assert_eq!(apply(Store, (&mut a, b)), Ok(1.5));
    // `b` is `Copy`, still usable.
    assert_eq!(b.get::<f64, _>(), Ok(&0.5));
}

#[test]
fn test_apply_rejects_any_valueless_position() {
    let live = Variant::<Num>::new(1_i32);
    let empty = Variant::<Num>::valueless();

    assert_eq!(apply(Render, (&empty,)), Err(InvalidAccess));
    assert_eq!(apply(Render, (&live, &empty)), Err(InvalidAccess));
    assert_eq!(apply(Render, (&live, &live, &empty)), Err(InvalidAccess));
    assert_eq!(apply(Render, (&empty, &live, &live, &live)), Err(InvalidAccess));
}

// =============================================================================
// Pinned result type
// =============================================================================

#[test]
fn test_apply_as_converts_branch_outputs() {
    let i = Variant::<Num>::new(4_i32);
    let f = Variant::<Num>::new(0.5_f64);

    assert_eq!(apply_as::<f64, _, _>(Raw, (&i,)), Ok(4.0));
    assert_eq!(apply_as::<f64, _, _>(Raw, (&f,)), Ok(0.5));
    assert_eq!(apply_as::<f64, _, _>(Raw, (&Variant::<Num>::valueless(),)), Err(InvalidAccess));
}

// =============================================================================
// Custom operands
// =============================================================================

#[test]
fn test_forwarding_operand_impl() {
    struct Borrowed<'a>(&'a Variant<Num>);

    // SAFETY: both methods forward to the wrapped container.
    unsafe impl<'a> Operand for Borrowed<'a> {
        type Cursor = Ref<'a, Num>;

        fn index(&self) -> Option<usize> {
            Operand::index(&self.0)
        }

        fn into_cursor(self) -> Self::Cursor {
            Operand::into_cursor(self.0)
        }
    }

    let v = Variant::<Num>::new(2_i32);
    assert_eq!(apply(Render, (Borrowed(&v),)), Ok("2".to_string()));

    let empty = Variant::<Num>::valueless();
    assert_eq!(apply(Render, (Borrowed(&empty),)), Err(InvalidAccess));
}
