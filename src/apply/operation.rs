//! Operations invoked by [`apply`](super::apply).

use core::marker::PhantomData;

/// A callable polymorphic over the unwrapped alternatives.
///
/// `Args` is the flat tuple of resolved values, one per operand, in operand
/// order: `(&A,)` for one shared operand, `(&mut A, B)` for a mutable and an
/// owned operand, and so on. Implement it generically to cover every
/// alternative at once:
///
/// ```
/// use altvariant::{alts, apply, Operation, Variant};
/// use core::fmt::Debug;
///
/// struct Show;
///
/// impl<T: Debug> Operation<(&T,)> for Show {
///     type Output = String;
///     fn call(self, (value,): (&T,)) -> String {
///         format!("{value:?}")
///     }
/// }
///
/// let v = Variant::<alts![i32, &str]>::new("hi");
/// assert_eq!(apply(Show, (&v,)), Ok("\"hi\"".to_string()));
/// ```
///
/// `Output` is the result type for a given combination. The apply engine
/// requires it to be the same for every combination that can occur; use
/// [`apply_as`](super::apply_as) to pin a result type instead.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be applied to `{Args}`",
    label = "missing `Operation<{Args}>` impl",
    note = "an operation must accept every combination of alternatives the operands can hold"
)]
pub trait Operation<Args> {
    type Output;

    fn call(self, args: Args) -> Self::Output;
}

// Closures: any `FnOnce` over the resolved values. Closures are not generic,
// so this suits lists where every alternative has the same type, or operands
// whose alternatives all coerce to one parameter type.
macro_rules! impl_fn_operation {
    ($($n:literal)+) => {
        paste::paste! {
            impl<Func, Ret, $([<A $n>]),+> Operation<($([<A $n>],)+)> for Func
            where
                Func: FnOnce($([<A $n>]),+) -> Ret,
            {
                type Output = Ret;

                #[inline(always)]
                fn call(self, ($([<a $n>],)+): ($([<A $n>],)+)) -> Self::Output {
                    self($([<a $n>]),+)
                }
            }
        }
    };
}

impl_fn_operation!(0);
impl_fn_operation!(0 1);
impl_fn_operation!(0 1 2);
impl_fn_operation!(0 1 2 3);

/// Adapter pinning the result type to `R`: each combination's output only has
/// to convert into `R`.
pub struct Pinned<F, R> {
    op: F,
    _result: PhantomData<fn() -> R>,
}

impl<F, R> Pinned<F, R> {
    pub fn new(op: F) -> Self {
        Self { op, _result: PhantomData }
    }
}

impl<F, R, Args> Operation<Args> for Pinned<F, R>
where
    F: Operation<Args>,
    F::Output: Into<R>,
{
    type Output = R;

    #[inline(always)]
    fn call(self, args: Args) -> R {
        self.op.call(args).into()
    }
}
