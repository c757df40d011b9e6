//! Operand chaining: accumulator, continuation and the operand tuples.

use super::cursor::Dispatch;
use super::operation::Operation;
use crate::error::InvalidAccess;
use crate::trace;

// =============================================================================
// Accumulator
// =============================================================================

/// Append `X` at the end of a cons-list (`()` is the empty list).
pub trait Push<X> {
    type Out;

    fn push(self, x: X) -> Self::Out;
}

impl<X> Push<X> for () {
    type Out = (X, ());

    #[inline(always)]
    fn push(self, x: X) -> Self::Out {
        (x, ())
    }
}

impl<H, T, X> Push<X> for (H, T)
where
    T: Push<X>,
{
    type Out = (H, T::Out);

    #[inline(always)]
    fn push(self, x: X) -> Self::Out {
        (self.0, self.1.push(x))
    }
}

/// Cons-list `(A0, (A1, ... ()))` to flat tuple `(A0, A1, ...)`.
pub trait Flatten {
    type Tuple;

    fn flatten(self) -> Self::Tuple;
}

// =============================================================================
// Continuation
// =============================================================================

/// The operands still to resolve, as a cons-list of `(cursor, index)`.
pub trait Continue<F, Acc, R> {
    /// # Safety
    /// Every index in the chain must be its cursor's live alternative.
    unsafe fn resume(self, op: F, acc: Acc) -> R;
}

/// Nothing left: call the operation with everything resolved, in operand
/// order.
impl<F, Acc, R> Continue<F, Acc, R> for ()
where
    Acc: Flatten,
    F: Operation<Acc::Tuple, Output = R>,
{
    #[inline(always)]
    unsafe fn resume(self, op: F, acc: Acc) -> R {
        op.call(acc.flatten())
    }
}

impl<C, Rest, F, Acc, R> Continue<F, Acc, R> for ((C, usize), Rest)
where
    C: Dispatch<F, Acc, Rest, R>,
{
    #[inline(always)]
    unsafe fn resume(self, op: F, acc: Acc) -> R {
        let ((cursor, index), rest) = self;
        unsafe { cursor.dispatch(index, op, acc, rest) }
    }
}

// =============================================================================
// Operands
// =============================================================================

/// Something apply can unwrap: a container by shared reference, by mutable
/// reference or by value.
///
/// # Safety
/// `index` must return the live alternative of the storage `into_cursor`
/// yields, or `None` only when nothing is live. `apply` dispatches on it
/// without checking.
///
/// Implementing it without `unsafe` is rejected:
///
/// ```compile_fail,E0200
/// use altvariant::apply::{Operand, Ref};
/// use altvariant::{alts, Variant};
///
/// type L = alts![u64, String];
///
/// struct Wrap<'a>(&'a Variant<L>);
///
/// impl<'a> Operand for Wrap<'a> {
///     type Cursor = Ref<'a, L>;
///
///     fn index(&self) -> Option<usize> {
///         Some(1)
///     }
///
///     fn into_cursor(self) -> Self::Cursor {
///         Operand::into_cursor(self.0)
///     }
/// }
/// ```
pub unsafe trait Operand: Sized {
    type Cursor;

    /// Zero-based live alternative, `None` when valueless.
    fn index(&self) -> Option<usize>;

    fn into_cursor(self) -> Self::Cursor;
}

/// A tuple of one to four operands applied together.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be applied with `{F}`",
    label = "operands must be a tuple of 1 to 4 containers (by `&`, `&mut` or value)",
    note = "the operation must accept every alternative combination and return one result type"
)]
pub trait Operands<F, R> {
    fn apply(self, op: F) -> Result<R, InvalidAccess>;
}

#[cold]
fn rejected(position: usize) {
    trace::trace!(position, "apply rejected a valueless operand");
    let _ = position;
}

macros::impl_operands!(4);
