//! # Layer 2: Visitation
//!
//! `apply(op, (a, b, ...))` unwraps every operand to its live value and calls
//! `op` with all of them. Operands are resolved left to right; each one
//! branches on its own discriminant and fixes its concrete type before the
//! next is looked at.
//!
//! ```text
//! Operands::apply ── check all non-valueless ──> Continue::resume
//!        (a, i)  Dispatch: walk a's list to i, push &A ─┐
//!        (b, j)  Dispatch: walk b's list to j, push &B ─┤
//!        ()      Flatten (A, B), Operation::call  <─────┘
//! ```
//!
//! - `operation.rs`: `Operation`, closure impls, `Pinned`.
//! - `cursor.rs`: `Ref` / `Mut` / `Own` cursors and `Dispatch`.
//! - `resolve.rs`: `Push`, `Flatten`, `Continue`, `Operand`, `Operands`.

pub mod cursor;
pub mod operation;
pub mod resolve;

pub use cursor::{Dispatch, Mut, Own, Ref};
pub use operation::{Operation, Pinned};
pub use resolve::{Continue, Flatten, Operand, Operands, Push};

use crate::error::InvalidAccess;

/// Invoke `op` with the live values of all `operands`.
///
/// `operands` is a tuple of one to four containers, each passed by `&`,
/// `&mut` or value; `op` receives `&T`, `&mut T` or `T` accordingly. Every
/// combination must produce the same output type `R`.
///
/// Fails with [`InvalidAccess`] before calling `op` if any operand is
/// valueless. Operands passed by value are dropped in that case.
#[inline]
pub fn apply<F, Ops, R>(op: F, operands: Ops) -> Result<R, InvalidAccess>
where
    Ops: Operands<F, R>,
{
    operands.apply(op)
}

/// [`apply`] with a pinned result type: every combination's output only has
/// to be `Into<R>`.
#[inline]
pub fn apply_as<R, F, Ops>(op: F, operands: Ops) -> Result<R, InvalidAccess>
where
    Ops: Operands<Pinned<F, R>, R>,
{
    operands.apply(Pinned::new(op))
}
