//! # Layer 0: Type Lists
//!
//! Compile-time queries over the closed, ordered list of alternatives:
//! - `node.rs`: `HNil` / `HCons` and the `alts!` builder.
//! - `peano.rs`: Type-level indices (`Z`, `S<N>`, `D0..D64`).
//! - `query.rs`: Lookup by index (`At`), search by type (`IndexOf`), `Len`.
//! - `reduce.rs`: Const reductions over per-alternative properties.
//!
//! Nothing here has runtime behavior. A failed query is a build error.

pub mod node;
pub mod peano;
pub mod query;
pub mod reduce;

pub use node::{HCons, HNil};
pub use peano::*;
pub use query::{AltAt, At, IndexOf, Len};
pub use reduce::Reduce;
