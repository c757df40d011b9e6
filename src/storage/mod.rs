//! # Layer 1: Storage Engine
//!
//! - `slot.rs`: the recursive `union` (`Slot`, `Void`), `AlternativeList`
//!   and the per-alternative pointer projection `Locate`.
//! - `caps.rs`: capability lists (`CloneList`, `PartialEqList`, ...), each an
//!   AND reduction over the alternatives with one recursive operation.
//! - `raw.rs`: `RawVariant`, the discriminant plus storage pair with the
//!   construct / destroy / emplace / assign / clone contracts.

pub mod caps;
pub mod raw;
pub mod slot;

pub use caps::{
    CloneList, CopyList, DebugList, EqList, HashList, OrdList, PartialEqList, PartialOrdList,
};
pub use raw::{RawVariant, VALUELESS_HASH};
pub use slot::{AlternativeList, Locate, Slot, Void};
