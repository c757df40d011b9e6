#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std error integration
// - tracing: structured logging of panicked constructions and rejected applies

//! # altvariant
//!
//! Heap-free tagged union over a closed, ordered list of alternative types,
//! with an explicit *valueless* state.
//!
//! ## Architecture
//!
//! The alternatives are a type-level list, `alts![A, B, C]`. Everything that
//! depends on the list (size, alignment, whether a destructor is needed,
//! which std traits the container gets) is computed from it at build time.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Type Lists                                              |
//! |  - HNil / HCons, Peano indices, At / IndexOf / Len, const reduces |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Storage Engine                                          |
//! |  - recursive union Slot, capability lists, RawVariant             |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Visitation                                              |
//! |  - apply / apply_as over 1..=4 operands, Operation                |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Containers                                              |
//! |  - Variant (general mode), TrivialVariant (all alternatives Copy) |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use altvariant::prelude::*;
//!
//! type Value = alts![i64, f64, String];
//!
//! let mut v = Variant::<Value>::new(2.5_f64);
//! assert_eq!(v.which(), 1);
//! assert_eq!(v.get_if::<f64, _>(), Some(&2.5));
//!
//! v.emplace(String::from("text"));
//! assert_eq!(v.get::<String, _>().map(String::len), Ok(4));
//!
//! let empty = Variant::<Value>::default();
//! assert!(empty.is_valueless());
//! assert_eq!(empty.get::<i64, _>(), Err(InvalidAccess));
//! ```

#[cfg(all(test, not(feature = "std")))]
extern crate std;

mod trace;

// =============================================================================
// Layer 0: Type Lists
// =============================================================================
pub mod list;

// =============================================================================
// Layer 1: Storage Engine
// =============================================================================
pub mod storage;

// =============================================================================
// Layer 2: Visitation
// =============================================================================
pub mod apply;

// =============================================================================
// Layer 3: Containers
// =============================================================================
pub mod variant;

pub mod error;
pub mod tag;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use apply::{Operation, apply, apply_as};
pub use error::InvalidAccess;
pub use list::{
    AltAt, HCons, HNil, Peano, S, Z,
    D0, D1, D2, D3, D4, D5, D6, D7, D8, D9, D10, D11, D12, D13, D14, D15,
};
pub use storage::VALUELESS_HASH;
pub use tag::{InPlaceIndex, InPlaceType, in_place_index, in_place_type};
pub use variant::{NONE, TrivialVariant, Variant, get_if, get_if_mut};

/// Common items for working with variants.
pub mod prelude {
    pub use crate::alts;
    pub use crate::apply::{Operation, apply, apply_as};
    pub use crate::error::InvalidAccess;
    pub use crate::list::{D0, D1, D2, D3, D4, D5, D6, D7};
    pub use crate::tag::{in_place_index, in_place_type};
    pub use crate::variant::{Container, TrivialVariant, Variant};
}
