// Internal expansions used by the altvariant crate itself.

pub mod operands;
pub mod peano;
