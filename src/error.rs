//! Access errors.

/// The requested alternative is not the live one, or the container is
/// valueless.
///
/// Returned by the checked accessors (`get`, `get_at`, ...) and by
/// [`apply`](crate::apply::apply) when an operand is valueless.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("bad variant access")]
pub struct InvalidAccess;
