//! Structured logging bridge.
//!
//! With the `tracing` feature the macros here forward to `tracing`; without
//! it they expand to nothing and cost nothing.

#[cfg(feature = "tracing")]
macro_rules! debug {
    ($($arg:tt)*) => { ::tracing::debug!(target: "altvariant", $($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! trace {
    ($($arg:tt)*) => { ::tracing::trace!(target: "altvariant", $($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

pub(crate) use trace;

/// Armed while an alternative is being built into freshly emptied storage.
/// Dropped armed only during unwinding, i.e. when construction panicked and
/// the container was left valueless.
pub(crate) struct ConstructGuard {
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    index: usize,
    armed: bool,
}

impl ConstructGuard {
    #[inline(always)]
    pub(crate) fn new(index: usize) -> Self {
        Self { index, armed: true }
    }

    #[inline(always)]
    pub(crate) fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for ConstructGuard {
    #[inline(always)]
    fn drop(&mut self) {
        if self.armed {
            debug!(
                index = self.index,
                "alternative construction panicked, container left valueless"
            );
        }
    }
}
