//! Feature-gated tracing span macro.
//!
//! With the `tracing` feature enabled the macro opens a
//! `tracing::info_span!`; without it, call sites compile to a no-op
//! guard so the aggregation entry points need no conditional code.

#[cfg(feature = "tracing")]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        tracing::info_span!($name $(, $($field)*)?)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        $crate::trace::NoopSpan
    };
}

pub(crate) use trace_span;

/// Stand-in span guard used when tracing is disabled.
///
/// Lets `let _span = trace_span!(...).entered();` compile unchanged in
/// both configurations.
#[cfg(not(feature = "tracing"))]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Returns self, mimicking `Span::entered()`.
    #[inline]
    pub fn entered(self) -> Self {
        self
    }
}
