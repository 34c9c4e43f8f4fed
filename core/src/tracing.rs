//! Tracing utilities for expression rendering.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site.

#[cfg(feature = "tracing")]
#[doc(hidden)]
pub use ::tracing as __tracing;

/// Emit a debug-level tracing event with the SQL text and parameter count.
///
/// ```ignore
/// pgext_trace_sql!(&sql, params.len());
/// ```
#[cfg(feature = "tracing")]
#[macro_export]
macro_rules! pgext_trace_sql {
    ($sql:expr, $param_count:expr) => {
        $crate::tracing::__tracing::debug!(sql = %$sql, params = $param_count, "pgext.expr");
    };
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! pgext_trace_sql {
    ($sql:expr, $param_count:expr) => {};
}
