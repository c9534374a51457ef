//! Tracing support for outcomes.
//!
//! Feature-gated behind `#[cfg(feature = "tracing")]`. The container never
//! logs by itself; [`TracingExt::trace_outcome`] is an explicit tap that
//! records which variant passed through and hands the instance back unchanged.
//!
//! Futures returned by [`ValueOrError::transform_async`] are ordinary futures
//! and can be wrapped in a span with [`tracing::Instrument`].

use std::fmt::Debug;

use crate::ValueOrError;

/// Target used for every event emitted by this module.
pub const TARGET: &str = "value_or_error";

/// Extension trait for recording outcomes as tracing events.
///
/// This trait is only available when the `tracing` feature is enabled.
pub trait TracingExt: Sized {
    /// Emit one event describing this outcome and return `self`.
    ///
    /// Successes are logged at `DEBUG` with a `value` field, failures at
    /// `WARN` with an `error` field. Both carry the `operation` name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use value_or_error::ValueOrError;
    /// use value_or_error::tracing::TracingExt;
    ///
    /// let v: ValueOrError<u32, String> = ValueOrError::failure("quota exceeded".to_string());
    /// let v = v.trace_outcome("upload");
    /// assert!(v.is_failure());
    /// ```
    fn trace_outcome(self, operation: &str) -> Self;
}

impl<V, E> TracingExt for ValueOrError<V, E>
where
    V: Debug,
    E: Debug,
{
    fn trace_outcome(self, operation: &str) -> Self {
        match &self {
            ValueOrError::Success(value) => {
                ::tracing::debug!(target: TARGET, operation, value = ?value, "operation succeeded");
            }
            ValueOrError::Failure(error) => {
                ::tracing::warn!(target: TARGET, operation, error = ?error, "operation failed");
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::tracing::Instrument;
    use futures::future;
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn test_success_is_logged_at_debug() {
        let v: ValueOrError<i32, String> = ValueOrError::success(42);
        let v = v.trace_outcome("load_config");

        assert_eq!(v, ValueOrError::success(42));
        assert!(logs_contain("operation succeeded"));
        assert!(logs_contain("load_config"));
        assert!(logs_contain("value=42"));
    }

    #[traced_test]
    #[test]
    fn test_failure_is_logged_at_warn() {
        let v: ValueOrError<i32, &str> = ValueOrError::failure("missing key");
        let v = v.trace_outcome("load_config");

        assert!(v.is_failure());
        assert!(logs_contain("WARN"));
        assert!(logs_contain("operation failed"));
        assert!(logs_contain("missing key"));
    }

    #[traced_test]
    #[tokio::test]
    async fn test_instrumented_transform_async() {
        let v: ValueOrError<i32, String> = ValueOrError::success(5);

        let out = v
            .transform_async(|v| future::ready(v * 2), future::ready)
            .instrument(::tracing::info_span!("doubling"))
            .await
            .trace_outcome("double");

        assert_eq!(out, ValueOrError::success(10));
        assert!(logs_contain("value=10"));
    }
}
