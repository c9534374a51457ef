//! The success-or-failure container and its synchronous combinators.
//!
//! A [`ValueOrError<V, E>`] holds exactly one of a success value `V` or a
//! failure value `E`. The state is the enum tag itself, so an instance with
//! both payloads, or with neither, cannot be built.
//!
//! # Examples
//!
//! ```rust
//! use value_or_error::ValueOrError;
//!
//! fn parse_port(raw: &str) -> ValueOrError<u16, String> {
//!     match raw.parse() {
//!         Ok(port) => ValueOrError::success(port),
//!         Err(e) => ValueOrError::failure(format!("invalid port {:?}: {}", raw, e)),
//!     }
//! }
//!
//! // Fork into new value and error types in one step
//! let described = parse_port("8080").transform(|port| port as u32 + 1, |e| e.len());
//! assert_eq!(described, ValueOrError::success(8081));
//!
//! let described = parse_port("http").transform(|port| port as u32 + 1, |e| e.len());
//! assert!(described.is_failure());
//! ```

use crate::error::{Variant, WrongVariantAccess};

/// The outcome of a computation: either a success value or a failure value.
///
/// Unlike a pair of optional fields guarded by a flag, the payload can only
/// be reached by matching on the variant that holds it. Once built, an
/// instance never changes variant; the combinators always return a new
/// instance.
///
/// # Type Parameters
///
/// * `V` - The type of the success value
/// * `E` - The type of the failure value
///
/// # Example
///
/// ```rust
/// use value_or_error::ValueOrError;
///
/// let ok: ValueOrError<i32, String> = ValueOrError::success(5);
/// let bad: ValueOrError<i32, String> = ValueOrError::failure("bad".to_string());
///
/// let f = |v: i32| v * 2;
/// let g = |e: String| e + "!";
///
/// assert_eq!(ok.transform(f, g), ValueOrError::success(10));
/// assert_eq!(bad.transform(f, g), ValueOrError::failure("bad!".to_string()));
/// ```
#[must_use = "this `ValueOrError` may be a failure, which should be handled"]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValueOrError<V, E> {
    /// The computation produced a value
    Success(V),
    /// The computation produced an error
    Failure(E),
}

impl<V, E> ValueOrError<V, E> {
    // ========== Constructors ==========

    /// Create a successful instance.
    ///
    /// The value is stored as given; nothing about it is inspected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use value_or_error::ValueOrError;
    ///
    /// let v: ValueOrError<Option<i32>, String> = ValueOrError::success(None);
    /// assert!(v.is_success());
    /// ```
    #[inline]
    pub fn success(value: V) -> Self {
        ValueOrError::Success(value)
    }

    /// Create a failed instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use value_or_error::ValueOrError;
    ///
    /// let v: ValueOrError<i32, &str> = ValueOrError::failure("bad");
    /// assert!(!v.is_success());
    /// ```
    #[inline]
    pub fn failure(error: E) -> Self {
        ValueOrError::Failure(error)
    }

    // ========== Inspection ==========

    /// Returns `true` if this instance was built with [`success`](Self::success).
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, ValueOrError::Success(_))
    }

    /// Returns `true` if this instance was built with [`failure`](Self::failure).
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, ValueOrError::Failure(_))
    }

    /// The variant this instance holds.
    ///
    /// # Example
    ///
    /// ```rust
    /// use value_or_error::{ValueOrError, Variant};
    ///
    /// let v: ValueOrError<i32, &str> = ValueOrError::failure("bad");
    /// assert_eq!(v.variant(), Variant::Failure);
    /// ```
    #[inline]
    pub fn variant(&self) -> Variant {
        match self {
            ValueOrError::Success(_) => Variant::Success,
            ValueOrError::Failure(_) => Variant::Failure,
        }
    }

    /// Convert to `ValueOrError<&V, &E>`.
    ///
    /// Useful for dispatching on a borrowed instance without giving it up.
    ///
    /// # Example
    ///
    /// ```rust
    /// use value_or_error::ValueOrError;
    ///
    /// let v: ValueOrError<String, String> = ValueOrError::success("hello".to_string());
    /// let len = v.as_ref().fold(|s| s.len(), |e| e.len());
    /// assert_eq!(len, 5);
    /// assert!(v.is_success());
    /// ```
    #[inline]
    pub fn as_ref(&self) -> ValueOrError<&V, &E> {
        match self {
            ValueOrError::Success(v) => ValueOrError::Success(v),
            ValueOrError::Failure(e) => ValueOrError::Failure(e),
        }
    }

    // ========== Checked Accessors ==========

    /// Borrow the success value.
    ///
    /// # Errors
    ///
    /// Returns [`WrongVariantAccess`] if this is a failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use value_or_error::ValueOrError;
    ///
    /// let ok: ValueOrError<i32, &str> = ValueOrError::success(42);
    /// assert_eq!(ok.value(), Ok(&42));
    ///
    /// let bad: ValueOrError<i32, &str> = ValueOrError::failure("bad");
    /// assert!(bad.value().is_err());
    /// ```
    #[inline]
    pub fn value(&self) -> Result<&V, WrongVariantAccess> {
        match self {
            ValueOrError::Success(v) => Ok(v),
            ValueOrError::Failure(_) => Err(self.wrong_access(Variant::Success)),
        }
    }

    /// Borrow the failure value.
    ///
    /// # Errors
    ///
    /// Returns [`WrongVariantAccess`] if this is a success.
    #[inline]
    pub fn error(&self) -> Result<&E, WrongVariantAccess> {
        match self {
            ValueOrError::Success(_) => Err(self.wrong_access(Variant::Failure)),
            ValueOrError::Failure(e) => Ok(e),
        }
    }

    /// Take the success value, consuming self.
    ///
    /// # Errors
    ///
    /// Returns [`WrongVariantAccess`] if this is a failure. The error payload
    /// is dropped.
    #[inline]
    pub fn into_value(self) -> Result<V, WrongVariantAccess> {
        match self {
            ValueOrError::Success(v) => Ok(v),
            ValueOrError::Failure(_) => Err(WrongVariantAccess::new(
                Variant::Success,
                Variant::Failure,
            )),
        }
    }

    /// Take the failure value, consuming self.
    ///
    /// # Errors
    ///
    /// Returns [`WrongVariantAccess`] if this is a success. The success
    /// payload is dropped.
    #[inline]
    pub fn into_error(self) -> Result<E, WrongVariantAccess> {
        match self {
            ValueOrError::Success(_) => Err(WrongVariantAccess::new(
                Variant::Failure,
                Variant::Success,
            )),
            ValueOrError::Failure(e) => Ok(e),
        }
    }

    /// Extract the success value, panicking if this is a failure.
    ///
    /// # Panics
    ///
    /// Panics with the [`WrongVariantAccess`] message if this is a failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use value_or_error::ValueOrError;
    ///
    /// let ok: ValueOrError<i32, &str> = ValueOrError::success(42);
    /// assert_eq!(ok.unwrap_value(), 42);
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_value(self) -> V {
        match self {
            ValueOrError::Success(v) => v,
            ValueOrError::Failure(_) => panic!(
                "{}",
                WrongVariantAccess::new(Variant::Success, Variant::Failure)
            ),
        }
    }

    /// Extract the failure value, panicking if this is a success.
    ///
    /// # Panics
    ///
    /// Panics with the [`WrongVariantAccess`] message if this is a success.
    #[inline]
    #[track_caller]
    pub fn unwrap_error(self) -> E {
        match self {
            ValueOrError::Success(_) => panic!(
                "{}",
                WrongVariantAccess::new(Variant::Failure, Variant::Success)
            ),
            ValueOrError::Failure(e) => e,
        }
    }

    /// Returns the success value if present, discarding any error.
    #[inline]
    pub fn ok(self) -> Option<V> {
        match self {
            ValueOrError::Success(v) => Some(v),
            ValueOrError::Failure(_) => None,
        }
    }

    /// Returns the failure value if present, discarding any success value.
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            ValueOrError::Success(_) => None,
            ValueOrError::Failure(e) => Some(e),
        }
    }

    fn wrong_access(&self, expected: Variant) -> WrongVariantAccess {
        WrongVariantAccess::new(expected, self.variant())
    }

    // ========== Branching Combinators ==========

    /// Run exactly one of two actions, chosen by the variant.
    ///
    /// `on_value` receives the success value, `on_error` the failure value.
    /// The other function is dropped without being called.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::cell::RefCell;
    /// use value_or_error::ValueOrError;
    ///
    /// let log = RefCell::new(Vec::new());
    /// let v: ValueOrError<i32, &str> = ValueOrError::failure("disk full");
    ///
    /// v.run(
    ///     |n| log.borrow_mut().push(format!("stored {}", n)),
    ///     |e| log.borrow_mut().push(format!("failed: {}", e)),
    /// );
    /// assert_eq!(log.into_inner(), vec!["failed: disk full"]);
    /// ```
    #[inline]
    pub fn run<F, G>(self, on_value: F, on_error: G)
    where
        F: FnOnce(V),
        G: FnOnce(E),
    {
        match self {
            ValueOrError::Success(v) => on_value(v),
            ValueOrError::Failure(e) => on_error(e),
        }
    }

    /// Transform whichever payload is present into a new instance.
    ///
    /// Running `on_value` always produces a success and running `on_error`
    /// always produces a failure; the returned payload is not inspected.
    /// Both the value and the error type may change.
    ///
    /// # Example
    ///
    /// ```rust
    /// use value_or_error::ValueOrError;
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum AppError {
    ///     Io(String),
    /// }
    ///
    /// let low_level: ValueOrError<Vec<u8>, std::io::ErrorKind> =
    ///     ValueOrError::failure(std::io::ErrorKind::NotFound);
    ///
    /// let lifted = low_level.transform(
    ///     |bytes| bytes.len(),
    ///     |kind| AppError::Io(format!("{:?}", kind)),
    /// );
    /// assert_eq!(lifted, ValueOrError::failure(AppError::Io("NotFound".to_string())));
    /// ```
    #[inline]
    pub fn transform<V2, E2, F, G>(self, on_value: F, on_error: G) -> ValueOrError<V2, E2>
    where
        F: FnOnce(V) -> V2,
        G: FnOnce(E) -> E2,
    {
        match self {
            ValueOrError::Success(v) => ValueOrError::Success(on_value(v)),
            ValueOrError::Failure(e) => ValueOrError::Failure(on_error(e)),
        }
    }

    /// Collapse both variants into a single value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use value_or_error::ValueOrError;
    ///
    /// let v: ValueOrError<i32, &str> = ValueOrError::success(3);
    /// assert_eq!(v.fold(|n| n.to_string(), |e| e.to_uppercase()), "3");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, on_value: F, on_error: G) -> T
    where
        F: FnOnce(V) -> T,
        G: FnOnce(E) -> T,
    {
        match self {
            ValueOrError::Success(v) => on_value(v),
            ValueOrError::Failure(e) => on_error(e),
        }
    }

    /// Transform the success value, passing failures through unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use value_or_error::ValueOrError;
    ///
    /// let v: ValueOrError<i32, &str> = ValueOrError::success(21);
    /// assert_eq!(v.map(|n| n * 2), ValueOrError::success(42));
    /// ```
    #[inline]
    pub fn map<V2, F>(self, f: F) -> ValueOrError<V2, E>
    where
        F: FnOnce(V) -> V2,
    {
        self.transform(f, |e| e)
    }

    /// Transform the failure value, passing successes through unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use value_or_error::ValueOrError;
    ///
    /// let v: ValueOrError<i32, &str> = ValueOrError::failure("bad");
    /// assert_eq!(v.map_err(str::len), ValueOrError::failure(3));
    /// ```
    #[inline]
    pub fn map_err<E2, G>(self, g: G) -> ValueOrError<V, E2>
    where
        G: FnOnce(E) -> E2,
    {
        self.transform(|v| v, g)
    }

    // ========== Conversions ==========

    /// Convert to a standard `Result` (success becomes `Ok`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use value_or_error::ValueOrError;
    ///
    /// let v: ValueOrError<i32, &str> = ValueOrError::success(42);
    /// assert_eq!(v.into_result(), Ok(42));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<V, E> {
        match self {
            ValueOrError::Success(v) => Ok(v),
            ValueOrError::Failure(e) => Err(e),
        }
    }

    /// Create from a standard `Result` (`Ok` becomes success).
    #[inline]
    pub fn from_result(result: Result<V, E>) -> Self {
        match result {
            Ok(v) => ValueOrError::Success(v),
            Err(e) => ValueOrError::Failure(e),
        }
    }
}

impl<V, E> From<Result<V, E>> for ValueOrError<V, E> {
    fn from(result: Result<V, E>) -> Self {
        ValueOrError::from_result(result)
    }
}

impl<V, E> From<ValueOrError<V, E>> for Result<V, E> {
    fn from(value_or_error: ValueOrError<V, E>) -> Self {
        value_or_error.into_result()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_identity_transform_preserves_success(x: i32) {
            let v: ValueOrError<i32, String> = ValueOrError::success(x);
            prop_assert_eq!(v.transform(|v| v, |e| e), ValueOrError::success(x));
        }

        #[test]
        fn prop_identity_transform_preserves_failure(e in ".*") {
            let v: ValueOrError<i32, String> = ValueOrError::failure(e.clone());
            prop_assert_eq!(v.transform(|v| v, |e| e), ValueOrError::failure(e));
        }

        #[test]
        fn prop_transform_shape_follows_branch(x: i32, is_success: bool) {
            let v: ValueOrError<i32, i32> = if is_success {
                ValueOrError::success(x)
            } else {
                ValueOrError::failure(x)
            };

            // Both branches return the same type, so only the tag tells them apart
            let out = v.transform(|v| v.wrapping_add(1), |e| e.wrapping_add(1));
            prop_assert_eq!(out.is_success(), is_success);
            prop_assert_eq!(out.fold(|v| v, |e| e), x.wrapping_add(1));
        }

        #[test]
        fn prop_transform_composes(x: i32) {
            let f = |v: i32| v.wrapping_add(1);
            let g = |v: i32| v.wrapping_mul(2);

            let v: ValueOrError<i32, ()> = ValueOrError::success(x);
            prop_assert_eq!(
                v.map(f).map(g),
                v.map(|v| g(f(v)))
            );
        }

        #[test]
        fn prop_result_roundtrip(x: i32, is_success: bool) {
            let v: ValueOrError<i32, i32> = if is_success {
                ValueOrError::success(x)
            } else {
                ValueOrError::failure(x)
            };
            let back = ValueOrError::from_result(v.into_result());
            prop_assert_eq!(back, v);
        }
    }
}
