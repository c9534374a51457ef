//! Testing utilities for code that produces [`ValueOrError`] values.
//!
//! Assertion macros that report the unexpected payload on failure, plus a
//! `proptest` `Arbitrary` implementation behind the `proptest` feature.
//!
//! # Examples
//!
//! ```rust
//! use value_or_error::{ValueOrError, assert_failure_eq, assert_success};
//!
//! let ok = ValueOrError::<_, String>::success(42);
//! assert_success!(ok);
//!
//! let bad = ValueOrError::<i32, _>::failure("bad");
//! assert_failure_eq!(bad, "bad");
//! ```
//!
//! [`ValueOrError`]: crate::ValueOrError

/// Assert that an outcome is a success.
///
/// Panics with the error payload if it is a failure.
///
/// # Example
///
/// ```rust
/// use value_or_error::{ValueOrError, assert_success};
///
/// let v = ValueOrError::<_, String>::success(42);
/// assert_success!(v);
/// ```
#[macro_export]
macro_rules! assert_success {
    ($outcome:expr) => {
        match $outcome {
            $crate::ValueOrError::Success(_) => {}
            $crate::ValueOrError::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that an outcome is a failure.
///
/// Panics with the success payload if it is a success.
///
/// # Example
///
/// ```rust
/// use value_or_error::{ValueOrError, assert_failure};
///
/// let v = ValueOrError::<i32, _>::failure("error".to_string());
/// assert_failure!(v);
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($outcome:expr) => {
        match $outcome {
            $crate::ValueOrError::Failure(_) => {}
            $crate::ValueOrError::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that an outcome is a success holding the expected value.
///
/// # Example
///
/// ```rust
/// use value_or_error::{ValueOrError, assert_success_eq};
///
/// let v = ValueOrError::<_, String>::success(5).map(|n| n * 2);
/// assert_success_eq!(v, 10);
/// ```
#[macro_export]
macro_rules! assert_success_eq {
    ($outcome:expr, $expected:expr) => {
        match $outcome {
            $crate::ValueOrError::Success(value) => {
                assert_eq!(value, $expected);
            }
            $crate::ValueOrError::Failure(e) => {
                panic!(
                    "Expected Success with value {:?}, got Failure: {:?}",
                    $expected, e
                );
            }
        }
    };
}

/// Assert that an outcome is a failure holding the expected error.
///
/// # Example
///
/// ```rust
/// use value_or_error::{ValueOrError, assert_failure_eq};
///
/// let v = ValueOrError::<i32, _>::failure("bad".to_string()).map_err(|e| e + "!");
/// assert_failure_eq!(v, "bad!");
/// ```
#[macro_export]
macro_rules! assert_failure_eq {
    ($outcome:expr, $expected:expr) => {
        match $outcome {
            $crate::ValueOrError::Failure(error) => {
                assert_eq!(error, $expected);
            }
            $crate::ValueOrError::Success(v) => {
                panic!(
                    "Expected Failure with error {:?}, got Success: {:?}",
                    $expected, v
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::ValueOrError;

#[cfg(feature = "proptest")]
impl<V, E> Arbitrary for ValueOrError<V, E>
where
    V: Arbitrary + 'static,
    E: Arbitrary + 'static,
    V::Strategy: 'static,
    E::Strategy: 'static,
{
    type Parameters = (V::Parameters, E::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (v_params, e_params) = args;
        prop_oneof![
            any_with::<V>(v_params).prop_map(ValueOrError::success),
            any_with::<E>(e_params).prop_map(ValueOrError::failure),
        ]
        .boxed()
    }
}
