//! Contract-violation error for accessing the wrong side of a [`ValueOrError`].
//!
//! Pattern matching on [`ValueOrError`] is the preferred way to read a payload,
//! since it cannot pick the wrong one. The checked accessors
//! ([`ValueOrError::value`], [`ValueOrError::error`] and their consuming
//! forms) exist for call sites where a match is awkward; they report a
//! [`WrongVariantAccess`] instead of handing back a default.
//!
//! [`ValueOrError`]: crate::ValueOrError
//! [`ValueOrError::value`]: crate::ValueOrError::value
//! [`ValueOrError::error`]: crate::ValueOrError::error

use std::fmt;

/// Which of the two states a [`ValueOrError`](crate::ValueOrError) holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Built with [`ValueOrError::success`](crate::ValueOrError::success).
    Success,
    /// Built with [`ValueOrError::failure`](crate::ValueOrError::failure).
    Failure,
}

impl Variant {
    /// Lowercase name used in messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Success => "success",
            Variant::Failure => "failure",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A payload accessor was called on an instance holding the other variant.
///
/// This is a defect in the calling code, not a modeled outcome.
///
/// # Example
///
/// ```rust
/// use value_or_error::{ValueOrError, Variant, WrongVariantAccess};
///
/// let failed: ValueOrError<i32, &str> = ValueOrError::failure("bad");
///
/// let err = failed.value().unwrap_err();
/// assert_eq!(err, WrongVariantAccess::new(Variant::Success, Variant::Failure));
/// assert_eq!(err.to_string(), "wrong variant access: expected success, found failure");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WrongVariantAccess {
    /// The variant the accessor requires.
    pub expected: Variant,
    /// The variant the instance actually holds.
    pub found: Variant,
}

impl WrongVariantAccess {
    /// Create a new WrongVariantAccess error.
    pub fn new(expected: Variant, found: Variant) -> Self {
        Self { expected, found }
    }
}

impl fmt::Display for WrongVariantAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "wrong variant access: expected {}, found {}",
            self.expected, self.found
        )
    }
}

impl std::error::Error for WrongVariantAccess {}
