//! # value-or-error
//!
//! A container for the outcome of a computation that holds exactly one of a
//! success value or a failure value, never both and never neither.
//!
//! ## Philosophy
//!
//! Reading a result field before checking whether the computation succeeded
//! is a whole class of bugs. [`ValueOrError`] removes it by making the
//! payload reachable only through the variant that holds it, and by routing
//! every transformation through one dispatch: look at the variant once, call
//! exactly one of two branch functions.
//!
//! That dispatch comes in three computational models:
//!
//! | Model | Action | Transform |
//! |-------|--------|-----------|
//! | Synchronous | [`run`](ValueOrError::run) | [`transform`](ValueOrError::transform) |
//! | Deferred ([`Future`](std::future::Future)) | [`run_async`](ValueOrError::run_async) | [`transform_async`](ValueOrError::transform_async) |
//! | Reactive ([`Stream`](futures::Stream)) | [`run_stream`](ValueOrError::run_stream) | [`transform_stream`](ValueOrError::transform_stream) |
//!
//! ## Quick Example
//!
//! ```rust
//! use value_or_error::ValueOrError;
//!
//! #[derive(Debug, PartialEq)]
//! enum ServiceError {
//!     Unavailable(String),
//! }
//!
//! fn read_sensor(id: u8) -> ValueOrError<f64, std::io::ErrorKind> {
//!     if id == 0 {
//!         ValueOrError::failure(std::io::ErrorKind::NotFound)
//!     } else {
//!         ValueOrError::success(21.5)
//!     }
//! }
//!
//! // Re-shape the low-level error without touching the value
//! let reading = read_sensor(0).transform(
//!     |celsius| celsius,
//!     |kind| ServiceError::Unavailable(format!("{:?}", kind)),
//! );
//!
//! match reading {
//!     ValueOrError::Success(celsius) => println!("{} °C", celsius),
//!     ValueOrError::Failure(e) => println!("sensor error: {:?}", e),
//! }
//! ```
//!
//! ## Features
//!
//! - `tracing`: `tracing::TracingExt` for logging outcomes as structured events
//! - `proptest`: `Arbitrary` for [`ValueOrError`], generating both variants

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod deferred;
pub mod error;
pub mod reactive;
pub mod testing;
#[cfg(feature = "tracing")]
pub mod tracing;
pub mod value_or_error;

// Re-exports
pub use deferred::{RunFuture, TransformFuture};
pub use error::{Variant, WrongVariantAccess};
pub use reactive::{RunStream, TransformStream};
pub use value_or_error::ValueOrError;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Variant, WrongVariantAccess};
    #[cfg(feature = "tracing")]
    pub use crate::tracing::TracingExt;
    pub use crate::value_or_error::ValueOrError;
}
