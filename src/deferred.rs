//! Deferred (async) branching combinators.
//!
//! These mirror [`ValueOrError::run`] and [`ValueOrError::transform`] for
//! branch functions that return a [`Future`]. The dispatch itself is
//! synchronous: the matching branch function is called immediately and the
//! other one is dropped. What comes back is the branch's own future, either
//! as-is ([`run_async`](ValueOrError::run_async)) or with its output wrapped
//! into a new [`ValueOrError`] once it resolves
//! ([`transform_async`](ValueOrError::transform_async)).
//!
//! Nothing here is tied to an executor. The returned futures hold no state
//! besides the branch future, so dropping them (or aborting them through
//! [`futures::future::abortable`] or a runtime's task handle) drops the
//! branch future as well.
//!
//! # Example
//!
//! ```rust
//! use value_or_error::ValueOrError;
//!
//! # tokio_test::block_on(async {
//! let fetched: ValueOrError<u32, String> = ValueOrError::success(7);
//!
//! let rendered = fetched
//!     .transform_async(
//!         |id| async move { format!("user-{}", id) },
//!         |e| async move { format!("lookup failed: {}", e) },
//!     )
//!     .await;
//!
//! assert_eq!(rendered, ValueOrError::success("user-7".to_string()));
//! # });
//! ```

use std::future::Future;

use futures::future::{Either, FutureExt, Map};

use crate::ValueOrError;

/// Future returned by [`ValueOrError::run_async`].
///
/// This is the future produced by whichever branch ran, unwrapped. It is
/// `Unpin` or `Send` exactly when both branch futures are.
pub type RunFuture<FV, FE> = Either<FV, FE>;

/// Future returned by [`ValueOrError::transform_async`].
///
/// Resolves the branch future first, then wraps its output: `Success` for the
/// value branch, `Failure` for the error branch.
pub type TransformFuture<FV, FE, V2, E2> = Either<
    Map<FV, fn(V2) -> ValueOrError<V2, E2>>,
    Map<FE, fn(E2) -> ValueOrError<V2, E2>>,
>;

impl<V, E> ValueOrError<V, E> {
    /// Start exactly one of two async actions, chosen by the variant.
    ///
    /// The chosen branch function is called right away; the returned future
    /// is the one it produced.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::sync::{Arc, Mutex};
    /// use value_or_error::ValueOrError;
    ///
    /// # tokio_test::block_on(async {
    /// let audit = Arc::new(Mutex::new(Vec::new()));
    /// let saved: ValueOrError<u64, String> = ValueOrError::failure("conflict".to_string());
    ///
    /// let (on_ok, on_err) = (audit.clone(), audit.clone());
    /// saved
    ///     .run_async(
    ///         move |id| async move { on_ok.lock().unwrap().push(format!("saved {}", id)) },
    ///         move |e| async move { on_err.lock().unwrap().push(format!("rejected: {}", e)) },
    ///     )
    ///     .await;
    ///
    /// assert_eq!(*audit.lock().unwrap(), vec!["rejected: conflict"]);
    /// # });
    /// ```
    pub fn run_async<F, G, FV, FE>(self, on_value: F, on_error: G) -> RunFuture<FV, FE>
    where
        F: FnOnce(V) -> FV,
        G: FnOnce(E) -> FE,
        FV: Future<Output = ()>,
        FE: Future<Output = ()>,
    {
        match self {
            ValueOrError::Success(v) => Either::Left(on_value(v)),
            ValueOrError::Failure(e) => Either::Right(on_error(e)),
        }
    }

    /// Transform whichever payload is present with an async function.
    ///
    /// The branch future is awaited before wrapping, so the returned future
    /// resolves to a finished `ValueOrError<V2, E2>`. As with
    /// [`transform`](Self::transform), the value branch always yields a
    /// success and the error branch always yields a failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use value_or_error::ValueOrError;
    ///
    /// # tokio_test::block_on(async {
    /// let v: ValueOrError<i32, String> = ValueOrError::failure("bad".to_string());
    ///
    /// let out = v
    ///     .transform_async(|v| async move { v * 2 }, |e| async move { e + "!" })
    ///     .await;
    ///
    /// assert_eq!(out, ValueOrError::failure("bad!".to_string()));
    /// # });
    /// ```
    pub fn transform_async<V2, E2, F, G, FV, FE>(
        self,
        on_value: F,
        on_error: G,
    ) -> TransformFuture<FV, FE, V2, E2>
    where
        F: FnOnce(V) -> FV,
        G: FnOnce(E) -> FE,
        FV: Future<Output = V2>,
        FE: Future<Output = E2>,
    {
        match self {
            ValueOrError::Success(v) => {
                let wrap: fn(V2) -> ValueOrError<V2, E2> = ValueOrError::Success;
                Either::Left(on_value(v).map(wrap))
            }
            ValueOrError::Failure(e) => {
                let wrap: fn(E2) -> ValueOrError<V2, E2> = ValueOrError::Failure;
                Either::Right(on_error(e).map(wrap))
            }
        }
    }
}
