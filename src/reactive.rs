//! Reactive (stream) branching combinators.
//!
//! Stream counterparts of [`ValueOrError::run`] and
//! [`ValueOrError::transform`]. The branch function is picked and called
//! once, synchronously; it returns a [`Stream`] which the caller then drives.
//! [`transform_stream`](ValueOrError::transform_stream) wraps every item that
//! stream yields, one for one, without buffering or reordering.
//!
//! Unsubscribing is dropping: the returned stream owns the branch stream and
//! nothing else, so dropping it (or aborting it via
//! [`futures::stream::abortable`]) drops the branch stream too.
//!
//! # Example
//!
//! ```rust
//! use futures::stream::{self, StreamExt};
//! use value_or_error::ValueOrError;
//!
//! # tokio_test::block_on(async {
//! let page: ValueOrError<Vec<u32>, String> = ValueOrError::success(vec![1, 2, 3]);
//!
//! let rows: Vec<_> = page
//!     .transform_stream(
//!         |ids| stream::iter(ids).map(|id| format!("row {}", id)),
//!         |e| stream::once(async move { e }),
//!     )
//!     .collect()
//!     .await;
//!
//! assert_eq!(
//!     rows,
//!     vec![
//!         ValueOrError::success("row 1".to_string()),
//!         ValueOrError::success("row 2".to_string()),
//!         ValueOrError::success("row 3".to_string()),
//!     ]
//! );
//! # });
//! ```

use futures::future::Either;
use futures::stream::{Map, Stream, StreamExt};

use crate::ValueOrError;

/// Stream returned by [`ValueOrError::run_stream`]: the branch's own stream.
pub type RunStream<SV, SE> = Either<SV, SE>;

/// Stream returned by [`ValueOrError::transform_stream`].
///
/// Every item of the value branch's stream comes out as `Success`, every item
/// of the error branch's stream as `Failure`. `size_hint` is the branch
/// stream's.
pub type TransformStream<SV, SE, V2, E2> = Either<
    Map<SV, fn(V2) -> ValueOrError<V2, E2>>,
    Map<SE, fn(E2) -> ValueOrError<V2, E2>>,
>;

impl<V, E> ValueOrError<V, E> {
    /// Start exactly one of two stream-producing actions, chosen by the variant.
    ///
    /// # Example
    ///
    /// ```rust
    /// use futures::stream::{self, StreamExt};
    /// use value_or_error::ValueOrError;
    ///
    /// # tokio_test::block_on(async {
    /// let v: ValueOrError<usize, &str> = ValueOrError::success(3);
    ///
    /// let ticks = v
    ///     .run_stream(
    ///         |n| stream::repeat(()).take(n),
    ///         |_| stream::repeat(()).take(0),
    ///     )
    ///     .count()
    ///     .await;
    ///
    /// assert_eq!(ticks, 3);
    /// # });
    /// ```
    pub fn run_stream<F, G, SV, SE>(self, on_value: F, on_error: G) -> RunStream<SV, SE>
    where
        F: FnOnce(V) -> SV,
        G: FnOnce(E) -> SE,
        SV: Stream<Item = ()>,
        SE: Stream<Item = ()>,
    {
        match self {
            ValueOrError::Success(v) => Either::Left(on_value(v)),
            ValueOrError::Failure(e) => Either::Right(on_error(e)),
        }
    }

    /// Transform whichever payload is present into a stream of new instances.
    ///
    /// # Example
    ///
    /// ```rust
    /// use futures::stream::{self, StreamExt};
    /// use value_or_error::ValueOrError;
    ///
    /// # tokio_test::block_on(async {
    /// let v: ValueOrError<i32, String> = ValueOrError::failure("timeout".to_string());
    ///
    /// let out: Vec<ValueOrError<i32, usize>> = v
    ///     .transform_stream(
    ///         |n| stream::iter(vec![n, n + 1]),
    ///         |e| stream::iter(vec![e.len(), 0]),
    ///     )
    ///     .collect()
    ///     .await;
    ///
    /// assert_eq!(out, vec![ValueOrError::failure(7), ValueOrError::failure(0)]);
    /// # });
    /// ```
    pub fn transform_stream<V2, E2, F, G, SV, SE>(
        self,
        on_value: F,
        on_error: G,
    ) -> TransformStream<SV, SE, V2, E2>
    where
        F: FnOnce(V) -> SV,
        G: FnOnce(E) -> SE,
        SV: Stream<Item = V2>,
        SE: Stream<Item = E2>,
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

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::mpsc;
    use futures::stream;
    use std::cell::Cell;

    #[tokio::test]
    async fn test_transform_stream_maps_each_item_in_order() {
        let v: ValueOrError<Vec<i32>, String> = ValueOrError::success(vec![1, 2, 3]);

        let out: Vec<_> = v
            .transform_stream(
                |items| stream::iter(items).map(|n| n * 10),
                |e| stream::iter(vec![e]),
            )
            .collect()
            .await;

        assert_eq!(
            out,
            vec![
                ValueOrError::success(10),
                ValueOrError::success(20),
                ValueOrError::success(30),
            ]
        );
    }

    #[tokio::test]
    async fn test_transform_stream_failure_items_stay_failures() {
        let v: ValueOrError<i32, &str> = ValueOrError::failure("a,b");

        let out: Vec<ValueOrError<i32, String>> = v
            .transform_stream(
                |n| stream::iter(vec![n]),
                |e| stream::iter(e.split(',').map(str::to_uppercase).collect::<Vec<_>>()),
            )
            .collect()
            .await;

        assert_eq!(
            out,
            vec![
                ValueOrError::failure("A".to_string()),
                ValueOrError::failure("B".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_transform_stream_keeps_duplicates() {
        let v: ValueOrError<(), ()> = ValueOrError::success(());

        let out: Vec<ValueOrError<u8, ()>> = v
            .transform_stream(|_| stream::iter(vec![7, 7, 7]), |_| stream::empty())
            .collect()
            .await;

        assert_eq!(out, vec![ValueOrError::success(7); 3]);
    }

    #[tokio::test]
    async fn test_transform_stream_empty_branch() {
        let v: ValueOrError<i32, String> = ValueOrError::success(1);

        let out: Vec<ValueOrError<i32, String>> = v
            .transform_stream(|_| stream::empty(), |e| stream::iter(vec![e]))
            .collect()
            .await;

        assert!(out.is_empty());
    }

    #[test]
    fn test_only_one_branch_function_called() {
        let values = Cell::new(0);
        let errors = Cell::new(0);

        let _stream = ValueOrError::<i32, i32>::failure(1).transform_stream(
            |v| {
                values.set(values.get() + 1);
                stream::iter(vec![v])
            },
            |e| {
                errors.set(errors.get() + 1);
                stream::iter(vec![e])
            },
        );

        assert_eq!((values.get(), errors.get()), (0, 1));
    }

    #[test]
    #[should_panic(expected = "item 2 exploded")]
    fn test_branch_panic_while_polling_reaches_caller() {
        let mut s = ValueOrError::<i32, i32>::success(3).transform_stream(
            |n| {
                stream::iter(1..=n).map(|i| {
                    if i == 2 {
                        panic!("item 2 exploded");
                    }
                    i
                })
            },
            |e| stream::iter(vec![e]),
        );

        // Dispatch and the first item are fine; the panic surfaces on the next poll
        assert_eq!(
            futures::executor::block_on(s.next()),
            Some(ValueOrError::success(1))
        );
        let _ = futures::executor::block_on(s.next());
    }

    #[test]
    fn test_size_hint_is_forwarded() {
        let s = ValueOrError::<i32, i32>::success(0)
            .transform_stream(|_| stream::iter(vec![1, 2, 3, 4]), |e| stream::iter(vec![e]));
        assert_eq!(s.size_hint(), (4, Some(4)));
    }

    #[tokio::test]
    async fn test_run_stream_error_branch() {
        let v: ValueOrError<usize, usize> = ValueOrError::failure(2);

        let ticks = v
            .run_stream(
                |n| stream::repeat(()).take(n * 100),
                |n| stream::repeat(()).take(n),
            )
            .count()
            .await;

        assert_eq!(ticks, 2);
    }

    #[tokio::test]
    async fn test_emissions_arrive_as_they_are_sent() {
        let (tx, rx) = mpsc::unbounded::<i32>();

        let mut s = ValueOrError::<(), String>::success(())
            .transform_stream(move |_| rx, |e| stream::iter(vec![e]));

        tx.unbounded_send(1).unwrap();
        assert_eq!(s.next().await, Some(ValueOrError::success(1)));

        tx.unbounded_send(2).unwrap();
        tx.unbounded_send(3).unwrap();
        assert_eq!(s.next().await, Some(ValueOrError::success(2)));
        assert_eq!(s.next().await, Some(ValueOrError::success(3)));

        drop(tx);
        assert_eq!(s.next().await, None);
    }

    #[tokio::test]
    async fn test_dropping_transform_stream_unsubscribes() {
        let (tx, rx) = mpsc::unbounded::<i32>();

        let mut s = ValueOrError::<(), String>::success(())
            .transform_stream(move |_| rx, |e| stream::iter(vec![e]));

        tx.unbounded_send(1).unwrap();
        assert_eq!(s.next().await, Some(ValueOrError::success(1)));
        assert!(!tx.is_closed());

        drop(s);
        assert!(tx.is_closed());
    }

    #[tokio::test]
    async fn test_aborting_run_stream_unsubscribes() {
        let (tx, rx) = mpsc::unbounded::<()>();

        let (s, handle) = stream::abortable(
            ValueOrError::<(), ()>::failure(()).run_stream(|_| stream::empty(), move |_| rx),
        );

        tx.unbounded_send(()).unwrap();
        handle.abort();

        assert_eq!(s.count().await, 0);
        assert!(tx.is_closed());
    }
}
