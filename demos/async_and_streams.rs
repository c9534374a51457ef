//! Async and Stream Combinators Example
//!
//! Demonstrates the deferred and reactive branching combinators:
//! - run_async / transform_async with tokio futures
//! - run_stream / transform_stream with futures streams
//! - Cancellation by dropping (timeouts, take)
//!
//! Run with: cargo run --example async_and_streams

use std::time::Duration;

use futures::stream::{self, StreamExt};
use value_or_error::ValueOrError;

#[derive(Debug, Clone, PartialEq)]
struct Session {
    user: String,
}

#[derive(Debug)]
enum AuthError {
    Expired,
}

async fn authenticate(token: &str) -> ValueOrError<Session, AuthError> {
    tokio::time::sleep(Duration::from_millis(5)).await;
    if token == "valid" {
        ValueOrError::success(Session {
            user: "ada".to_string(),
        })
    } else {
        ValueOrError::failure(AuthError::Expired)
    }
}

async fn load_profile(session: Session) -> String {
    tokio::time::sleep(Duration::from_millis(5)).await;
    format!("profile of {}", session.user)
}

#[tokio::main]
async fn main() {
    println!("Async and Stream Examples");
    println!("=========================\n");

    // Example 1: transform_async awaits the branch, then wraps it
    println!("Example 1: transform_async");
    println!("--------------------------");
    for token in ["valid", "stale"] {
        let profile = authenticate(token)
            .await
            .transform_async(load_profile, |e| async move {
                format!("login required ({:?})", e)
            })
            .await;
        println!("  {}: {:?}", token, profile);
    }

    // Example 2: run_async hands back the branch's own future
    println!("\nExample 2: run_async");
    println!("--------------------");
    authenticate("stale")
        .await
        .run_async(
            |session| async move { println!("  welcome back, {}", session.user) },
            |e| async move { println!("  redirecting to login: {:?}", e) },
        )
        .await;

    // Example 3: a timeout drops the branch future, cancelling it
    println!("\nExample 3: Timeout cancels the branch");
    println!("-------------------------------------");
    let slow = authenticate("valid").await.transform_async(
        |session| async move {
            tokio::time::sleep(Duration::from_secs(5)).await;
            session.user
        },
        |e| async move { e },
    );
    match tokio::time::timeout(Duration::from_millis(20), slow).await {
        Ok(outcome) => println!("  finished: {:?}", outcome),
        Err(_) => println!("  timed out, branch future dropped"),
    }

    // Example 4: transform_stream re-wraps each emission
    println!("\nExample 4: transform_stream");
    println!("---------------------------");
    let events: Vec<_> = authenticate("valid")
        .await
        .transform_stream(
            |session| {
                stream::iter(["login", "view", "logout"])
                    .map(move |action| format!("{} {}", session.user, action))
            },
            |e| stream::once(async move { format!("{:?}", e) }),
        )
        .collect()
        .await;
    for event in events {
        println!("  {:?}", event);
    }

    // Example 5: run_stream, unsubscribing early with take
    println!("\nExample 5: run_stream with take");
    println!("-------------------------------");
    let heartbeats = authenticate("valid")
        .await
        .run_stream(
            |_| stream::repeat(()),
            |_| stream::repeat(()).take(0),
        )
        .take(3)
        .count()
        .await;
    println!("  received {} heartbeats before unsubscribing", heartbeats);
}
