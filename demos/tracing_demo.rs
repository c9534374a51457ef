//! Demonstrates tracing integration with ValueOrError
//!
//! Run with: cargo run --example tracing_demo --features tracing

use tracing::Instrument;
use value_or_error::prelude::*;

#[tokio::main]
async fn main() {
    // Set up tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    tracing::info!("Starting tracing demo");

    // Each outcome is recorded once as it passes through
    let checked = check_quota(3).trace_outcome("check_quota");
    let rejected = check_quota(12).trace_outcome("check_quota");

    // Deferred transforms are plain futures, so spans attach as usual
    let uploaded = checked
        .transform_async(upload, |e| async move { format!("not uploaded: {}", e) })
        .instrument(tracing::info_span!("upload", attempt = 1))
        .await
        .trace_outcome("upload");

    match uploaded {
        ValueOrError::Success(url) => tracing::info!("Workflow completed successfully: {}", url),
        ValueOrError::Failure(e) => tracing::error!("Workflow failed: {}", e),
    }

    rejected.run(
        |_| tracing::info!("unexpected success"),
        |e| tracing::info!(error = %e, "second request rejected as expected"),
    );
}

fn check_quota(files: u32) -> ValueOrError<u32, String> {
    if files <= 10 {
        ValueOrError::success(files)
    } else {
        ValueOrError::failure(format!("{} files exceeds quota of 10", files))
    }
}

async fn upload(files: u32) -> String {
    tracing::debug!(files, "uploading");
    format!("https://files.example.invalid/batch/{}", files)
}
