//! Tokio Runtime Bridge
//!
//! GPUI uses a smol-like executor, while remote data sources are written
//! against tokio. This module runs tokio futures on a shared runtime and
//! hands the result back to the awaiting GPUI task.
//!
//! ## Pattern
//!
//! ```text
//! GPUI async task
//!       │
//!       ▼
//! run_in_tokio(async { ... })
//!       │
//!       ▼
//! tokio::Runtime::spawn()
//!       │
//!       ▼
//! Result returned to GPUI
//! ```

use std::future::Future;
use std::sync::OnceLock;

use tokio::runtime::{Builder, Runtime};
use tracing::error;

use crate::error::{Error, Result};

/// Global tokio runtime instance; `None` if it failed to start
static TOKIO_RUNTIME: OnceLock<Option<Runtime>> = OnceLock::new();

fn get_runtime() -> Result<&'static Runtime> {
    TOKIO_RUNTIME
        .get_or_init(|| {
            Builder::new_multi_thread()
                .worker_threads(2)
                .thread_name("vivid-tokio")
                .enable_all()
                .build()
                .map_err(|e| error!("Failed to create tokio runtime: {}", e))
                .ok()
        })
        .as_ref()
        .ok_or_else(|| Error::Invalid {
            message: "tokio runtime unavailable".to_string(),
        })
}

/// Execute a future in the tokio runtime and wait for the result
///
/// # Example
///
/// ```ignore
/// let page = run_in_tokio(async move {
///     client.query(request).await
/// }).await??;
/// ```
pub async fn run_in_tokio<F, T>(future: F) -> Result<T>
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let handle = get_runtime()?.spawn(future);
    match handle.await {
        Ok(result) => Ok(result),
        Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
        Err(e) => Err(Error::fetch(format!("tokio task cancelled: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_run_in_tokio_from_foreign_executor() {
        let value = futures::executor::block_on(run_in_tokio(async {
            tokio::time::sleep(Duration::from_millis(5)).await;
            21 * 2
        }))
        .unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_run_in_tokio_reuses_runtime() {
        let first = futures::executor::block_on(run_in_tokio(async {
            std::thread::current().name().map(str::to_string)
        }))
        .unwrap();
        let second = futures::executor::block_on(run_in_tokio(async { 7 })).unwrap();
        assert_eq!(first.as_deref(), Some("vivid-tokio"));
        assert_eq!(second, 7);
    }
}
