//! Cancellable futures tied to an owner's lifetime.
//!
//! A view that starts a fetch keeps the [`TaskGuard`]; when the view goes
//! away the guard is dropped, the future is aborted at its next poll, and its
//! continuation (which would write into disposed view state) never runs.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

use std::future::Future;

use futures::future::{AbortHandle, abortable};

/// Aborts the paired future when dropped or cancelled.
#[derive(Debug)]
pub struct TaskGuard {
    handle: AbortHandle,
}

impl TaskGuard {
    /// Abort now instead of at drop.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.handle.is_aborted()
    }
}

impl Drop for TaskGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Wrap `future` so it resolves to `None` once its guard is dropped.
pub fn cancellable<F>(future: F) -> (impl Future<Output = Option<F::Output>>, TaskGuard)
where
    F: Future,
{
    let (future, handle) = abortable(future);
    (async move { future.await.ok() }, TaskGuard { handle })
}
