//! Per-call cancellation and deadline scope.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::error::{ApiError, Result};

/// Cancellation and deadline attached to a single dispatch.
///
/// Cloning is cheap; clones share the same cancellation token.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    token: Option<CancellationToken>,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// A context that is never cancelled and has no deadline.
    pub fn background() -> Self {
        Self::default()
    }

    /// Cancelled whenever `token` (or any of its parents) is cancelled.
    pub fn with_cancellation(token: CancellationToken) -> Self {
        Self {
            token: Some(token),
            deadline: None,
        }
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(existing) => existing.min(deadline),
            None => deadline,
        });
        self
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.as_ref().is_some_and(CancellationToken::is_cancelled)
    }

    /// Fails immediately if the context is already done.
    pub(crate) fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            return Err(ApiError::Cancelled);
        }
        if self.deadline.is_some_and(|d| d <= Instant::now()) {
            return Err(ApiError::DeadlineExceeded);
        }
        Ok(())
    }

    /// Drives `fut` to completion unless the context finishes first.
    ///
    /// Losing the race drops `fut`, which aborts the in-flight request.
    pub(crate) async fn run<F, T>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        self.check()?;

        let cancelled = async {
            match &self.token {
                Some(token) => token.cancelled().await,
                None => std::future::pending().await,
            }
        };
        let expired = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            biased;
            _ = cancelled => Err(ApiError::Cancelled),
            _ = expired => Err(ApiError::DeadlineExceeded),
            result = fut => result,
        }
    }
}
