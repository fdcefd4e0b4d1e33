//! Per-call cancellation and deadline.
//!
//! Every operation has a `*_with_context` form that takes a
//! [`RequestContext`]; the plain form uses [`RequestContext::background`],
//! which never cancels and has no deadline.

use crate::errors::TransportError;
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Cancellation signal and deadline for one call
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    cancellation: Option<CancellationToken>,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// Context that never cancels and has no deadline
    pub fn background() -> Self {
        Self::default()
    }

    /// Context cancelled by `token`
    pub fn with_cancellation(token: CancellationToken) -> Self {
        Self {
            cancellation: Some(token),
            deadline: None,
        }
    }

    /// Context that expires `timeout` from now
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::background().deadline(Instant::now() + timeout)
    }

    /// Set the cancellation token
    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Set an absolute deadline
    pub fn deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// The deadline, if any
    pub fn deadline_at(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether the token has already fired
    pub fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(|token| token.is_cancelled())
    }

    /// Time left before the deadline
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    /// Drive `fut` until it completes, the token fires, or the deadline passes.
    ///
    /// Cancellation wins over a result that becomes ready at the same poll.
    pub async fn run<F, T>(&self, fut: F) -> Result<T, TransportError>
    where
        F: Future<Output = Result<T, TransportError>>,
    {
        if self.is_cancelled() {
            return Err(TransportError::Cancelled);
        }

        let bounded = async {
            match self.deadline {
                Some(deadline) if deadline <= Instant::now() => Err(TransportError::Timeout),
                Some(deadline) => match tokio::time::timeout_at(deadline, fut).await {
                    Ok(result) => result,
                    Err(_) => Err(TransportError::Timeout),
                },
                None => fut.await,
            }
        };

        match &self.cancellation {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => Err(TransportError::Cancelled),
                    result = bounded => result,
                }
            }
            None => bounded.await,
        }
    }
}
