//! Bounded polling of eventually-consistent backend state.
//!
//! A [`PollingEngine`] drives a caller-supplied async operation until it
//! succeeds, a fixed attempt budget runs out, or the poll is cancelled.
//! Attempts are strictly sequential with a fixed delay between them; every
//! operation error is treated as retryable. The motivating case is an API
//! that answers 202 Accepted while a resource is still materializing.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::sleep;

use crate::core::config::{
    DEFAULT_INITIAL_POLL_DELAY, DEFAULT_MAX_NUMBER_OF_RETRIES, DEFAULT_RETRY_INTERVAL,
};
use crate::error::{LinkKitError, Result};

/// Timing configuration for a poll sequence.
#[derive(Debug, Clone)]
pub struct PollTimingOptions {
    /// Delay before the very first attempt. Default: 500ms
    pub initial_poll_delay: Duration,

    /// Attempt budget; the operation is invoked at most this many times.
    /// Default: 5
    pub max_number_of_retries: u32,

    /// Fixed delay between attempts. Default: 250ms
    pub retry_interval: Duration,
}

impl Default for PollTimingOptions {
    fn default() -> Self {
        Self {
            initial_poll_delay: DEFAULT_INITIAL_POLL_DELAY,
            max_number_of_retries: DEFAULT_MAX_NUMBER_OF_RETRIES,
            retry_interval: DEFAULT_RETRY_INTERVAL,
        }
    }
}

impl PollTimingOptions {
    pub fn builder() -> PollTimingOptionsBuilder {
        PollTimingOptionsBuilder::default()
    }
}

/// Builder for PollTimingOptions.
#[derive(Debug, Default)]
pub struct PollTimingOptionsBuilder {
    initial_poll_delay: Option<Duration>,
    max_number_of_retries: Option<u32>,
    retry_interval: Option<Duration>,
}

impl PollTimingOptionsBuilder {
    /// Set the delay before the first attempt.
    pub fn initial_poll_delay(mut self, delay: Duration) -> Self {
        self.initial_poll_delay = Some(delay);
        self
    }

    /// Set the attempt budget.
    pub fn max_number_of_retries(mut self, retries: u32) -> Self {
        self.max_number_of_retries = Some(retries);
        self
    }

    /// Set the fixed delay between attempts.
    pub fn retry_interval(mut self, interval: Duration) -> Self {
        self.retry_interval = Some(interval);
        self
    }

    /// Build the options.
    pub fn build(self) -> PollTimingOptions {
        PollTimingOptions {
            initial_poll_delay: self.initial_poll_delay.unwrap_or(DEFAULT_INITIAL_POLL_DELAY),
            max_number_of_retries: self
                .max_number_of_retries
                .unwrap_or(DEFAULT_MAX_NUMBER_OF_RETRIES),
            retry_interval: self.retry_interval.unwrap_or(DEFAULT_RETRY_INTERVAL),
        }
    }
}

/// The operation a poll sequence repeats.
pub type PollOperation<T> =
    Arc<dyn Fn() -> Pin<Box<dyn Future<Output = Result<T>> + Send>> + Send + Sync>;

/// Drives one bounded poll sequence against an async operation.
///
/// Each engine owns exactly one logical poll session: its attempt counter
/// starts at zero and `start` consumes the engine, so re-polling the same
/// resource means constructing a fresh engine.
pub struct PollingEngine<T> {
    operation: PollOperation<T>,
    options: PollTimingOptions,
}

impl<T: Send + 'static> PollingEngine<T> {
    /// Create an engine around an async operation.
    pub fn new<F, Fut>(operation: F, options: PollTimingOptions) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        Self {
            operation: Arc::new(move || Box::pin(operation())),
            options,
        }
    }

    /// Create an engine with default timing.
    pub fn with_defaults<F, Fut>(operation: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        Self::new(operation, PollTimingOptions::default())
    }

    /// Create an engine from an already-boxed operation.
    pub fn from_operation(operation: PollOperation<T>, options: PollTimingOptions) -> Self {
        Self { operation, options }
    }

    /// Begin the poll sequence.
    ///
    /// Consumes the engine and returns a handle to the spawned task. The
    /// task sleeps `initial_poll_delay`, then invokes the operation up to
    /// `max_number_of_retries` times with `retry_interval` between
    /// attempts, finishing on the first success. The task keeps running if
    /// the handle is dropped; [`PollHandle::abort`] is the cancellation
    /// path.
    pub fn start(self) -> PollHandle<T> {
        let PollingEngine { operation, options } = self;

        let task = tokio::spawn(async move {
            sleep(options.initial_poll_delay).await;

            let mut last_error: Option<LinkKitError> = None;

            for attempt in 1..=options.max_number_of_retries {
                match operation().await {
                    Ok(value) => {
                        tracing::debug!(attempt, "Poll succeeded");
                        return Ok(value);
                    }
                    Err(e) => {
                        tracing::debug!(
                            attempt,
                            budget = options.max_number_of_retries,
                            error = %e,
                            "Poll attempt failed, will retry"
                        );
                        last_error = Some(e);

                        // No sleep after the final attempt
                        if attempt < options.max_number_of_retries {
                            sleep(options.retry_interval).await;
                        }
                    }
                }
            }

            tracing::debug!(
                budget = options.max_number_of_retries,
                "Poll exhausted its attempt budget"
            );
            Err(LinkKitError::max_retries_reached(
                options.max_number_of_retries,
                last_error,
            ))
        });

        PollHandle { task }
    }
}

/// Caller-owned handle to an in-flight poll sequence.
///
/// Dropping the handle detaches the sequence: the spawned task still runs
/// to completion and releases its resources on its own.
pub struct PollHandle<T> {
    task: JoinHandle<Result<T>>,
}

impl<T> PollHandle<T> {
    /// Await the terminal result of the poll sequence.
    ///
    /// Resolves exactly once with the success value, the max-retries
    /// error, or `PollingCancelled` if the handle was aborted.
    pub async fn join(self) -> Result<T> {
        match self.task.await {
            Ok(outcome) => outcome,
            Err(e) if e.is_cancelled() => Err(LinkKitError::cancelled()),
            Err(e) => std::panic::resume_unwind(e.into_panic()),
        }
    }

    /// Cancel the poll sequence.
    ///
    /// Any pending delay or in-flight attempt is abandoned and no further
    /// attempts run. A subsequent `join` yields `PollingCancelled`.
    pub fn abort(&self) {
        self.task.abort();
    }

    /// Whether the poll sequence has reached a terminal state.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}
