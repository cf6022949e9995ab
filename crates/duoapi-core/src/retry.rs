//! Rate-limit retry with exponential backoff and jitter.
//!
//! Only the rate-limit status triggers a retry. Transport failures surface
//! immediately and every other status is returned as-is. The loop is bounded
//! by the backoff interval rather than an attempt count: once the interval
//! passes the ceiling, the last response is returned even if it is still a
//! rate-limit response.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::DuoError;
use crate::http_client::{HttpClient, HttpRequest, HttpResponse};

/// Backoff parameters for rate-limited calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Interval slept before the first retry.
    pub initial_backoff: Duration,
    /// Largest interval that is still slept; anything beyond ends the call.
    pub max_backoff: Duration,
    /// Multiplier applied after each sleep.
    pub factor: u32,
    /// Upper bound (exclusive) of the random extra added to each sleep.
    pub max_jitter: Duration,
    /// Status code the provider uses for rate limiting.
    pub rate_limit_status: u16,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            initial_backoff: Duration::from_millis(1_000),
            max_backoff: Duration::from_millis(32_000),
            factor: 2,
            max_jitter: Duration::from_millis(1_000),
            rate_limit_status: 429,
        }
    }
}

impl RetryConfig {
    /// Random jitter in `[0, max_jitter)` at millisecond granularity.
    pub fn jitter(&self) -> Duration {
        let max_ms = self.max_jitter.as_millis() as u64;
        if max_ms == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(fastrand::u64(0..max_ms))
    }

    pub const fn is_rate_limited(&self, status: u16) -> bool {
        status == self.rate_limit_status
    }
}

/// Backoff progress for one logical call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackoffState {
    current: Duration,
    max: Duration,
    factor: u32,
}

impl BackoffState {
    pub fn new(config: &RetryConfig) -> Self {
        Self {
            current: config.initial_backoff,
            max: config.max_backoff,
            factor: config.factor,
        }
    }

    pub const fn current(&self) -> Duration {
        self.current
    }

    pub fn exhausted(&self) -> bool {
        self.current > self.max
    }

    pub fn advance(&mut self) {
        self.current = self.current.saturating_mul(self.factor);
    }
}

/// Suspends the calling task between attempts.
pub trait Sleeper: Send + Sync {
    fn sleep<'a>(&'a self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    fn sleep<'a>(&'a self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        Box::pin(tokio::time::sleep(duration))
    }
}

/// Sends requests and retries them while the provider is rate limiting.
///
/// Holds no per-call state, so one executor serves any number of concurrent
/// calls.
#[derive(Clone)]
pub struct RetryExecutor {
    client: Arc<dyn HttpClient>,
    sleeper: Arc<dyn Sleeper>,
    config: RetryConfig,
}

impl RetryExecutor {
    pub fn new(
        client: Arc<dyn HttpClient>,
        sleeper: Arc<dyn Sleeper>,
        config: RetryConfig,
    ) -> Self {
        Self {
            client,
            sleeper,
            config,
        }
    }

    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    pub(crate) fn with_client(mut self, client: Arc<dyn HttpClient>) -> Self {
        self.client = client;
        self
    }

    pub(crate) fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Executes `request`, backing off while the response is rate limited.
    ///
    /// # Errors
    ///
    /// Returns [`DuoError::Transport`] on the first transport failure; it is
    /// never retried.
    pub async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, DuoError> {
        let mut backoff = BackoffState::new(&self.config);

        loop {
            debug!(method = %request.method, url = %request.url, "sending request");
            let response = self.client.execute(request.clone()).await?;
            debug!(status = response.status, url = %request.url, "received response");

            if backoff.exhausted() || !self.config.is_rate_limited(response.status) {
                return Ok(response);
            }

            let delay = backoff.current() + self.config.jitter();
            warn!(
                url = %request.url,
                backoff_ms = backoff.current().as_millis() as u64,
                delay_ms = delay.as_millis() as u64,
                "rate limited, backing off"
            );
            self.sleeper.sleep(delay).await;
            backoff.advance();
        }
    }
}
