// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Process-wide pacing for outbound search calls
//!
//! Every search goes through one shared [`Throttle`]. A call is only let
//! through once `MIN_INTERVAL` has passed since the previous grant, anywhere
//! in the process.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;

/// Minimum spacing between two outbound search calls
pub const MIN_INTERVAL: Duration = Duration::from_secs(1);

/// Time source used by the throttle
#[async_trait]
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;

    async fn sleep(&self, duration: Duration);
}

/// Clock backed by the tokio timer
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Shared gate enforcing a minimum interval between grants
pub struct Throttle {
    last_granted: Mutex<Option<Instant>>,
    interval: Duration,
    clock: Arc<dyn Clock>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self::with_clock(interval, Arc::new(TokioClock))
    }

    pub fn with_clock(interval: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            last_granted: Mutex::new(None),
            interval,
            clock,
        }
    }

    /// Wait until the interval since the last grant has elapsed, then grant.
    ///
    /// The lock is held across the wait so the read of the last grant and
    /// its update form one step; tokio's mutex queues waiters in order.
    pub async fn acquire(&self) {
        let mut last_granted = self.last_granted.lock().await;

        if let Some(last) = *last_granted {
            let elapsed = self.clock.now().saturating_duration_since(last);
            if elapsed < self.interval {
                let wait = self.interval - elapsed;
                debug!("Search throttle waiting {:.2}s", wait.as_secs_f64());
                self.clock.sleep(wait).await;
            }
        }

        *last_granted = Some(self.clock.now());
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(MIN_INTERVAL)
    }
}
