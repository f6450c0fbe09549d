//! # RTT snapshot reported by `updated_metrics`.
//!
//! The estimator producing these values lives in the transport's loss
//! recovery; tracers only ever see this read-only snapshot.

use std::time::Duration;

/// A point-in-time view of the connection's RTT estimator.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct RttStats {
    latest: Duration,
    min: Duration,
    smoothed: Duration,
    mean_deviation: Duration,
}

impl RttStats {
    /// Builds a snapshot from the estimator's current values.
    #[must_use]
    pub fn new(latest: Duration, min: Duration, smoothed: Duration, mean_deviation: Duration) -> Self {
        Self {
            latest,
            min,
            smoothed,
            mean_deviation,
        }
    }

    /// The most recent RTT sample.
    #[must_use]
    pub fn latest(&self) -> Duration {
        self.latest
    }

    /// The minimum RTT observed over the connection's lifetime.
    #[must_use]
    pub fn min(&self) -> Duration {
        self.min
    }

    /// The exponentially-weighted smoothed RTT.
    #[must_use]
    pub fn smoothed(&self) -> Duration {
        self.smoothed
    }

    /// The mean deviation of observed samples from the smoothed RTT.
    #[must_use]
    pub fn mean_deviation(&self) -> Duration {
        self.mean_deviation
    }
}
