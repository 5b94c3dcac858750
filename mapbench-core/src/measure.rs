//! Monotonic Timing
//!
//! All measurements are taken from `std::time::Instant`, which never goes
//! backwards and ignores wall-clock adjustments.

use crate::strategy::Strategy;
use crate::workload::Workload;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

// ─── Timer ───────────────────────────────────────────────────────────────────

/// Timer for a single measured operation
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start a new timer
    #[inline(always)]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Time elapsed since the timer was started
    #[inline(always)]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Stop the timer and return the elapsed duration
    #[inline(always)]
    pub fn stop(self) -> Duration {
        self.elapsed()
    }
}

/// Run `op` exactly once and return its result together with the elapsed time.
///
/// The result goes through `black_box` before the clock is read a second time,
/// so the measured work cannot be optimized away or moved past the stop.
#[inline]
pub fn time_operation<R, F>(op: F) -> (R, Duration)
where
    F: FnOnce() -> R,
{
    let timer = Timer::start();
    let result = std::hint::black_box(op());
    let elapsed = timer.stop();
    (result, elapsed)
}

// ─── TimingSample ────────────────────────────────────────────────────────────

/// One measured run of a strategy over a workload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingSample {
    /// Workload that was mapped
    pub workload: Workload,
    /// Strategy used to build the output
    pub strategy: Strategy,
    /// Number of elements mapped
    pub elements: usize,
    /// Elapsed wall-clock time in nanoseconds
    pub elapsed_ns: u64,
}

impl TimingSample {
    /// Record a sample from a measured duration
    pub fn new(workload: Workload, strategy: Strategy, elements: usize, elapsed: Duration) -> Self {
        Self {
            workload,
            strategy,
            elements,
            elapsed_ns: elapsed.as_nanos() as u64,
        }
    }

    /// Human-readable strategy label
    pub fn label(&self) -> &'static str {
        self.strategy.label()
    }

    /// Elapsed time as a `Duration`
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.elapsed_ns)
    }

    /// Elapsed time in seconds
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer() {
        let timer = Timer::start();
        std::thread::sleep(Duration::from_millis(10));
        let elapsed = timer.stop();

        // Should be at least 5ms
        assert!(elapsed >= Duration::from_millis(5));
    }

    #[test]
    fn test_time_operation_returns_result() {
        let (value, elapsed) = time_operation(|| (1..=10u64).sum::<u64>());
        assert_eq!(value, 55);
        assert!(elapsed >= Duration::ZERO);
    }

    #[test]
    fn test_time_operation_runs_once() {
        let mut calls = 0;
        let _ = time_operation(|| calls += 1);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_time_operation_measures_work() {
        let (_, elapsed) = time_operation(|| std::thread::sleep(Duration::from_millis(10)));
        assert!(elapsed >= Duration::from_millis(5));
        // Accounting for scheduling
        assert!(elapsed < Duration::from_secs(5));
    }

    #[test]
    fn test_sample_conversions() {
        let sample = TimingSample::new(
            Workload::Integers,
            Strategy::Collect,
            4,
            Duration::from_micros(1_500),
        );
        assert_eq!(sample.elapsed_ns, 1_500_000);
        assert_eq!(sample.elapsed(), Duration::from_micros(1_500));
        assert!((sample.elapsed_secs() - 0.0015).abs() < 1e-12);
        assert_eq!(sample.label(), "list comp");
    }
}
