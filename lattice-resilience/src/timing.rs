//! Per-operation latency recorder.
//!
//! Keeps a bounded rolling window (last 100 samples) per named operation
//! and answers count/avg/min/max/p95 on demand. Ring-buffer behavior, no
//! background threads.

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use lattice_core::constants::TIMER_HISTORY;

/// Summary statistics over the retained samples of one operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingStats {
    pub count: usize,
    pub avg_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
    pub p95_ms: f64,
}

/// Named start/stop timers with bounded rolling history.
#[derive(Debug, Default)]
pub struct OperationTimings {
    active: HashMap<String, Instant>,
    history: HashMap<String, VecDeque<f64>>,
}

impl OperationTimings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the timer for `name`.
    pub fn start(&mut self, name: &str) {
        self.active.insert(name.to_string(), Instant::now());
    }

    /// Stop the timer for `name`, recording and returning the elapsed time.
    /// Returns `None` if no timer was running under that name.
    pub fn stop(&mut self, name: &str) -> Option<Duration> {
        let started = self.active.remove(name)?;
        let elapsed = started.elapsed();
        self.record(name, elapsed);
        Some(elapsed)
    }

    /// Record an externally measured duration.
    pub fn record(&mut self, name: &str, elapsed: Duration) {
        let samples = self.history.entry(name.to_string()).or_default();
        if samples.len() == TIMER_HISTORY {
            samples.pop_front();
        }
        samples.push_back(elapsed.as_secs_f64() * 1_000.0);
    }

    /// Stats over the retained samples for `name`, if any were recorded.
    pub fn stats(&self, name: &str) -> Option<TimingStats> {
        let samples = self.history.get(name)?;
        if samples.is_empty() {
            return None;
        }
        let mut sorted: Vec<f64> = samples.iter().copied().collect();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let count = sorted.len();
        let sum: f64 = sorted.iter().sum();
        let p95_index = ((count as f64) * 0.95).ceil() as usize;
        let p95_ms = sorted[p95_index.clamp(1, count) - 1];

        Some(TimingStats {
            count,
            avg_ms: sum / count as f64,
            min_ms: sorted[0],
            max_ms: sorted[count - 1],
            p95_ms,
        })
    }

    /// Names with at least one retained sample.
    pub fn operation_names(&self) -> Vec<&str> {
        self.history.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_stop_records_a_sample() {
        let mut timings = OperationTimings::new();
        timings.start("embedding");
        let elapsed = timings.stop("embedding");
        assert!(elapsed.is_some());
        assert_eq!(timings.stats("embedding").unwrap().count, 1);
    }

    #[test]
    fn stop_without_start_returns_none() {
        let mut timings = OperationTimings::new();
        assert!(timings.stop("never-started").is_none());
    }

    #[test]
    fn history_is_bounded_to_window() {
        let mut timings = OperationTimings::new();
        for i in 0..250 {
            timings.record("op", Duration::from_millis(i));
        }
        let stats = timings.stats("op").unwrap();
        assert_eq!(stats.count, TIMER_HISTORY);
        // Oldest samples were dropped, so the minimum is from the tail.
        assert!(stats.min_ms >= 150.0);
    }

    #[test]
    fn stats_compute_min_max_avg_p95() {
        let mut timings = OperationTimings::new();
        for ms in 1..=100u64 {
            timings.record("op", Duration::from_millis(ms));
        }
        let stats = timings.stats("op").unwrap();
        assert_eq!(stats.count, 100);
        assert!((stats.min_ms - 1.0).abs() < 0.5);
        assert!((stats.max_ms - 100.0).abs() < 0.5);
        assert!((stats.avg_ms - 50.5).abs() < 0.5);
        assert!((stats.p95_ms - 95.0).abs() < 1.0);
    }

    #[test]
    fn unknown_operation_has_no_stats() {
        let timings = OperationTimings::new();
        assert!(timings.stats("nope").is_none());
    }
}
