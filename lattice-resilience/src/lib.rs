//! # lattice-resilience
//!
//! Wraps every external call the engine makes: a generic
//! retry-with-exponential-backoff executor keyed off the error taxonomy's
//! retryability flag, plus a bounded rolling timing recorder per named
//! operation.

pub mod retry;
pub mod timing;

pub use retry::{execute_with_retry, RetryPolicy};
pub use timing::{OperationTimings, TimingStats};
