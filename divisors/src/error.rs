//! Errors of the divisor-counting harness.

use thiserror::Error;

/// Errors that may occur while running the harness.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    /// The output buffer does not have one slot per input.
    #[error("input has {input} items but output has {output} slots")]
    LengthMismatch {
        /// Number of inputs.
        input: usize,
        /// Number of output slots.
        output: usize,
    },
    /// Zero has infinitely many divisors.
    #[error("input at index {index} is zero")]
    ZeroInput {
        /// Position of the zero.
        index: usize,
    },
    /// A worker thread panicked, the output is incomplete.
    #[error("worker {worker} panicked")]
    WorkerPanicked {
        /// Id of the worker.
        worker: usize,
    },
    /// The requested input range is empty or contains zero.
    #[error("invalid input range [{min}, {max}]")]
    InvalidRange {
        /// Lower bound.
        min: u64,
        /// Upper bound.
        max: u64,
    },
}
