#![deny(missing_docs)]

//! Divisor counting spread over a fixed pool of worker threads.

pub mod divisor_count;
pub mod harness;
pub mod pool;

mod error;

pub use divisor_count::{count_all_sequential, count_divisors, DivisorCount};
pub use error::HarnessError;
pub use harness::{count_all, count_all_parallel, HarnessConfig, HarnessReport};
pub use pool::{WorkPool, WorkerReport};
