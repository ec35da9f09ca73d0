//! Parallel divisor counting over a fixed input sequence.

use std::num::NonZeroUsize;
use std::time::Instant;

use crate::divisor_count::count_divisors;
use crate::pool::{WorkPool, WorkerReport};
use crate::HarnessError;

/// How the harness runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Number of workers, `None` means one per available hardware thread.
    pub threads: Option<NonZeroUsize>,
}

impl HarnessConfig {
    /// Uses exactly `threads` workers.
    #[inline]
    pub fn with_threads(threads: NonZeroUsize) -> Self {
        Self {
            threads: Some(threads),
        }
    }

    /// Builds the pool this configuration describes.
    #[inline]
    pub fn pool(&self) -> WorkPool {
        match self.threads {
            Some(threads) => WorkPool::new(threads),
            None => WorkPool::with_available_parallelism(),
        }
    }
}

/// Summary of one harness run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HarnessReport {
    /// One entry per worker, in worker order.
    pub workers: Vec<WorkerReport>,
}

impl HarnessReport {
    /// Total number of items processed.
    pub fn items(&self) -> usize {
        self.workers.iter().map(|w| w.items).sum()
    }

    /// Total trial-division iterations over all workers.
    pub fn iterations(&self) -> u64 {
        self.workers.iter().map(|w| w.cost).sum()
    }
}

/// Writes the divisor count of `input[i]` into `output[i]` for every `i`.
///
/// # Errors
///
/// - [`HarnessError::LengthMismatch`] if the slices differ in length.
/// - [`HarnessError::ZeroInput`] if some input is zero. Nothing is computed then.
/// - [`HarnessError::WorkerPanicked`] if a worker died.
pub fn count_all(
    config: &HarnessConfig,
    input: &[u64],
    output: &mut [u64],
) -> Result<HarnessReport, HarnessError> {
    if input.len() != output.len() {
        return Err(HarnessError::LengthMismatch {
            input: input.len(),
            output: output.len(),
        });
    }
    if let Some(index) = input.iter().position(|&x| x == 0) {
        return Err(HarnessError::ZeroInput { index });
    }

    let pool = config.pool();
    let start = Instant::now();

    let workers = pool.run(input, output, |&x| {
        let result = count_divisors(x);
        (result.count, result.iterations)
    })?;

    let report = HarnessReport { workers };
    log::info!(
        "counted divisors of {} numbers on {} threads in {:?}, {} iterations",
        report.items(),
        pool.threads(),
        start.elapsed(),
        report.iterations()
    );
    Ok(report)
}

/// Like [`count_all`], allocating the output.
///
/// # Errors
///
/// See [`count_all`].
pub fn count_all_parallel(
    config: &HarnessConfig,
    input: &[u64],
) -> Result<(Vec<u64>, HarnessReport), HarnessError> {
    let mut output = vec![0; input.len()];
    let report = count_all(config, input, &mut output)?;
    Ok((output, report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_inputs() {
        for threads in [1, 2, 16] {
            let config = HarnessConfig::with_threads(NonZeroUsize::new(threads).unwrap());
            let (output, report) = count_all_parallel(&config, &[6, 28, 17]).unwrap();
            assert_eq!(output, vec![4, 6, 2]);
            assert_eq!(report.items(), 3);
            assert_eq!(report.workers.len(), threads);
        }
    }

    #[test]
    fn test_zero_input() {
        let mut output = [0; 3];
        assert_eq!(
            count_all(&HarnessConfig::default(), &[4, 0, 9], &mut output),
            Err(HarnessError::ZeroInput { index: 1 })
        );
    }

    #[test]
    fn test_iterations_are_summed() {
        let config = HarnessConfig::with_threads(NonZeroUsize::new(3).unwrap());
        let input = [12, 101, 360, 1];
        let (_, report) = count_all_parallel(&config, &input).unwrap();
        let expected: u64 = input.iter().map(|&x| count_divisors(x).iterations).sum();
        assert_eq!(report.iterations(), expected);
    }

    #[test]
    fn test_default_uses_available_parallelism() {
        let pool = HarnessConfig::default().pool();
        assert!(pool.threads() >= 1);
    }
}
