//! A fixed pool of worker threads pulling indices from one shared cursor.

use std::iter::{Enumerate, Zip};
use std::num::NonZeroUsize;
use std::slice::{Iter, IterMut};
use std::sync::{Mutex, PoisonError};
use std::thread;

use crate::HarnessError;

/// The shared cursor: the next unclaimed input paired with its output slot.
///
/// Claiming is one `next()` under the lock, so every slot is handed to
/// exactly one worker and the workers never write to the same slot.
type Cursor<'a, I, O> = Enumerate<Zip<Iter<'a, I>, IterMut<'a, O>>>;

/// What one worker did during a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorkerReport {
    /// Id of the worker, `0..threads`.
    pub worker: usize,
    /// Number of items the worker claimed.
    pub items: usize,
    /// Sum of the costs reported by the job for those items.
    pub cost: u64,
}

/// A fixed number of scoped threads sharing a lock-protected cursor.
///
/// There is no queue and no work stealing: a worker claims the next index,
/// computes it outside the lock, writes the result straight into the
/// output slot and goes back for another index until the input runs out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkPool {
    threads: NonZeroUsize,
}

impl Default for WorkPool {
    #[inline]
    fn default() -> Self {
        Self::with_available_parallelism()
    }
}

impl WorkPool {
    /// Creates a pool with exactly `threads` workers.
    #[inline]
    pub const fn new(threads: NonZeroUsize) -> Self {
        Self { threads }
    }

    /// Creates a pool with one worker per available hardware thread.
    pub fn with_available_parallelism() -> Self {
        let threads = thread::available_parallelism().unwrap_or(NonZeroUsize::MIN);
        Self { threads }
    }

    /// Returns the number of workers.
    #[inline]
    pub fn threads(&self) -> usize {
        self.threads.get()
    }

    /// Runs `job` on every input, storing its result in the output slot with the same index.
    ///
    /// `job` returns the result and a cost figure that is summed per worker.
    /// All workers are joined before this returns, so the output is complete
    /// whenever the result is `Ok`.
    ///
    /// # Errors
    ///
    /// - [`HarnessError::LengthMismatch`] if `output` is not as long as `input`.
    /// - [`HarnessError::WorkerPanicked`] if `job` panicked on some worker.
    pub fn run<I, O, F>(
        &self,
        input: &[I],
        output: &mut [O],
        job: F,
    ) -> Result<Vec<WorkerReport>, HarnessError>
    where
        I: Sync,
        O: Send,
        F: Fn(&I) -> (O, u64) + Sync,
    {
        if input.len() != output.len() {
            return Err(HarnessError::LengthMismatch {
                input: input.len(),
                output: output.len(),
            });
        }

        let cursor: Mutex<Cursor<'_, I, O>> =
            Mutex::new(input.iter().zip(output.iter_mut()).enumerate());

        thread::scope(|scope| {
            let handles: Vec<_> = (0..self.threads())
                .map(|worker| {
                    let cursor = &cursor;
                    let job = &job;
                    scope.spawn(move || work(worker, cursor, job))
                })
                .collect();

            handles
                .into_iter()
                .enumerate()
                .map(|(worker, handle)| {
                    handle
                        .join()
                        .map_err(|_| HarnessError::WorkerPanicked { worker })
                })
                .collect()
        })
    }
}

fn work<I, O, F>(worker: usize, cursor: &Mutex<Cursor<'_, I, O>>, job: &F) -> WorkerReport
where
    F: Fn(&I) -> (O, u64),
{
    log::debug!("worker {worker}: begin");

    let mut report = WorkerReport {
        worker,
        ..Default::default()
    };

    loop {
        let claimed = cursor
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .next();
        let Some((index, (item, slot))) = claimed else {
            break;
        };
        log::trace!("worker {worker}: item {index}");

        let (value, cost) = job(item);
        *slot = value;

        report.items += 1;
        report.cost += cost;
    }

    log::debug!(
        "worker {worker}: end, {} items, cost {}",
        report.items,
        report.cost
    );
    report
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn pool(threads: usize) -> WorkPool {
        WorkPool::new(NonZeroUsize::new(threads).unwrap())
    }

    #[test]
    fn test_every_slot_written_once() {
        let input: Vec<usize> = (0..1000).collect();
        let mut output = vec![usize::MAX; input.len()];
        let calls = AtomicUsize::new(0);

        let reports = pool(8)
            .run(&input, &mut output, |&x| {
                calls.fetch_add(1, Ordering::Relaxed);
                (x * 2, 1)
            })
            .unwrap();

        assert_eq!(calls.load(Ordering::Relaxed), input.len());
        assert_eq!(reports.len(), 8);
        assert_eq!(reports.iter().map(|r| r.items).sum::<usize>(), input.len());
        assert_eq!(reports.iter().map(|r| r.cost).sum::<u64>(), input.len() as u64);
        assert!(output.iter().enumerate().all(|(i, &v)| v == 2 * i));
    }

    #[test]
    fn test_more_threads_than_items() {
        let input = [1u8, 2, 3];
        let mut output = [0u8; 3];
        let reports = pool(16).run(&input, &mut output, |&x| (x + 1, 0)).unwrap();
        assert_eq!(output, [2, 3, 4]);
        assert_eq!(reports.len(), 16);
        let ids: HashSet<usize> = reports.iter().map(|r| r.worker).collect();
        assert_eq!(ids.len(), 16);
    }

    #[test]
    fn test_empty_input() {
        let input: [u32; 0] = [];
        let mut output: [u32; 0] = [];
        let reports = pool(4).run(&input, &mut output, |&x| (x, 0)).unwrap();
        assert!(reports.iter().all(|r| r.items == 0));
    }

    #[test]
    fn test_length_mismatch() {
        let input = [1u32, 2];
        let mut output = [0u32; 3];
        assert_eq!(
            pool(2).run(&input, &mut output, |&x| (x, 0)),
            Err(HarnessError::LengthMismatch {
                input: 2,
                output: 3
            })
        );
    }

    #[test]
    fn test_worker_panic_is_reported() {
        let input: Vec<u32> = (0..10).collect();
        let mut output = vec![0u32; 10];
        let result = pool(1).run(&input, &mut output, |&x| {
            assert!(x != 5, "boom");
            (x, 0)
        });
        assert_eq!(result, Err(HarnessError::WorkerPanicked { worker: 0 }));
    }
}
