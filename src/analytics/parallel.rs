use std::time::{Duration, Instant};

use log::debug;
use rand::seq::SliceRandom;

use crate::error::AnalyticsError;

/// Totals of the same reduction computed two different ways.
#[derive(Debug, Clone, PartialEq)]
pub struct SumComparison {
    pub sequential: u64,
    pub parallel: u64,
    pub sequential_time: Duration,
    pub parallel_time: Duration,
}

impl SumComparison {
    pub fn matches(&self) -> bool {
        self.sequential == self.parallel
    }
}

/// Sum of `n * n` for `n` in `1..=upper`, in ascending order.
///
/// Returns `None` when the total does not fit in a `u64` (any `upper` above
/// roughly 3.78 million).
pub fn sum_of_squares(upper: u64) -> Option<u64> {
    checked_square_sum(1..=upper)
}

/// Same total as [`sum_of_squares`], added up in a random order.
pub fn sum_of_squares_shuffled(upper: u64) -> Option<u64> {
    let mut values: Vec<u64> = (1..=upper).collect();
    values.shuffle(&mut rand::rng());
    checked_square_sum(values)
}

fn checked_square_sum(values: impl IntoIterator<Item = u64>) -> Option<u64> {
    values
        .into_iter()
        .try_fold(0u64, |total, n| n.checked_mul(n)?.checked_add(total))
}

/// Splits `1..=upper` into `workers` contiguous ranges, squares and sums each
/// one on the blocking pool, then adds the partial totals.
///
/// # Errors
/// `AnalyticsError::Overflow` when the total does not fit in a `u64`.
pub async fn parallel_sum_of_squares(upper: u64, workers: usize) -> Result<u64, AnalyticsError> {
    let workers = workers.max(1) as u64;
    let chunk = upper.div_ceil(workers).max(1);

    let mut handles = Vec::with_capacity(workers as usize);
    let mut start = 1;
    while start <= upper {
        let end = (start + chunk - 1).min(upper);
        debug!("Summing squares of {}..={}", start, end);
        handles.push(tokio::task::spawn_blocking(move || checked_square_sum(start..=end)));
        start = end + 1;
    }

    let mut total = 0u64;
    for handle in handles {
        let partial = handle
            .await
            .map_err(|e| AnalyticsError::Parallel(e.to_string()))?;
        total = partial
            .and_then(|partial| partial.checked_add(total))
            .ok_or(AnalyticsError::Overflow(upper))?;
    }
    Ok(total)
}

/// Runs the sequential and the parallel sum and times both.
///
/// Owns its tokio runtime, so it must not be called from async code. Fails
/// with `AnalyticsError::Overflow` when the total does not fit in a `u64`.
pub fn compare_sums(upper: u64, workers: usize) -> Result<SumComparison, AnalyticsError> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(workers.max(1))
        .enable_all()
        .build()
        .map_err(|e| AnalyticsError::Parallel(e.to_string()))?;

    let started = Instant::now();
    let sequential = sum_of_squares(upper).ok_or(AnalyticsError::Overflow(upper))?;
    let sequential_time = started.elapsed();

    let started = Instant::now();
    let parallel = runtime.block_on(parallel_sum_of_squares(upper, workers))?;
    let parallel_time = started.elapsed();

    debug!(
        "Sum of squares up to {}: sequential {:?}, parallel {:?}",
        upper, sequential_time, parallel_time
    );

    Ok(SumComparison {
        sequential,
        parallel,
        sequential_time,
        parallel_time,
    })
}

#[cfg(test)]
mod tests {
    use crate::error::AnalyticsError;

    use super::{
        compare_sums, parallel_sum_of_squares, sum_of_squares, sum_of_squares_shuffled,
    };

    const MILLION_SQUARES: u64 = 333_333_833_333_500_000;

    #[test]
    fn closed_form_for_a_million() {
        assert_eq!(sum_of_squares(1_000_000), Some(MILLION_SQUARES));
    }

    #[test]
    fn order_does_not_change_the_total() {
        assert_eq!(sum_of_squares_shuffled(1_000_000), Some(MILLION_SQUARES));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn uneven_chunks_cover_the_whole_range() {
        assert_eq!(parallel_sum_of_squares(10, 3).await.unwrap(), 385);
        assert_eq!(parallel_sum_of_squares(2, 8).await.unwrap(), 5);
        assert_eq!(parallel_sum_of_squares(0, 4).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn zero_workers_fall_back_to_one() {
        assert_eq!(parallel_sum_of_squares(100, 0).await.ok(), sum_of_squares(100));
    }

    #[test]
    fn comparison_matches() {
        let comparison = compare_sums(1_000_000, 4).unwrap();

        assert!(comparison.matches());
        assert_eq!(comparison.parallel, MILLION_SQUARES);
    }

    #[test]
    fn totals_beyond_u64_are_reported_instead_of_wrapping() {
        assert_eq!(sum_of_squares(3_000_000), Some(9_000_004_500_000_500_000));
        assert_eq!(sum_of_squares(4_000_000), None);
        assert_eq!(sum_of_squares_shuffled(4_000_000), None);

        let result = compare_sums(4_000_000, 2);
        assert!(matches!(result, Err(AnalyticsError::Overflow(4_000_000))));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn parallel_overflow_is_an_error() {
        let result = parallel_sum_of_squares(4_000_000, 4).await;

        assert!(matches!(result, Err(AnalyticsError::Overflow(4_000_000))));
    }
}
