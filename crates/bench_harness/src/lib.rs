#[cfg(test)]
mod tests;

// Home of the timing harness shared by the array benchmark suites.

use std::collections::TryReserveError;
use std::io::{self, Write};
use std::time::Instant;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("iteration count must be at least 1, got {0}")]
    InvalidIterations(u32),
    #[error("failed to allocate a {len}-element array: {source}")]
    Allocation {
        len: usize,
        source: TryReserveError,
    },
}

/// Runs `work` exactly `times` times in a tight sequential loop and
/// returns the average wall-clock milliseconds per call.
///
/// The label is printed (and flushed) before timing starts, so anything
/// the work unit prints lands between the label and the result on the
/// same report line. Timing is best-effort wall clock at microsecond
/// resolution; values are not reproducible run to run.
///
/// `work` must not spawn threads of its own; the measurement assumes
/// purely sequential execution.
pub fn benchmark<F>(label: &str, times: u32, mut work: F) -> Result<f64, BenchError>
where
    F: FnMut(),
{
    if times < 1 {
        return Err(BenchError::InvalidIterations(times));
    }

    print!("{label}: ");
    let _ = io::stdout().flush();

    let start = Instant::now();
    for _ in 0..times {
        work();
    }
    let elapsed = start.elapsed();
    log::debug!("'{label}': {times} iterations in {elapsed:?}");

    let msec = elapsed.as_micros() as f64 / 1000.0 / times as f64;
    println!("{msec:.6} msec");
    Ok(msec)
}

/// Prints the accelerated variant's runtime as a percentage of the naive
/// variant's, returning the ratio. A zero naive sample gives an infinite
/// (or NaN) ratio per IEEE 754, which is reported as-is rather than
/// treated as an error.
pub fn report_ratio(library: &str, naive_msec: f64, accel_msec: f64) -> f64 {
    let ratio = accel_msec / naive_msec * 100.0;
    println!("{library} took {ratio:.6}% execution time.");
    ratio
}

/// Milliseconds elapsed since `start`, at the same microsecond
/// resolution the runner uses.
pub fn elapsed_msec(start: Instant) -> f64 {
    start.elapsed().as_micros() as f64 / 1000.0
}

/// Fallible allocation for benchmark arrays. A failed reservation aborts
/// the current benchmark category instead of the whole process.
pub fn alloc_array<T: Copy>(len: usize, fill: T) -> Result<Vec<T>, BenchError> {
    let mut array = Vec::new();
    array
        .try_reserve_exact(len)
        .map_err(|source| BenchError::Allocation { len, source })?;
    array.resize(len, fill);
    Ok(array)
}
