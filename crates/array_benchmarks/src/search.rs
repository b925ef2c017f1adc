// Search benchmarks: index of the entry with the largest absolute value
// in pseudo-random data. The work units print the position they find.

use std::hash::{DefaultHasher, Hash, Hasher};

use bench_harness::{BenchError, alloc_array, benchmark, report_ratio};

use crate::{BenchConfig, scalar, simd};

/// Deterministic stand-in for random data: hash the index with a seed
/// and map the result into [-0.5, 0.5).
pub fn generate_data(out: &mut [f32], seed: u64) {
    for (i, x) in out.iter_mut().enumerate() {
        let mut hasher = DefaultHasher::new();
        (seed, i).hash(&mut hasher);
        *x = (hasher.finish() % 1000) as f32 / 1000.0 - 0.5;
    }
}

pub fn run(config: &BenchConfig) -> Result<(), BenchError> {
    let length = config.length;
    let count = config.count;

    println!("\n\nsearch benchmarks\n");

    let mut array = alloc_array(length, 0.0f32)?;
    generate_data(&mut array, 0x5eed);

    let naive = benchmark(
        &format!("search {length}-element float array"),
        count,
        || {
            let max_position = scalar::argmax_abs_f32(&array);
            print!("\n ..max position is {max_position}.. ");
        },
    )?;

    let accel = benchmark(
        &format!("search {length}-element float array (simd)"),
        count,
        || {
            let max_position = simd::argmax_abs_f32(&array);
            print!("\n ..max position is {max_position}.. ");
        },
    )?;
    report_ratio("SIMD", naive, accel);
    log::debug!("search benchmarks finished");

    Ok(())
}
