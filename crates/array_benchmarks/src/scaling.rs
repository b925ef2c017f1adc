// Scaling benchmarks: doubling an array in place, once and twenty times
// per work unit.

use bench_harness::{BenchError, alloc_array, benchmark, report_ratio};

use crate::{BenchConfig, scalar, simd};

const REPEAT: usize = 20;

pub fn run(config: &BenchConfig) -> Result<(), BenchError> {
    let length = config.length;
    let count = config.count;

    println!("\n\nscaling benchmarks\n");

    let mut array = alloc_array(length, 10.0f32)?;

    let naive = benchmark(
        &format!("doubling a {length}-element float array"),
        count,
        || scalar::scale_f32(&mut array, 2.0),
    )?;

    let accel = benchmark(
        &format!("doubling a {length}-element float array (simd)"),
        count,
        || simd::scale_f32(&mut array, 2.0),
    )?;
    report_ratio("SIMD", naive, accel);

    let naive = benchmark(
        &format!("doubling a {length}-element float array ({REPEAT}x)"),
        count,
        || {
            for _ in 0..REPEAT {
                scalar::scale_f32(&mut array, 2.0);
            }
        },
    )?;

    let accel = benchmark(
        &format!("doubling a {length}-element float array (simd, {REPEAT}x)"),
        count,
        || {
            for _ in 0..REPEAT {
                simd::scale_f32(&mut array, 2.0);
            }
        },
    )?;
    report_ratio("SIMD", naive, accel);
    log::debug!("scaling benchmarks finished");

    Ok(())
}
