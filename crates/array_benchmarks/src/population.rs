// Array population benchmarks: filling with an increasing ramp and with
// a constant value.

use bench_harness::{BenchError, alloc_array, benchmark, report_ratio};

use crate::{BenchConfig, nd, scalar, simd};

pub fn run(config: &BenchConfig) -> Result<(), BenchError> {
    let length = config.length;
    let count = config.count;

    println!("\n\narray population, increasing value\n");

    let mut array = alloc_array(length, 0.0f32)?;

    let naive = benchmark(
        &format!("populating a {length}-element float array (scalar)"),
        count,
        || scalar::fill_ramp_f32(&mut array),
    )?;

    let accel = benchmark(
        &format!("populating a {length}-element float array (ndarray)"),
        count,
        || nd::fill_ramp_f32(&mut array),
    )?;
    report_ratio("ndarray", naive, accel);

    let accel = benchmark(
        &format!("populating a {length}-element float array (simd)"),
        count,
        || simd::fill_ramp_f32(&mut array),
    )?;
    report_ratio("SIMD", naive, accel);
    log::debug!("increasing-value population benchmarks finished");

    println!("\n\narray population, constant value\n");

    let naive = benchmark(
        &format!("populating a {length}-element float array (scalar)"),
        count,
        || scalar::fill_const_f32(&mut array, 10.0),
    )?;

    let accel = benchmark(
        &format!("populating a {length}-element float array (ndarray)"),
        count,
        || nd::fill_const_f32(&mut array, 10.0),
    )?;
    report_ratio("ndarray", naive, accel);

    let accel = benchmark(
        &format!("populating a {length}-element float array (simd)"),
        count,
        || simd::fill_const_f32(&mut array, 10.0),
    )?;
    report_ratio("SIMD", naive, accel);
    log::debug!("constant-value population benchmarks finished");

    Ok(())
}
