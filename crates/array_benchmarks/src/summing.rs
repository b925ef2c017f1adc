// Summing benchmarks: sum of absolute values in single and double
// precision. The work units print the sums they compute; the harness
// only times them.

use bench_harness::{BenchError, alloc_array, benchmark, report_ratio};

use crate::{BenchConfig, scalar, simd};

pub fn run(config: &BenchConfig) -> Result<(), BenchError> {
    let length = config.length;
    let count = config.count;

    // ramp input, so the exact total is length * (length - 1) / 2
    let expected = (length as u64) * (length as u64).saturating_sub(1) / 2;
    println!("\n\nsumming benchmarks (the right answer is {expected})\n");

    let mut float_array = alloc_array(length, 0.0f32)?;
    scalar::fill_ramp_f32(&mut float_array);

    let mut double_array = alloc_array(length, 0.0f64)?;
    scalar::fill_ramp_f64(&mut double_array);

    let naive = benchmark(
        &format!("calculate sum of {length}-element float array"),
        count,
        || {
            let sum = scalar::sum_abs_f32(&float_array);
            print!("\n ..sum is {sum}.. ");
        },
    )?;

    let accel = benchmark(
        &format!("calculate sum of {length}-element float array (simd)"),
        count,
        || {
            let sum = simd::sum_abs_f32(&float_array);
            print!("\n ..sum is {sum}.. ");
        },
    )?;
    report_ratio("SIMD", naive, accel);

    let naive = benchmark(
        &format!("calculate sum of {length}-element double array"),
        count,
        || {
            let sum = scalar::sum_abs_f64(&double_array);
            print!("\n ..sum is {sum}.. ");
        },
    )?;

    let accel = benchmark(
        &format!("calculate sum of {length}-element double array (simd)"),
        count,
        || {
            let sum = simd::sum_abs_f64(&double_array);
            print!("\n ..sum is {sum}.. ");
        },
    )?;
    report_ratio("SIMD", naive, accel);
    log::debug!("summing benchmarks finished");

    Ok(())
}
