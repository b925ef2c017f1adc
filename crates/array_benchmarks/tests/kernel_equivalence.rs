//! Equivalence tests for the benchmark kernels.
//!
//! Every accelerated kernel must produce the same result as its scalar
//! counterpart on the same input; which variant ran is only supposed to
//! change the timing, never the answer.

use array_benchmarks::{nd, scalar, simd};

/// Integer-valued test data, so sums are exact in either precision and
/// independent of accumulation order.
fn integer_data(len: usize) -> Vec<f32> {
    (0..len).map(|i| ((i * 37 + 11) % 1000) as f32 - 500.0).collect()
}

#[test]
fn fill_variants_agree_on_five_elements() {
    let expected = [0.0f32, 1.0, 2.0, 3.0, 4.0];

    let mut array = [0.0f32; 5];
    scalar::fill_ramp_f32(&mut array);
    assert_eq!(array, expected);

    let mut array = [0.0f32; 5];
    nd::fill_ramp_f32(&mut array);
    assert_eq!(array, expected);

    let mut array = [0.0f32; 5];
    simd::fill_ramp_f32(&mut array);
    assert_eq!(array, expected);
}

#[test]
fn constant_fill_variants_agree() {
    let mut a = [0.0f32; 11];
    let mut b = [0.0f32; 11];
    let mut c = [0.0f32; 11];

    scalar::fill_const_f32(&mut a, 10.0);
    nd::fill_const_f32(&mut b, 10.0);
    simd::fill_const_f32(&mut c, 10.0);

    assert_eq!(a, b);
    assert_eq!(a, c);
    assert!(a.iter().all(|&x| x == 10.0));
}

#[test]
fn ramp_sums_to_triangular_number() {
    const N: usize = 10;

    let mut array = [0.0f32; N];
    scalar::fill_ramp_f32(&mut array);

    // 0 + 1 + ... + 9
    let expected = (N * (N - 1) / 2) as f32;
    assert_eq!(scalar::sum_abs_f32(&array), expected);
    assert_eq!(simd::sum_abs_f32(&array), expected);

    let mut array = [0.0f64; N];
    scalar::fill_ramp_f64(&mut array);
    assert_eq!(scalar::sum_abs_f64(&array), expected as f64);
    assert_eq!(simd::sum_abs_f64(&array), expected as f64);
}

#[test]
fn argmax_follows_absolute_value() {
    let array = [3.0f32, -7.0, 2.0, 5.0, -1.0];

    assert_eq!(scalar::argmax_abs_f32(&array), 1);
    assert_eq!(simd::argmax_abs_f32(&array), 1);
}

#[test]
fn scaling_variants_agree() {
    let mut a = integer_data(13);
    let mut b = a.clone();

    scalar::scale_f32(&mut a, 2.0);
    simd::scale_f32(&mut b, 2.0);
    assert_eq!(a, b);
}

#[test]
fn simd_tail_handling_matches_scalar() {
    // lengths around the lane width, including non-multiples
    for len in [0usize, 1, 7, 8, 9, 16, 17, 31] {
        let data = integer_data(len);

        assert_eq!(
            scalar::sum_abs_f32(&data),
            simd::sum_abs_f32(&data),
            "sum mismatch at len {len}"
        );
        assert_eq!(
            scalar::argmax_abs_f32(&data),
            simd::argmax_abs_f32(&data),
            "argmax mismatch at len {len}"
        );

        let doubles: Vec<f64> = data.iter().map(|&x| x as f64).collect();
        assert_eq!(
            scalar::sum_abs_f64(&doubles),
            simd::sum_abs_f64(&doubles),
            "double sum mismatch at len {len}"
        );
    }
}
