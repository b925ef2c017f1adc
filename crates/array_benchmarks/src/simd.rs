// Vectorized kernels built on the `wide` SIMD types. Each processes the
// bulk of the array in f32x8/f64x4 lanes, with a scalar tail for lengths
// that are not a multiple of the lane count.

use wide::{f32x8, f64x4};

const F32_LANES: usize = 8;
const F64_LANES: usize = 4;

/// Writes each element's index into the array, eight lanes at a time.
#[inline(never)]
pub fn fill_ramp_f32(out: &mut [f32]) {
    let split = out.len() - out.len() % F32_LANES;
    let (vectored, tail) = out.split_at_mut(split);

    let mut base = f32x8::from([0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
    let step = f32x8::splat(F32_LANES as f32);
    for chunk in vectored.chunks_exact_mut(F32_LANES) {
        chunk.copy_from_slice(&base.to_array());
        base += step;
    }

    for (i, x) in tail.iter_mut().enumerate() {
        *x = (split + i) as f32;
    }
}

#[inline(never)]
pub fn fill_const_f32(out: &mut [f32], value: f32) {
    let splat = f32x8::splat(value);
    let mut chunks = out.chunks_exact_mut(F32_LANES);
    for chunk in &mut chunks {
        chunk.copy_from_slice(&splat.to_array());
    }
    for x in chunks.into_remainder() {
        *x = value;
    }
}

#[inline(never)]
pub fn scale_f32(data: &mut [f32], factor: f32) {
    let splat = f32x8::splat(factor);
    let mut chunks = data.chunks_exact_mut(F32_LANES);
    for chunk in &mut chunks {
        let v = f32x8::from(<[f32; 8]>::try_from(&*chunk).unwrap()) * splat;
        chunk.copy_from_slice(&v.to_array());
    }
    for x in chunks.into_remainder() {
        *x *= factor;
    }
}

/// Sum of absolute values, accumulated across eight lanes.
#[inline(never)]
pub fn sum_abs_f32(data: &[f32]) -> f32 {
    let mut acc = f32x8::ZERO;
    let mut chunks = data.chunks_exact(F32_LANES);
    for chunk in &mut chunks {
        acc += f32x8::from(<[f32; 8]>::try_from(chunk).unwrap()).abs();
    }

    let mut sum = acc.reduce_add();
    for &x in chunks.remainder() {
        sum += x.abs();
    }
    sum
}

#[inline(never)]
pub fn sum_abs_f64(data: &[f64]) -> f64 {
    let mut acc = f64x4::ZERO;
    let mut chunks = data.chunks_exact(F64_LANES);
    for chunk in &mut chunks {
        acc += f64x4::from(<[f64; 4]>::try_from(chunk).unwrap()).abs();
    }

    let mut sum = acc.reduce_add();
    for &x in chunks.remainder() {
        sum += x.abs();
    }
    sum
}

/// First index of the element with the largest absolute value. A vector
/// pass finds the maximum magnitude; a scalar pass then recovers the
/// first index holding it, matching the scalar kernel's first-match
/// semantics.
#[inline(never)]
pub fn argmax_abs_f32(data: &[f32]) -> usize {
    if data.is_empty() {
        return 0;
    }

    let mut max = f32x8::ZERO;
    let mut chunks = data.chunks_exact(F32_LANES);
    for chunk in &mut chunks {
        max = max.max(f32x8::from(<[f32; 8]>::try_from(chunk).unwrap()).abs());
    }

    let mut max_abs = max.to_array().into_iter().fold(0.0f32, f32::max);
    for &x in chunks.remainder() {
        max_abs = max_abs.max(x.abs());
    }

    // the maximum was read out of `data`, so an exact match exists
    data.iter()
        .position(|x| x.abs() == max_abs)
        .unwrap_or(0)
}
