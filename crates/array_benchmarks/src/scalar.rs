// Naive scalar-loop kernels, the baseline side of every comparison.
//
// inline(never) keeps each loop a distinct unit in profiles.

/// Writes each element's index into the array.
#[inline(never)]
pub fn fill_ramp_f32(out: &mut [f32]) {
    for i in 0..out.len() {
        out[i] = i as f32;
    }
}

#[inline(never)]
pub fn fill_ramp_f64(out: &mut [f64]) {
    for i in 0..out.len() {
        out[i] = i as f64;
    }
}

#[inline(never)]
pub fn fill_const_f32(out: &mut [f32], value: f32) {
    for i in 0..out.len() {
        out[i] = value;
    }
}

#[inline(never)]
pub fn scale_f32(data: &mut [f32], factor: f32) {
    for i in 0..data.len() {
        data[i] *= factor;
    }
}

/// Sum of absolute values.
#[inline(never)]
pub fn sum_abs_f32(data: &[f32]) -> f32 {
    let mut sum = 0.0f32;
    for &x in data {
        sum += x.abs();
    }
    sum
}

#[inline(never)]
pub fn sum_abs_f64(data: &[f64]) -> f64 {
    let mut sum = 0.0f64;
    for &x in data {
        sum += x.abs();
    }
    sum
}

/// First index of the element with the largest absolute value.
#[inline(never)]
pub fn argmax_abs_f32(data: &[f32]) -> usize {
    let mut max_position = 0;
    for i in 0..data.len() {
        if data[i].abs() > data[max_position].abs() {
            max_position = i;
        }
    }
    max_position
}
