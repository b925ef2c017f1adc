// Kernels expressed through ndarray views, the second accelerated
// library in the population comparisons.

use ndarray::{ArrayViewMut1, Zip};

/// Writes each element's index into the array.
#[inline(never)]
pub fn fill_ramp_f32(out: &mut [f32]) {
    let mut view = ArrayViewMut1::from(out);
    Zip::indexed(&mut view).for_each(|i, x| *x = i as f32);
}

#[inline(never)]
pub fn fill_const_f32(out: &mut [f32], value: f32) {
    ArrayViewMut1::from(out).fill(value);
}
