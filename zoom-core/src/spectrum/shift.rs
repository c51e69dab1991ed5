//! Centre-DC reordering of spectra
//!
//! `shift` moves bin 0 (DC) to index `n/2` so the shifted array runs from the
//! most negative frequency upward; `unshift` undoes it for both parities.

use crate::error::Result;
use crate::lanes::map_lanes;
use ndarray::{Array2, ArrayView2, Axis};

/// Rotate so DC lands at index `floor(n/2)`
pub fn shift<T: Clone>(spectrum: &[T]) -> Vec<T> {
    let mut shifted = spectrum.to_vec();
    shifted.rotate_right(spectrum.len() / 2);
    shifted
}

/// Inverse of [`shift`]: index `floor(n/2)` goes back to 0
pub fn unshift<T: Clone>(spectrum: &[T]) -> Vec<T> {
    let mut unshifted = spectrum.to_vec();
    unshifted.rotate_left(spectrum.len() / 2);
    unshifted
}

/// [`shift`] along both axes
pub fn shift_2d<T: Clone + Send + Sync>(spectrum: ArrayView2<'_, T>) -> Result<Array2<T>> {
    let (rows, cols) = spectrum.dim();
    let shifted_rows = map_lanes(spectrum, Axis(1), cols, |row| Ok(shift(row)))?;
    map_lanes(shifted_rows.view(), Axis(0), rows, |col| Ok(shift(col)))
}

/// [`unshift`] along both axes
pub fn unshift_2d<T: Clone + Send + Sync>(spectrum: ArrayView2<'_, T>) -> Result<Array2<T>> {
    let (rows, cols) = spectrum.dim();
    let unshifted_rows = map_lanes(spectrum, Axis(1), cols, |row| Ok(unshift(row)))?;
    map_lanes(unshifted_rows.view(), Axis(0), rows, |col| Ok(unshift(col)))
}
