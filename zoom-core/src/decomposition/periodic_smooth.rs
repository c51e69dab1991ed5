//! Periodic plus smooth decomposition
//!
//! The smooth part is the linear ramp that carries the end-to-end jump of the
//! signal. What remains (the periodic part) has a periodic extension without
//! that jump, so its spectrum does not ring.

use crate::error::{ResampleError, Result};
use crate::lanes::map_lanes;
use ndarray::{Array2, ArrayView2, Axis};

/// Periodic and smooth components of a signal; `periodic + smooth == signal`
#[derive(Debug, Clone, PartialEq)]
pub struct Decomposition {
    pub periodic: Vec<f64>,
    pub smooth: Vec<f64>,
}

/// Linear ramp `((s[n-1] - s[0]) / n) * (x - (n-1)/2)`, zero-mean
pub fn smooth_ramp(signal: &[f64]) -> Result<Vec<f64>> {
    let n = signal.len();
    if n == 0 {
        return Err(ResampleError::EmptyInput { rows: 1, cols: 0 });
    }

    let slope = (signal[n - 1] - signal[0]) / n as f64;
    let centre = (n as f64 - 1.0) / 2.0;
    Ok((0..n).map(|x| slope * (x as f64 - centre)).collect())
}

/// Split a signal into its periodic and smooth components
pub fn decompose(signal: &[f64]) -> Result<Decomposition> {
    let smooth = smooth_ramp(signal)?;
    let periodic = signal.iter().zip(&smooth).map(|(s, r)| s - r).collect();
    Ok(Decomposition { periodic, smooth })
}

/// Separable decomposition of an image
///
/// Rows are decomposed first, then the columns of the row-periodic part.
/// The smooth image is the sum of both ramp fields.
///
/// # Returns
/// `(periodic, smooth)` with `periodic + smooth == image`
pub fn decompose_image(image: ArrayView2<'_, f64>) -> Result<(Array2<f64>, Array2<f64>)> {
    let (rows, cols) = image.dim();

    let row_ramps = map_lanes(image, Axis(1), cols, smooth_ramp)?;
    let row_periodic = &image - &row_ramps;

    let col_ramps = map_lanes(row_periodic.view(), Axis(0), rows, smooth_ramp)?;
    let periodic = &row_periodic - &col_ramps;

    Ok((periodic, row_ramps + col_ramps))
}
