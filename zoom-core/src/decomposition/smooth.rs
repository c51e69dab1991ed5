//! Spatial upsampling of the smooth component
//!
//! Two-tap linear interpolation per output phase. The smooth component is a
//! ramp, so this is exact and never goes through the spectral path.

use crate::error::{zoomed_len, ResampleError, Result};
use crate::lanes::map_lanes;
use ndarray::{Array2, ArrayView2, Axis};

/// Upsample a signal by `factor` with the two-tap kernel
///
/// For phase `f` in `0..k`: `out[j*k + f] = in[j] * (1 - f/k) + in[j+1] * f/k`,
/// with the last sample repeated once for the right-edge tap.
///
/// # Arguments
/// * `signal` - Smooth component (n >= 1)
/// * `factor` - Zoom factor k >= 1
///
/// # Returns
/// Signal of length n*k
pub fn upsample_smooth(signal: &[f64], factor: usize) -> Result<Vec<f64>> {
    let n = signal.len();
    if factor == 0 {
        return Err(ResampleError::InvalidZoomFactor(factor));
    }
    if n == 0 {
        return Err(ResampleError::EmptyInput { rows: 1, cols: 0 });
    }
    let len = zoomed_len(n, factor)?;
    if factor == 1 {
        return Ok(signal.to_vec());
    }

    let k = factor as f64;
    let mut upsampled = vec![0.0; len];

    for phase in 0..factor {
        let tap1 = phase as f64 / k;
        let tap0 = 1.0 - tap1;

        for j in 0..n {
            let next = signal[(j + 1).min(n - 1)];
            upsampled[j * factor + phase] = signal[j] * tap0 + next * tap1;
        }
    }

    Ok(upsampled)
}

/// Bilinear upsampling: rows by `factors.1`, then columns by `factors.0`
pub fn upsample_smooth_image(
    image: ArrayView2<'_, f64>,
    factors: (usize, usize),
) -> Result<Array2<f64>> {
    let (rows, cols) = image.dim();
    let (row_factor, col_factor) = factors;

    let wide = map_lanes(image, Axis(1), zoomed_len(cols, col_factor)?, |row| {
        upsample_smooth(row, col_factor)
    })?;
    map_lanes(wide.view(), Axis(0), zoomed_len(rows, row_factor)?, |col| {
        upsample_smooth(col, row_factor)
    })
}
