//! Interpolation kernel design using the windowing method

use super::windows::WindowType;
use crate::error::{ResampleError, Result};
use num_complex::Complex64;
use std::f64::consts::PI;

/// Design a windowed-sinc interpolation kernel at the zoomed sampling rate
///
/// # Algorithm
/// 1. Ideal low-pass response with cutoff π/k: h[n] = sinc(n/k) / k
/// 2. Generate window of length M = 2*half_width*k + 1
/// 3. Multiply ideal response by window
///
/// The centre tap is 1/k and every k-th tap around it is zero, so applied
/// after periodization (gain k) the original samples pass through unchanged.
///
/// # Arguments
/// * `zoom` - Zoom factor k >= 1
/// * `half_width` - Support on each side, in input samples
/// * `window` - Window applied to the ideal response
///
/// # Returns
/// Symmetric taps h[n] for n = 0..M-1
pub fn design_interpolation_kernel(
    zoom: usize,
    half_width: usize,
    window: WindowType,
) -> Result<Vec<f64>> {
    if zoom == 0 {
        return Err(ResampleError::InvalidZoomFactor(zoom));
    }
    let half_len = half_width
        .checked_mul(zoom)
        .ok_or(ResampleError::SizeOverflow {
            len: half_width,
            factor: zoom,
        })?;
    let m = half_len
        .checked_mul(2)
        .and_then(|len| len.checked_add(1))
        .ok_or(ResampleError::SizeOverflow {
            len: half_len,
            factor: 2,
        })?;

    let k = zoom as f64;
    let center = half_len as f64;

    let h = (0..m)
        .map(|n| {
            let t = (n as f64 - center) / k;
            let h_ideal = if t.abs() < 1e-10 {
                1.0
            } else {
                (PI * t).sin() / (PI * t)
            };
            h_ideal * window.coefficient(n, m) / k
        })
        .collect();

    Ok(h)
}

/// Calculate frequency response at given frequencies
///
/// # Arguments
/// * `h` - Filter coefficients
/// * `frequencies` - Normalized frequencies (units of π rad/sample)
///
/// # Returns
/// Complex frequency response H(e^jω)
pub fn frequency_response(h: &[f64], frequencies: &[f64]) -> Vec<Complex64> {
    frequencies
        .iter()
        .map(|&omega| {
            let omega_rad = omega * PI;
            h.iter()
                .enumerate()
                .map(|(n, &h_n)| h_n * Complex64::from_polar(1.0, -(omega_rad * n as f64)))
                .sum::<Complex64>()
        })
        .collect()
}
