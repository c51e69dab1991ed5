//! Zero-padding zoom: new high-frequency bins are silent

use super::{block_offset, check_zoom};
use crate::error::Result;
use num_complex::Complex64;

/// Insert `n*(k-1)` zero bins around a shifted spectrum
///
/// # Arguments
/// * `shifted` - Centre-DC spectrum of length n
/// * `factor` - Zoom factor k >= 1
///
/// # Returns
/// Centre-DC spectrum of length n*k, original bins scaled by k
pub fn zero_pad(shifted: &[Complex64], factor: usize) -> Result<Vec<Complex64>> {
    let n = shifted.len();
    let len = check_zoom(n, factor)?;
    if factor == 1 {
        return Ok(shifted.to_vec());
    }

    let mut zoomed = vec![Complex64::new(0.0, 0.0); len];
    let offset = block_offset(n, len);
    let gain = factor as f64;

    for (dst, &bin) in zoomed[offset..offset + n].iter_mut().zip(shifted) {
        *dst = bin * gain;
    }

    Ok(zoomed)
}
