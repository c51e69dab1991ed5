//! Periodization zoom: the spectrum is replicated across the expanded range
//!
//! The zoomed spectrum satisfies `Y[f] = k * X[f mod n]`, which in the
//! spatial domain is the input with `k - 1` zeros stuffed between samples.
//! A filter kernel then turns the stuffed signal into an interpolated one.

use super::{block_offset, check_zoom};
use crate::error::Result;
use num_complex::Complex64;

/// Expand a shifted spectrum to `n*k` bins by periodic wrapping
///
/// # Arguments
/// * `shifted` - Centre-DC spectrum of length n
/// * `factor` - Zoom factor k >= 1
///
/// # Returns
/// Centre-DC spectrum of length n*k, periodic with period n, scaled by k
pub fn periodize(shifted: &[Complex64], factor: usize) -> Result<Vec<Complex64>> {
    let n = shifted.len();
    let len = check_zoom(n, factor)?;
    if factor == 1 {
        return Ok(shifted.to_vec());
    }

    let offset = block_offset(n, len);
    // (i + start) mod n == (i - offset) mod n
    let start = n - offset % n;
    let gain = factor as f64;

    Ok((0..len).map(|i| shifted[(i + start) % n] * gain).collect())
}
