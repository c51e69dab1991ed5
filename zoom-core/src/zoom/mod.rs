//! Frequency-domain zoom strategies
//!
//! Both strategies map a shifted spectrum of length `n` to a shifted spectrum
//! of length `n * k`, scaled by `k` so the `1/(n*k)` inverse transform keeps
//! the original amplitude. The original bins are written at
//! `floor(n*k/2) - floor(n/2)`, which keeps every bin at its frequency for
//! even and odd `n` alike.

pub mod periodization;
pub mod zero_padding;

pub use periodization::periodize;
pub use zero_padding::zero_pad;

use crate::error::{zoomed_len, ResampleError, Result};
use crate::lanes::map_lanes;
use ndarray::{Array2, ArrayView2, Axis};
use num_complex::Complex64;

/// How the expanded frequency range is filled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomStrategy {
    /// Silent high frequencies: ideal band-limited (sinc) interpolation
    ZeroPadding,

    /// Spectrum replicated with period `n`: zero-stuffing, to be shaped by a
    /// filter kernel
    Periodization,
}

impl ZoomStrategy {
    /// Zoom a shifted spectrum by `factor`
    pub fn zoom(&self, shifted: &[Complex64], factor: usize) -> Result<Vec<Complex64>> {
        match self {
            ZoomStrategy::ZeroPadding => zero_pad(shifted, factor),
            ZoomStrategy::Periodization => periodize(shifted, factor),
        }
    }
}

/// Zoom a shifted 2D spectrum, rows by `factors.1` then columns by `factors.0`
pub fn zoom_2d(
    shifted: ArrayView2<'_, Complex64>,
    factors: (usize, usize),
    strategy: ZoomStrategy,
) -> Result<Array2<Complex64>> {
    let (rows, cols) = shifted.dim();
    let (row_factor, col_factor) = factors;

    let wide = map_lanes(shifted, Axis(1), zoomed_len(cols, col_factor)?, |row| {
        strategy.zoom(row, col_factor)
    })?;
    map_lanes(wide.view(), Axis(0), zoomed_len(rows, row_factor)?, |col| {
        strategy.zoom(col, row_factor)
    })
}

/// Shared argument checks; returns the zoomed length
pub(crate) fn check_zoom(len: usize, factor: usize) -> Result<usize> {
    if factor == 0 {
        return Err(ResampleError::InvalidZoomFactor(factor));
    }
    if len == 0 {
        return Err(ResampleError::EmptyInput { rows: 1, cols: 0 });
    }
    zoomed_len(len, factor)
}

/// Index of the first original bin inside the zoomed (shifted) spectrum
pub(crate) fn block_offset(len: usize, zoomed: usize) -> usize {
    zoomed / 2 - len / 2
}
