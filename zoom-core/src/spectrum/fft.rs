//! Spectral transformer built on realfft/rustfft
//!
//! Normalization: the forward transform is unnormalized and the inverse is
//! scaled by `1/n`, so `sum |x|^2 == sum |X|^2 / n` (Parseval).

use crate::error::{ResampleError, Result};
use crate::lanes::map_lanes;
use ndarray::{Array2, ArrayView2, Axis};
use num_complex::Complex64;
use realfft::{RealFftPlanner, RealToComplex};
use rustfft::{Fft, FftPlanner};
use std::sync::Arc;

/// Planned forward/inverse transforms for one signal length
///
/// Plans are shared through `Arc`, so one transformer can serve every lane
/// of an axis pass concurrently.
#[derive(Clone)]
pub struct SpectralTransformer {
    /// Transform length
    len: usize,

    /// Real-input forward FFT (half spectrum)
    r2c: Arc<dyn RealToComplex<f64>>,

    /// Complex forward FFT
    forward: Arc<dyn Fft<f64>>,

    /// Complex inverse FFT (unnormalized)
    inverse: Arc<dyn Fft<f64>>,
}

impl SpectralTransformer {
    /// Plan transforms of length `len`
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(ResampleError::EmptyInput { rows: 1, cols: 0 });
        }

        let r2c = RealFftPlanner::<f64>::new().plan_fft_forward(len);
        let mut planner = FftPlanner::new();
        let forward = planner.plan_fft_forward(len);
        let inverse = planner.plan_fft_inverse(len);

        Ok(Self {
            len,
            r2c,
            forward,
            inverse,
        })
    }

    /// Transform length
    pub fn len(&self) -> usize {
        self.len
    }

    fn check_len(&self, actual: usize) -> Result<()> {
        if actual != self.len {
            return Err(ResampleError::DimensionMismatch(format!(
                "transform planned for {} samples, got {}",
                self.len, actual
            )));
        }
        Ok(())
    }

    /// Full spectrum of a real signal, standard (unshifted) bin order
    ///
    /// The half spectrum from the real FFT is completed with the Hermitian
    /// mirror `X[n-j] = conj(X[j])`.
    pub fn forward(&self, signal: &[f64]) -> Result<Vec<Complex64>> {
        self.check_len(signal.len())?;

        if self.len == 1 {
            return Ok(vec![Complex64::new(signal[0], 0.0)]);
        }

        let mut input = signal.to_vec();
        let mut half = self.r2c.make_output_vec();
        self.r2c
            .process(&mut input, &mut half)
            .map_err(|e| ResampleError::Transform(e.to_string()))?;

        let n = self.len;
        let mut spectrum = Vec::with_capacity(n);
        spectrum.extend_from_slice(&half);
        for j in half.len()..n {
            spectrum.push(half[n - j].conj());
        }

        Ok(spectrum)
    }

    /// Forward transform of complex samples, standard bin order
    pub fn forward_complex(&self, samples: &[Complex64]) -> Result<Vec<Complex64>> {
        self.check_len(samples.len())?;

        let mut buffer = samples.to_vec();
        self.forward.process(&mut buffer);
        Ok(buffer)
    }

    /// Inverse transform, scaled by `1/n`
    pub fn inverse(&self, spectrum: &[Complex64]) -> Result<Vec<Complex64>> {
        self.check_len(spectrum.len())?;

        let mut buffer = spectrum.to_vec();
        self.inverse.process(&mut buffer);

        let scale = 1.0 / self.len as f64;
        for value in buffer.iter_mut() {
            *value *= scale;
        }

        Ok(buffer)
    }
}

/// 2D spectrum of a real image: row transforms, then column transforms
pub fn forward_2d(image: ArrayView2<'_, f64>) -> Result<Array2<Complex64>> {
    let (rows, cols) = image.dim();
    let row_fft = SpectralTransformer::new(cols)?;
    let col_fft = SpectralTransformer::new(rows)?;

    let row_spectra = map_lanes(image, Axis(1), cols, |row| row_fft.forward(row))?;
    map_lanes(row_spectra.view(), Axis(0), rows, |col| col_fft.forward_complex(col))
}

/// Inverse of a 2D spectrum (columns, then rows); keeps the real part
pub fn inverse_2d_real(spectrum: ArrayView2<'_, Complex64>) -> Result<Array2<f64>> {
    let (rows, cols) = spectrum.dim();
    let row_fft = SpectralTransformer::new(cols)?;
    let col_fft = SpectralTransformer::new(rows)?;

    let columns = map_lanes(spectrum, Axis(0), rows, |col| col_fft.inverse(col))?;
    map_lanes(columns.view(), Axis(1), cols, |row| {
        Ok(row_fft.inverse(row)?.iter().map(|c| c.re).collect())
    })
}
