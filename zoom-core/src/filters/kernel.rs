//! Filter kernels and their application to zoomed spectra
//!
//! A spatial kernel is embedded into an array of the zoomed size with its
//! anchor tap (the hot point, or the centre tap by default) at index 0, and
//! transformed once per call. The resulting spectrum multiplies every zoomed
//! band spectrum.

use crate::error::{ResampleError, Result};
use crate::padding::{PaddingPolicy, PaddingSpec};
use crate::ratio::ZoomRatio;
use crate::spectrum::forward_2d;
use ndarray::{s, Array2, Array3, ArrayView2, Axis, Zip};
use num_complex::Complex64;

/// Spatial filter kernel, at the zoomed sampling rate
#[derive(Debug, Clone, PartialEq)]
pub enum FilterKernel {
    /// One kernel applied to every band
    Shared(Array2<f64>),

    /// One kernel per band (bands x rows x cols)
    PerBand(Array3<f64>),
}

impl FilterKernel {
    /// Kernel from a 2D array of taps
    pub fn from_image(image: Array2<f64>) -> Result<Self> {
        let (rows, cols) = image.dim();
        if rows == 0 || cols == 0 {
            return Err(ResampleError::EmptyInput { rows, cols });
        }
        Ok(FilterKernel::Shared(image))
    }

    /// Single-row kernel for 1D signals
    pub fn from_taps(taps: &[f64]) -> Result<Self> {
        let image = Array2::from_shape_vec((1, taps.len()), taps.to_vec())
            .map_err(|e| ResampleError::DimensionMismatch(e.to_string()))?;
        Self::from_image(image)
    }

    /// Square kernel `taps[r] * taps[c]`
    pub fn separable(taps: &[f64]) -> Result<Self> {
        let len = taps.len();
        Self::from_image(Array2::from_shape_fn((len, len), |(r, c)| taps[r] * taps[c]))
    }

    /// All-pass kernel: a single unit tap at the centre of a `rows x cols` grid
    pub fn dirac(rows: usize, cols: usize) -> Result<Self> {
        let mut image = Array2::zeros((rows, cols));
        if let Some(centre) = image.get_mut((rows / 2, cols / 2)) {
            *centre = 1.0;
        }
        Self::from_image(image)
    }

    /// Kernel stack with one kernel per band
    pub fn per_band(stack: Array3<f64>) -> Result<Self> {
        let (bands, rows, cols) = stack.dim();
        if bands == 0 || rows == 0 || cols == 0 {
            return Err(ResampleError::EmptyInput { rows, cols });
        }
        Ok(FilterKernel::PerBand(stack))
    }

    /// Kernel size `(rows, cols)`
    pub fn dim(&self) -> (usize, usize) {
        match self {
            FilterKernel::Shared(image) => image.dim(),
            FilterKernel::PerBand(stack) => {
                let (_, rows, cols) = stack.dim();
                (rows, cols)
            }
        }
    }

    /// Number of kernels in a per-band stack
    pub fn band_count(&self) -> Option<usize> {
        match self {
            FilterKernel::Shared(_) => None,
            FilterKernel::PerBand(stack) => Some(stack.len_of(Axis(0))),
        }
    }

    /// Reject a per-band stack whose band count differs from the input
    pub fn check_bands(&self, bands: usize) -> Result<()> {
        match self.band_count() {
            Some(count) if count != bands => Err(ResampleError::DimensionMismatch(format!(
                "filter has {} band kernels, input has {} bands",
                count, bands
            ))),
            _ => Ok(()),
        }
    }

    /// Kernel for one band
    pub fn band(&self, index: usize) -> Result<ArrayView2<'_, f64>> {
        match self {
            FilterKernel::Shared(image) => Ok(image.view()),
            FilterKernel::PerBand(stack) => {
                if index >= stack.len_of(Axis(0)) {
                    return Err(ResampleError::DimensionMismatch(format!(
                        "no filter kernel for band {}",
                        index
                    )));
                }
                Ok(stack.index_axis(Axis(0), index))
            }
        }
    }

    /// Tap placed at zero phase: `hot_point`, or the centre tap
    ///
    /// # Arguments
    /// * `hot_point` - Optional `(row, col)` of the kernel centre
    ///
    /// # Returns
    /// The anchor `(row, col)`, or [`ResampleError::InvalidHotPoint`] when the
    /// point lies outside the kernel
    pub fn anchor(&self, hot_point: Option<(usize, usize)>) -> Result<(usize, usize)> {
        let (rows, cols) = self.dim();
        match hot_point {
            None => Ok((rows / 2, cols / 2)),
            Some((row, col)) if row < rows && col < cols => Ok((row, col)),
            Some(point) => Err(ResampleError::InvalidHotPoint {
                point,
                kernel: (rows, cols),
            }),
        }
    }

    /// Filter margin per axis, as `((top, bottom), (left, right))` input samples
    ///
    /// Without a hot point both edges get the half-support of the kernel,
    /// `(L-1)/2` for odd `L` and `L/2` for even `L`. With a hot point at `a`
    /// the leading edge gets the `L-1-a` taps after it and the trailing edge
    /// the `a` taps before it. Margins are scaled to the input rate when
    /// zooming in.
    pub fn margins(
        &self,
        ratio: &ZoomRatio,
        hot_point: Option<(usize, usize)>,
    ) -> ((usize, usize), (usize, usize)) {
        let (rows, cols) = self.dim();
        let support = |len: usize, anchor: Option<usize>| {
            let (lead, trail) = match anchor {
                Some(anchor) => (len.saturating_sub(anchor).saturating_sub(1), anchor),
                None => (half_support(len), half_support(len)),
            };
            (scaled_margin(lead, ratio), scaled_margin(trail, ratio))
        };
        (
            support(rows, hot_point.map(|point| point.0)),
            support(cols, hot_point.map(|point| point.1)),
        )
    }

    /// Padding that fully absorbs the filter margin
    pub fn padding(
        &self,
        ratio: &ZoomRatio,
        hot_point: Option<(usize, usize)>,
        policy: PaddingPolicy,
    ) -> PaddingSpec {
        let ((top, bottom), (left, right)) = self.margins(ratio, hot_point);
        PaddingSpec::new(left, right, top, bottom, policy)
    }

    /// Copy with every polyphase component normalized (see [`normalize_polyphase`])
    pub fn normalized(&self, factors: (usize, usize)) -> Self {
        match self {
            FilterKernel::Shared(image) => {
                let mut image = image.clone();
                normalize_polyphase(&mut image, factors);
                FilterKernel::Shared(image)
            }
            FilterKernel::PerBand(stack) => {
                let mut stack = stack.clone();
                for mut band in stack.axis_iter_mut(Axis(0)) {
                    let mut image = band.to_owned();
                    normalize_polyphase(&mut image, factors);
                    band.assign(&image);
                }
                FilterKernel::PerBand(stack)
            }
        }
    }
}

fn half_support(len: usize) -> usize {
    if len % 2 == 0 {
        len / 2
    } else {
        (len - 1) / 2
    }
}

fn scaled_margin(half: usize, ratio: &ZoomRatio) -> usize {
    if ratio.input_resolution() > ratio.output_resolution() {
        half * ratio.output_resolution() / ratio.input_resolution()
    } else {
        half
    }
}

/// Scale each polyphase component to sum `1 / (row_factor * col_factor)`
///
/// Component `(i, j)` holds the taps at rows `i, i + row_factor, ...` and
/// columns `j, j + col_factor, ...`. Components summing to zero are left
/// unchanged.
pub fn normalize_polyphase(kernel: &mut Array2<f64>, factors: (usize, usize)) {
    let (rows, cols) = kernel.dim();
    let row_factor = factors.0.max(1);
    let col_factor = factors.1.max(1);
    let gain = (row_factor * col_factor) as f64;

    for i in 0..row_factor.min(rows) {
        for j in 0..col_factor.min(cols) {
            let mut phase = kernel.slice_mut(s![i..;row_factor, j..;col_factor]);
            let sum = phase.sum();
            if sum.abs() > f64::EPSILON {
                phase.mapv_inplace(|tap| tap / (gain * sum));
            }
        }
    }
}

/// Embed and transform a kernel for a zoomed spectrum of `shape`
///
/// Tap `(r, c)` lands at `(r - anchor_row, c - anchor_col)` modulo `shape`,
/// so the anchor tap is the zero-phase sample.
///
/// # Arguments
/// * `kernel` - Spatial kernel
/// * `anchor` - Kernel tap `(row, col)` placed at index 0
/// * `shape` - Zoomed spectrum size `(rows, cols)`
///
/// # Returns
/// Kernel spectrum in standard (unshifted) frequency order
pub fn prepare_kernel(
    kernel: ArrayView2<'_, f64>,
    anchor: (usize, usize),
    shape: (usize, usize),
) -> Result<Array2<Complex64>> {
    let (kernel_rows, kernel_cols) = kernel.dim();
    let (rows, cols) = shape;
    if kernel_rows > rows || kernel_cols > cols {
        return Err(ResampleError::KernelTooLarge {
            kernel: kernel.dim(),
            target: shape,
        });
    }
    let (anchor_row, anchor_col) = anchor;
    if anchor_row >= kernel_rows || anchor_col >= kernel_cols {
        return Err(ResampleError::InvalidHotPoint {
            point: anchor,
            kernel: kernel.dim(),
        });
    }

    let mut embedded = Array2::<f64>::zeros(shape);
    for ((r, c), &tap) in kernel.indexed_iter() {
        embedded[[(r + rows - anchor_row) % rows, (c + cols - anchor_col) % cols]] = tap;
    }

    forward_2d(embedded.view())
}

/// Multiply a zoomed spectrum by a prepared kernel spectrum
///
/// `None` is the all-pass kernel and leaves the spectrum untouched.
pub fn apply_kernel(
    mut spectrum: Array2<Complex64>,
    kernel: Option<&Array2<Complex64>>,
) -> Result<Array2<Complex64>> {
    let Some(kernel) = kernel else {
        return Ok(spectrum);
    };
    if kernel.dim() != spectrum.dim() {
        return Err(ResampleError::DimensionMismatch(format!(
            "kernel spectrum {:?} does not match zoomed spectrum {:?}",
            kernel.dim(),
            spectrum.dim()
        )));
    }

    Zip::from(&mut spectrum)
        .and(kernel)
        .par_for_each(|bin, &gain| *bin *= gain);

    Ok(spectrum)
}
