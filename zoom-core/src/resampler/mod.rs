//! Resampling orchestrator
//!
//! Per band: pad, split into periodic and smooth parts, zoom the periodic
//! part in the frequency domain (transform, shift, zoom, unshift, filter,
//! inverse), upsample the smooth part spatially, sum, crop the padding and
//! the filter margin, then keep every `o`-th sample of a `k:o` ratio.
//!
//! Everything that can fail is checked in [`Resampler::plan`] before the
//! first transform. Bands are independent and run on the rayon pool.

pub mod config;

pub use config::ResampleConfig;

use crate::decomposition::upsample_smooth_image;
use crate::error::{zoomed_len, ResampleError, Result};
use crate::filters::{apply_kernel, prepare_kernel, FilterKernel};
use crate::observe::{Level, NullObserver, Observer, TracingObserver};
use crate::padding::pad_image;
use crate::ratio::ZoomRatio;
use crate::spectrum::{forward_2d, inverse_2d_real, shift_2d, unshift_2d};
use crate::zoom::{zoom_2d, ZoomStrategy};
use ndarray::{s, Array2, Array3, ArrayView2, ArrayView3, Axis};
use num_complex::Complex64;
use rayon::prelude::*;
use std::ops::Range;
use std::sync::Arc;

/// How the rows of a band are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    /// Both axes are zoomed
    Image,

    /// A single row; only the column axis is zoomed
    Signal,
}

/// Validated, per-call resampling plan
#[derive(Debug, Clone, PartialEq)]
pub struct ResamplePlan {
    /// Reduced zoom ratio
    pub ratio: ZoomRatio,

    /// Resolved zoom strategy
    pub strategy: ZoomStrategy,

    /// Zoom factor per axis `(rows, cols)`
    pub factors: (usize, usize),

    /// Decimation step per axis `(rows, cols)`
    pub steps: (usize, usize),

    /// Filter margin per edge `((top, bottom), (left, right))`, in input samples
    pub margins: ((usize, usize), (usize, usize)),

    /// Size of the zoomed, padded band
    pub zoomed_shape: (usize, usize),

    /// Rows of the zoomed band kept in the output (before decimation)
    pub row_window: Range<usize>,

    /// Columns of the zoomed band kept in the output (before decimation)
    pub col_window: Range<usize>,

    /// Size of every output band
    pub output_shape: (usize, usize),

    /// No zoom and no filter: the band is only decimated
    pub identity: bool,

    /// Kernel actually applied (normalized if requested)
    kernel: Option<FilterKernel>,

    /// Kernel tap placed at zero phase
    anchor: (usize, usize),
}

/// Frequency-domain resampler
pub struct Resampler {
    config: ResampleConfig,
    observer: Arc<dyn Observer>,
}

impl Resampler {
    /// Resampler reporting through a [`TracingObserver`] at `config.verbosity`
    ///
    /// A verbosity of [`Level::Off`] installs a [`NullObserver`] instead.
    pub fn new(config: ResampleConfig) -> Self {
        let observer: Arc<dyn Observer> = match config.verbosity {
            Level::Off => Arc::new(NullObserver),
            verbosity => Arc::new(TracingObserver::new(verbosity)),
        };
        Self { config, observer }
    }

    /// Replace the observer
    pub fn with_observer(mut self, observer: Arc<dyn Observer>) -> Self {
        self.observer = observer;
        self
    }

    pub fn config(&self) -> &ResampleConfig {
        &self.config
    }

    /// Validate the configuration against `bands` bands of `rows x cols`
    pub fn plan(&self, bands: usize, rows: usize, cols: usize) -> Result<ResamplePlan> {
        self.plan_layout((bands, rows, cols), Layout::Image)
    }

    /// Resample every band of `input` (bands x rows x cols)
    pub fn resample(&self, input: &Array3<f64>) -> Result<Array3<f64>> {
        self.run(input.view(), Layout::Image)
    }

    /// Resample a single 2D band
    pub fn resample_image(&self, image: &Array2<f64>) -> Result<Array2<f64>> {
        let output = self.run(image.view().insert_axis(Axis(0)), Layout::Image)?;
        Ok(output.index_axis_move(Axis(0), 0))
    }

    /// Resample a 1D signal
    ///
    /// Only left/right padding applies, and a filter kernel must be a single row.
    pub fn resample_signal(&self, signal: &[f64]) -> Result<Vec<f64>> {
        let view = ArrayView2::from_shape((1, signal.len()), signal)
            .map_err(|e| ResampleError::DimensionMismatch(e.to_string()))?;
        let output = self.run(view.insert_axis(Axis(0)), Layout::Signal)?;
        Ok(output.iter().copied().collect())
    }

    fn run(&self, input: ArrayView3<'_, f64>, layout: Layout) -> Result<Array3<f64>> {
        let plan = self.plan_layout(input.dim(), layout)?;
        let (bands, rows, cols) = input.dim();

        self.observer.record(
            Level::Info,
            &format!(
                "resampling {} band(s) of {}x{} with ratio {} into {}x{}",
                bands, rows, cols, plan.ratio, plan.output_shape.0, plan.output_shape.1
            ),
        );

        let spectra = self.prepare_kernels(&plan, bands)?;

        let outputs = (0..bands)
            .into_par_iter()
            .map(|band| {
                let kernel = match spectra.len() {
                    0 => None,
                    1 => spectra.first(),
                    _ => spectra.get(band),
                };
                self.observer
                    .record(Level::Trace, &format!("band {}: start", band));
                self.resample_band(&plan, input.index_axis(Axis(0), band), kernel)
            })
            .collect::<Result<Vec<Array2<f64>>>>()?;

        let views: Vec<ArrayView2<'_, f64>> = outputs.iter().map(|band| band.view()).collect();
        ndarray::stack(Axis(0), &views)
            .map_err(|e| ResampleError::DimensionMismatch(e.to_string()))
    }

    fn plan_layout(&self, shape: (usize, usize, usize), layout: Layout) -> Result<ResamplePlan> {
        let config = &self.config;
        let (bands, rows, cols) = shape;

        let ratio = config.ratio()?;
        if bands == 0 || rows == 0 || cols == 0 {
            return Err(ResampleError::EmptyInput { rows, cols });
        }

        let padding = config.padding;
        if layout == Layout::Signal && (padding.top > 0 || padding.bottom > 0) {
            return Err(ResampleError::VerticalPaddingOnSignal);
        }
        padding.validate(rows, cols)?;

        let strategy = config.resolve_strategy()?;
        if strategy == ZoomStrategy::ZeroPadding && config.filter.is_some() {
            self.observer.record(
                Level::Warn,
                "zero-padding zoom with a filter: the filter shapes band-limited output",
            );
        }

        let k = ratio.input_resolution();
        let o = ratio.output_resolution();
        let (factors, steps) = match layout {
            Layout::Image => ((k, k), (o, o)),
            Layout::Signal => ((1, k), (1, o)),
        };

        let padded_shape = padding.padded_shape(rows, cols)?;
        let zoomed_shape = (
            zoomed_len(padded_shape.0, factors.0)?,
            zoomed_len(padded_shape.1, factors.1)?,
        );

        let mut anchor = (0, 0);
        let kernel = match &config.filter {
            Some(kernel) => {
                let (kernel_rows, kernel_cols) = kernel.dim();
                if layout == Layout::Signal && kernel_rows != 1 {
                    return Err(ResampleError::DimensionMismatch(format!(
                        "{}x{} filter kernel cannot filter a 1D signal",
                        kernel_rows, kernel_cols
                    )));
                }
                kernel.check_bands(bands)?;
                anchor = kernel.anchor(config.hot_point)?;
                if kernel_rows > zoomed_shape.0 || kernel_cols > zoomed_shape.1 {
                    return Err(ResampleError::KernelTooLarge {
                        kernel: kernel.dim(),
                        target: zoomed_shape,
                    });
                }

                if config.normalize_filter {
                    self.observer
                        .record(Level::Debug, "filter: normalize polyphase components");
                    Some(kernel.normalized(factors))
                } else {
                    Some(kernel.clone())
                }
            }
            None => None,
        };

        let margins = kernel
            .as_ref()
            .map(|kernel| kernel.margins(&ratio, config.hot_point))
            .unwrap_or(((0, 0), (0, 0)));

        let row_window = valid_window(
            zoomed_shape.0,
            (padding.top, padding.bottom),
            margins.0,
            factors.0,
            rows,
        )?;
        let col_window = valid_window(
            zoomed_shape.1,
            (padding.left, padding.right),
            margins.1,
            factors.1,
            cols,
        )?;
        let output_shape = (
            row_window.len().div_ceil(steps.0),
            col_window.len().div_ceil(steps.1),
        );

        let identity = k == 1 && kernel.is_none();

        self.observer.record(
            Level::Debug,
            &format!(
                "plan: {:?} zoom, {:?} decomposition, factors {:?}, anchor {:?}, margins {:?}",
                strategy, config.decomposition, factors, anchor, margins
            ),
        );

        Ok(ResamplePlan {
            ratio,
            strategy,
            factors,
            steps,
            margins,
            zoomed_shape,
            row_window,
            col_window,
            output_shape,
            identity,
            kernel,
            anchor,
        })
    }

    /// Kernel spectra for the zoomed shape: none, one shared, or one per band
    fn prepare_kernels(
        &self,
        plan: &ResamplePlan,
        bands: usize,
    ) -> Result<Vec<Array2<Complex64>>> {
        let Some(kernel) = plan.kernel.as_ref() else {
            return Ok(Vec::new());
        };
        if plan.identity {
            return Ok(Vec::new());
        }

        let count = kernel.band_count().unwrap_or(1).min(bands);
        (0..count)
            .map(|band| prepare_kernel(kernel.band(band)?, plan.anchor, plan.zoomed_shape))
            .collect()
    }

    fn resample_band(
        &self,
        plan: &ResamplePlan,
        band: ArrayView2<'_, f64>,
        kernel: Option<&Array2<Complex64>>,
    ) -> Result<Array2<f64>> {
        let padded = pad_image(band, &self.config.padding)?;

        let zoomed = if plan.identity {
            padded
        } else {
            let (periodic, smooth) = self.config.decomposition.split(padded.view())?;

            let spectrum = shift_2d(forward_2d(periodic.view())?.view())?;
            let spectrum = zoom_2d(spectrum.view(), plan.factors, plan.strategy)?;
            let spectrum = apply_kernel(unshift_2d(spectrum.view())?, kernel)?;
            let mut zoomed = inverse_2d_real(spectrum.view())?;

            if let Some(smooth) = smooth {
                zoomed += &upsample_smooth_image(smooth.view(), plan.factors)?;
            }
            zoomed
        };

        if zoomed.dim() != plan.zoomed_shape {
            return Err(ResampleError::DimensionMismatch(format!(
                "zoomed band is {:?}, planned {:?}",
                zoomed.dim(),
                plan.zoomed_shape
            )));
        }

        let (row_step, col_step) = plan.steps;
        let rows = plan.row_window.clone();
        let cols = plan.col_window.clone();
        Ok(zoomed
            .slice(s![rows;row_step, cols;col_step])
            .to_owned())
    }
}

/// Zoomed samples kept along one axis
///
/// The padding is cropped, and where the padding does not cover the filter
/// margin of an edge the remaining `margin - pad` input samples are trimmed
/// too: output there would mix in samples wrapped from the opposite edge.
fn valid_window(
    zoomed: usize,
    padding: (usize, usize),
    margins: (usize, usize),
    factor: usize,
    len: usize,
) -> Result<Range<usize>> {
    let start = padding.0.max(margins.0).checked_mul(factor);
    let trimmed = padding.1.max(margins.1).checked_mul(factor);

    match (start, trimmed) {
        (Some(start), Some(trimmed)) if start.saturating_add(trimmed) < zoomed => {
            Ok(start..zoomed - trimmed)
        }
        _ => Err(ResampleError::KernelMarginTooLarge {
            margin: margins.0.max(margins.1),
            len,
        }),
    }
}

/// Resample `input` (bands x rows x cols) with `config`
pub fn resample(input: &Array3<f64>, config: &ResampleConfig) -> Result<Array3<f64>> {
    Resampler::new(config.clone()).resample(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decomposition::DecompositionPolicy;
    use crate::error::ErrorKind;
    use crate::filters::{design_interpolation_kernel, WindowType};
    use crate::observe::tests::RecordingObserver;
    use crate::padding::{PaddingPolicy, PaddingSpec};
    use std::f64::consts::PI;

    fn ramp_image(rows: usize, cols: usize) -> Array2<f64> {
        Array2::from_shape_fn((rows, cols), |(r, c)| (r * 10 + c + 1) as f64)
    }

    fn recording() -> Arc<RecordingObserver> {
        Arc::new(RecordingObserver::default())
    }

    fn has_record(observer: &RecordingObserver, level: Level) -> bool {
        observer
            .records
            .lock()
            .map(|records| records.iter().any(|(l, _)| *l == level))
            .unwrap_or(false)
    }

    #[test]
    fn test_default_zoom_by_six() {
        let image = ramp_image(256, 256);
        let output = Resampler::new(ResampleConfig::new(6))
            .resample_image(&image)
            .unwrap();

        assert_eq!(output.dim(), (1536, 1536));
        // Original samples survive both the spectral and the smooth path
        for (r, c) in [(0, 0), (17, 200), (128, 128), (255, 255)] {
            assert!((output[[6 * r, 6 * c]] - image[[r, c]]).abs() < 1e-6);
        }
    }

    #[test]
    fn test_ratio_with_dirac_filter() {
        let image = ramp_image(256, 256);
        let observer = recording();
        let config = ResampleConfig::new(8)
            .with_output_resolution(4)
            .with_filter(FilterKernel::dirac(3, 3).unwrap())
            .with_decomposition(DecompositionPolicy::Regular)
            .with_zoom_strategy(ZoomStrategy::ZeroPadding);

        let output = Resampler::new(config)
            .with_observer(observer.clone())
            .resample_image(&image)
            .unwrap();

        assert_eq!(output.dim(), (512, 512));
        assert!(has_record(&observer, Level::Warn));
        for (r, c) in [(3, 5), (100, 31), (200, 250)] {
            assert!((output[[2 * r, 2 * c]] - image[[r, c]]).abs() < 1e-6);
        }
    }

    #[test]
    fn test_filter_defaults_to_periodization_and_trims_margin() {
        let image = ramp_image(256, 256);
        let taps = design_interpolation_kernel(2, 16, WindowType::Blackman).unwrap();
        let config = ResampleConfig::new(2)
            .with_output_resolution(1)
            .with_filter(FilterKernel::separable(&taps).unwrap());

        let resampler = Resampler::new(config);
        let plan = resampler.plan(1, 256, 256).unwrap();
        assert_eq!(plan.strategy, ZoomStrategy::Periodization);
        assert_eq!(plan.margins, ((16, 16), (16, 16)));
        assert_eq!(plan.row_window, 32..480);

        let output = resampler.resample_image(&image).unwrap();
        assert_eq!(output.dim(), (448, 448));

        // Output (0, 0) is input (16, 16); interpolated samples sit between
        assert!((output[[0, 0]] - image[[16, 16]]).abs() < 1e-6);
        let midpoint = 0.5 * (image[[66, 66]] + image[[66, 67]]);
        assert!((output[[100, 101]] - midpoint).abs() < 0.1);
    }

    #[test]
    fn test_zoom_out_ratio_with_filter() {
        let image = ramp_image(256, 256);
        let taps = design_interpolation_kernel(2, 16, WindowType::Blackman).unwrap();
        let filter = FilterKernel::separable(&taps).unwrap();

        // 2:3 zooms out, so the full 32-sample half-support is trimmed:
        // (512 - 2 * 64) / 3 rounded up
        let config = ResampleConfig::new(2)
            .with_output_resolution(3)
            .with_filter(filter.clone())
            .with_padding(PaddingSpec::uniform(0, PaddingPolicy::Mirror))
            .with_decomposition(DecompositionPolicy::PeriodicSmooth)
            .with_zoom_strategy(ZoomStrategy::ZeroPadding);
        let output = Resampler::new(config).resample_image(&image).unwrap();
        assert_eq!(output.dim(), (128, 128));

        // 2:4 reduces to 1:2: no zoom, 256 - 2 * 32 samples, every other kept
        let config = ResampleConfig::new(2)
            .with_output_resolution(4)
            .with_filter(filter)
            .with_zoom_strategy(ZoomStrategy::ZeroPadding);
        let output = Resampler::new(config).resample_image(&image).unwrap();
        assert_eq!(output.dim(), (96, 96));
    }

    #[test]
    fn test_hot_point_on_unit_tap_is_all_pass() {
        let image = ramp_image(8, 8);
        let mut taps = Array2::zeros((3, 3));
        taps[[0, 0]] = 1.0;
        let filtered = |hot_point: Option<(usize, usize)>| {
            let mut config = ResampleConfig::new(2)
                .with_filter(FilterKernel::from_image(taps.clone()).unwrap())
                .with_zoom_strategy(ZoomStrategy::ZeroPadding)
                .with_decomposition(DecompositionPolicy::Regular);
            config.hot_point = hot_point;
            Resampler::new(config).resample_image(&image).unwrap()
        };

        let regular = ResampleConfig::new(2).with_decomposition(DecompositionPolicy::Regular);
        let plain = Resampler::new(regular).resample_image(&image).unwrap();
        let output = filtered(Some((0, 0)));

        // Both taps after the hot point reach one input sample over the top
        // and left edges, so two zoomed samples are trimmed there
        assert_eq!(output.dim(), (14, 14));
        for ((r, c), value) in output.indexed_iter() {
            assert!((value - plain[[r + 2, c + 2]]).abs() < 1e-9, "({}, {})", r, c);
        }

        // Centred on its middle tap the same kernel is a circular advance by
        // one zoomed sample, and its half-support rounds to no margin
        let shifted = filtered(None);
        assert_eq!(shifted.dim(), (16, 16));
        for ((r, c), value) in shifted.indexed_iter() {
            assert!((value - plain[[(r + 1) % 16, (c + 1) % 16]]).abs() < 1e-9);
        }
    }

    #[test]
    fn test_invalid_hot_point() {
        let config = ResampleConfig::new(2)
            .with_filter(FilterKernel::dirac(3, 3).unwrap())
            .with_hot_point(1, 3);
        let error = Resampler::new(config).plan(1, 8, 8).unwrap_err();

        assert_eq!(
            error,
            ResampleError::InvalidHotPoint {
                point: (1, 3),
                kernel: (3, 3)
            }
        );
        assert_eq!(error.kind(), ErrorKind::Validation);

        // A signal kernel has a single row
        let config = ResampleConfig::new(2)
            .with_filter(FilterKernel::from_taps(&[0.5, 1.0, 0.5]).unwrap())
            .with_hot_point(1, 0);
        assert!(matches!(
            Resampler::new(config).resample_signal(&[1.0, 2.0, 3.0, 4.0]),
            Err(ResampleError::InvalidHotPoint { .. })
        ));
    }

    #[test]
    fn test_huge_zero_padding_overflows() {
        let padding = PaddingSpec::new(0, 0, usize::MAX, 1, PaddingPolicy::Zero);
        let result = Resampler::new(ResampleConfig::new(2).with_padding(padding))
            .resample_image(&Array2::zeros((4, 4)));

        let error = result.unwrap_err();
        assert!(matches!(error, ResampleError::PaddedSizeOverflow { len: 4, .. }));
        assert_eq!(error.kind(), ErrorKind::Numeric);
    }

    #[test]
    fn test_unit_zoom_is_exact() {
        let image = Array2::from_shape_fn((7, 9), |(r, c)| ((r * 31 + c * 17) % 11) as f64 - 3.5);
        for padding in [
            PaddingSpec::default(),
            PaddingSpec::uniform(2, PaddingPolicy::Mirror),
        ] {
            let config = ResampleConfig::new(1).with_padding(padding);
            let output = Resampler::new(config).resample_image(&image).unwrap();
            assert_eq!(output, image);
        }

        let signal = [1.0, -2.0, 0.25];
        let output = Resampler::new(ResampleConfig::new(3).with_output_resolution(3))
            .resample_signal(&signal)
            .unwrap();
        assert_eq!(output, signal.to_vec());
    }

    #[test]
    fn test_rational_ratio_decimates() {
        let image = ramp_image(8, 8);
        let config = ResampleConfig::new(3).with_output_resolution(2);
        let output = Resampler::new(config).resample_image(&image).unwrap();

        // 8 * 3 = 24 zoomed samples, every other one kept
        assert_eq!(output.dim(), (12, 12));
        assert!((output[[0, 0]] - image[[0, 0]]).abs() < 1e-9);
        // Output (3, 3) is zoomed (6, 6), i.e. input (2, 2)
        assert!((output[[3, 3]] - image[[2, 2]]).abs() < 1e-9);
    }

    #[test]
    fn test_padding_is_cropped() {
        let image = ramp_image(12, 10);
        for policy in [PaddingPolicy::Mirror, PaddingPolicy::Periodic, PaddingPolicy::Zero] {
            let config = ResampleConfig::new(2)
                .with_padding(PaddingSpec::new(3, 1, 2, 4, policy));
            let output = Resampler::new(config).resample_image(&image).unwrap();

            assert_eq!(output.dim(), (24, 20));
            assert!((output[[0, 0]] - image[[0, 0]]).abs() < 1e-9);
            assert!((output[[22, 18]] - image[[11, 9]]).abs() < 1e-9);
        }
    }

    #[test]
    fn test_decomposition_reduces_ringing() {
        let n = 32;
        let signal: Vec<f64> = (0..n).map(|i| i as f64).collect();

        let midpoint_error = |decomposition: DecompositionPolicy| {
            let config = ResampleConfig::new(2).with_decomposition(decomposition);
            let output = Resampler::new(config).resample_signal(&signal).unwrap();
            (0..n - 1)
                .map(|i| (output[2 * i + 1] - (i as f64 + 0.5)).abs())
                .fold(0.0, f64::max)
        };

        let regular = midpoint_error(DecompositionPolicy::Regular);
        let periodic_smooth = midpoint_error(DecompositionPolicy::PeriodicSmooth);
        assert!(periodic_smooth * 4.0 < regular, "{} vs {}", periodic_smooth, regular);
    }

    #[test]
    fn test_signal_tone_interpolation() {
        let n = 16;
        let k = 4;
        let tone = |t: f64| (2.0 * PI * 3.0 * t / n as f64).sin();
        let signal: Vec<f64> = (0..n).map(|i| tone(i as f64)).collect();

        let config = ResampleConfig::new(k).with_decomposition(DecompositionPolicy::Regular);
        let output = Resampler::new(config).resample_signal(&signal).unwrap();

        assert_eq!(output.len(), n * k);
        for (m, y) in output.iter().enumerate() {
            assert!((y - tone(m as f64 / k as f64)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_normalized_dirac_periodization_stuffs_zeros() {
        let image = ramp_image(6, 6);
        let config = ResampleConfig::new(2)
            .with_filter(FilterKernel::dirac(3, 3).unwrap())
            .with_normalized_filter(true)
            .with_decomposition(DecompositionPolicy::Regular);
        let output = Resampler::new(config).resample_image(&image).unwrap();

        assert_eq!(output.dim(), (12, 12));
        for ((r, c), value) in output.indexed_iter() {
            let expected = if r % 2 == 0 && c % 2 == 0 {
                image[[r / 2, c / 2]]
            } else {
                0.0
            };
            assert!((value - expected).abs() < 1e-9, "({}, {}): {}", r, c, value);
        }
    }

    #[test]
    fn test_per_band_kernels() {
        let input = Array3::from_shape_fn((2, 6, 6), |(b, r, c)| (b * 100 + r * 6 + c) as f64);
        let stack = Array3::from_shape_fn((2, 1, 1), |(b, _, _)| (b + 1) as f64);
        let config = ResampleConfig::new(2)
            .with_filter(FilterKernel::per_band(stack).unwrap())
            .with_zoom_strategy(ZoomStrategy::ZeroPadding)
            .with_decomposition(DecompositionPolicy::Regular);

        let output = resample(&input, &config).unwrap();
        assert_eq!(output.dim(), (2, 12, 12));
        // Band 1 is scaled by its 1x1 kernel
        assert!((output[[0, 4, 6]] - input[[0, 2, 3]]).abs() < 1e-9);
        assert!((output[[1, 4, 6]] - 2.0 * input[[1, 2, 3]]).abs() < 1e-9);

        let three_bands = Array3::zeros((3, 6, 6));
        assert!(matches!(
            resample(&three_bands, &config),
            Err(ResampleError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn test_validation_errors() {
        let image = ramp_image(8, 8);
        let run = |config: ResampleConfig| Resampler::new(config).resample_image(&image);

        assert!(matches!(
            run(ResampleConfig::new(0)),
            Err(ResampleError::InvalidZoomFactor(0))
        ));
        assert!(matches!(
            run(ResampleConfig::new(2).with_output_resolution(0)),
            Err(ResampleError::InvalidOutputResolution(0))
        ));
        let mirror = PaddingSpec::uniform(9, PaddingPolicy::Mirror);
        assert!(matches!(
            run(ResampleConfig::new(2).with_padding(mirror)),
            Err(ResampleError::MarginTooLarge { margin: 9, len: 8, .. })
        ));
        assert!(matches!(
            run(ResampleConfig::new(2).with_zoom_strategy(ZoomStrategy::Periodization)),
            Err(ResampleError::StrategyRequiresKernel(ZoomStrategy::Periodization))
        ));
        let wide = FilterKernel::separable(&[0.1; 17]).unwrap();
        assert!(matches!(
            run(ResampleConfig::new(2).with_filter(wide)),
            Err(ResampleError::KernelTooLarge { .. })
        ));
        // 16 taps fit in 16 zoomed samples but their margin (4 input samples
        // per edge) leaves nothing of the 8-sample band
        let even = FilterKernel::separable(&[0.1; 16]).unwrap();
        assert!(matches!(
            run(ResampleConfig::new(2).with_filter(even)),
            Err(ResampleError::KernelMarginTooLarge { .. })
        ));

        let empty = Array2::<f64>::zeros((0, 4));
        assert!(matches!(
            Resampler::new(ResampleConfig::new(2)).resample_image(&empty),
            Err(ResampleError::EmptyInput { rows: 0, cols: 4 })
        ));
        assert!(matches!(
            Resampler::new(ResampleConfig::new(2)).resample_signal(&[]),
            Err(ResampleError::EmptyInput { .. })
        ));
    }

    #[test]
    fn test_signal_validation() {
        let signal = [1.0, 2.0, 3.0, 4.0];

        let padding = PaddingSpec::new(1, 1, 1, 0, PaddingPolicy::Zero);
        let config = ResampleConfig::new(2).with_padding(padding);
        assert!(matches!(
            Resampler::new(config).resample_signal(&signal),
            Err(ResampleError::VerticalPaddingOnSignal)
        ));

        let config = ResampleConfig::new(2).with_filter(FilterKernel::dirac(3, 3).unwrap());
        assert!(matches!(
            Resampler::new(config).resample_signal(&signal),
            Err(ResampleError::DimensionMismatch(_))
        ));

        let taps = FilterKernel::from_taps(&[0.5, 1.0, 0.5]).unwrap();
        let config = ResampleConfig::new(2).with_filter(taps);
        let output = Resampler::new(config).resample_signal(&signal).unwrap();
        assert_eq!(output.len(), 8);
    }

    #[test]
    fn test_validation_happens_before_any_work() {
        let observer = recording();
        let config = ResampleConfig::new(2).with_zoom_strategy(ZoomStrategy::Periodization);
        let result = Resampler::new(config)
            .with_observer(observer.clone())
            .resample_image(&ramp_image(4, 4));

        assert!(result.is_err());
        assert!(!has_record(&observer, Level::Info));
    }

    #[test]
    fn test_null_observer_runs_silently() {
        let image = ramp_image(4, 4);
        let expected = Resampler::new(ResampleConfig::new(2))
            .resample_image(&image)
            .unwrap();

        let silent = Resampler::new(ResampleConfig::new(2).with_verbosity(Level::Off))
            .resample_image(&image)
            .unwrap();
        let injected = Resampler::new(ResampleConfig::new(2))
            .with_observer(Arc::new(NullObserver))
            .resample_image(&image)
            .unwrap();

        assert_eq!(silent, expected);
        assert_eq!(injected, expected);
    }

    #[test]
    fn test_reports_progress() {
        let observer = recording();
        Resampler::new(ResampleConfig::new(2))
            .with_observer(observer.clone())
            .resample_image(&ramp_image(4, 4))
            .unwrap();

        assert!(has_record(&observer, Level::Info));
        assert!(has_record(&observer, Level::Debug));
        assert!(!has_record(&observer, Level::Warn));
    }
}
