//! Per-call resampling configuration

use crate::decomposition::DecompositionPolicy;
use crate::error::{ResampleError, Result};
use crate::filters::FilterKernel;
use crate::observe::Level;
use crate::padding::PaddingSpec;
use crate::ratio::ZoomRatio;
use crate::zoom::ZoomStrategy;

/// Resampling configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ResampleConfig {
    /// Zoom factor (numerator of the ratio)
    pub zoom_factor: usize,

    /// Output resolution (denominator of the ratio), 1 when unset
    pub output_resolution: Option<usize>,

    /// Optional filter kernel; `None` is the all-pass kernel
    pub filter: Option<FilterKernel>,

    /// Normalize each polyphase component of the filter before use
    pub normalize_filter: bool,

    /// Filter tap `(row, col)` taken as the kernel centre; the centre tap when unset
    pub hot_point: Option<(usize, usize)>,

    /// Boundary padding applied before the zoom and cropped afterwards
    pub padding: PaddingSpec,

    /// Periodic-smooth split or plain spectral zoom
    pub decomposition: DecompositionPolicy,

    /// Explicit strategy; when unset it follows the presence of a filter
    pub zoom_strategy: Option<ZoomStrategy>,

    /// Threshold of the default observer
    pub verbosity: Level,
}

impl Default for ResampleConfig {
    fn default() -> Self {
        Self {
            zoom_factor: 2,
            output_resolution: None,
            filter: None,
            normalize_filter: false,
            hot_point: None,
            padding: PaddingSpec::default(),
            decomposition: DecompositionPolicy::default(),
            zoom_strategy: None,
            verbosity: Level::default(),
        }
    }
}

impl ResampleConfig {
    /// Default configuration zooming by `zoom_factor`
    pub fn new(zoom_factor: usize) -> Self {
        Self {
            zoom_factor,
            ..Self::default()
        }
    }

    pub fn with_output_resolution(mut self, output_resolution: usize) -> Self {
        self.output_resolution = Some(output_resolution);
        self
    }

    pub fn with_filter(mut self, filter: FilterKernel) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_normalized_filter(mut self, normalize: bool) -> Self {
        self.normalize_filter = normalize;
        self
    }

    /// Centre the filter on tap `(row, col)` instead of its middle tap
    pub fn with_hot_point(mut self, row: usize, col: usize) -> Self {
        self.hot_point = Some((row, col));
        self
    }

    pub fn with_padding(mut self, padding: PaddingSpec) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_decomposition(mut self, decomposition: DecompositionPolicy) -> Self {
        self.decomposition = decomposition;
        self
    }

    pub fn with_zoom_strategy(mut self, strategy: ZoomStrategy) -> Self {
        self.zoom_strategy = Some(strategy);
        self
    }

    pub fn with_verbosity(mut self, verbosity: Level) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Reduced zoom ratio `zoom_factor : output_resolution`
    pub fn ratio(&self) -> Result<ZoomRatio> {
        ZoomRatio::new(self.zoom_factor, self.output_resolution.unwrap_or(1))
    }

    /// Strategy to use for this configuration
    ///
    /// * explicit periodization without a filter is rejected
    /// * explicit zero-padding is kept, with or without a filter
    /// * unset: periodization when a filter is given, zero-padding otherwise
    pub fn resolve_strategy(&self) -> Result<ZoomStrategy> {
        match (self.zoom_strategy, self.filter.is_some()) {
            (Some(ZoomStrategy::Periodization), false) => Err(
                ResampleError::StrategyRequiresKernel(ZoomStrategy::Periodization),
            ),
            (Some(strategy), _) => Ok(strategy),
            (None, true) => Ok(ZoomStrategy::Periodization),
            (None, false) => Ok(ZoomStrategy::ZeroPadding),
        }
    }
}
