//! Spectral Zoom - Frequency-Domain Resampling Core
//!
//! Zooms 1D signals and 2D image bands by rational ratios in the frequency
//! domain. Boundary ringing is limited by a periodic plus smooth split, and
//! an optional filter kernel shapes the zoomed spectrum.

pub mod decomposition;
pub mod error;
pub mod filters;
pub mod observe;
pub mod padding;
pub mod ratio;
pub mod resampler;
pub mod spectrum;
pub mod zoom;

mod lanes;

pub use decomposition::DecompositionPolicy;
pub use error::{ErrorKind, ResampleError, Result};
pub use filters::{FilterKernel, WindowType};
pub use observe::{Level, NullObserver, Observer, TracingObserver};
pub use padding::{PaddingPolicy, PaddingSpec};
pub use ratio::ZoomRatio;
pub use resampler::{resample, ResampleConfig, ResamplePlan, Resampler};
pub use spectrum::SpectralTransformer;
pub use zoom::ZoomStrategy;
