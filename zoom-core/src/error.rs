//! Error types for the resampling engine
//!
//! Every failure is returned synchronously to the caller of the resampler.
//! Validation happens before the first transform runs.

use crate::padding::PaddingPolicy;
use crate::zoom::ZoomStrategy;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResampleError {
    #[error("Invalid zoom factor {0}: must be at least 1")]
    InvalidZoomFactor(usize),

    #[error("Invalid output resolution {0}: must be at least 1")]
    InvalidOutputResolution(usize),

    #[error("Invalid zoom ratio string: {0}")]
    InvalidRatio(String),

    #[error("Empty input ({rows}x{cols})")]
    EmptyInput { rows: usize, cols: usize },

    #[error("{policy:?} padding margin {margin} exceeds signal length {len}")]
    MarginTooLarge {
        policy: PaddingPolicy,
        margin: usize,
        len: usize,
    },

    #[error("Top/bottom padding is not defined for 1D signals")]
    VerticalPaddingOnSignal,

    #[error("Filter kernel {kernel:?} is larger than the zoomed size {target:?}")]
    KernelTooLarge {
        kernel: (usize, usize),
        target: (usize, usize),
    },

    #[error("Filter margin {margin} leaves no valid output samples (axis length {len})")]
    KernelMarginTooLarge { margin: usize, len: usize },

    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    #[error("{0:?} zoom requires a filter kernel")]
    StrategyRequiresKernel(ZoomStrategy),

    #[error("Transform failed: {0}")]
    Transform(String),

    #[error("Zoomed size overflows: {len} x {factor}")]
    SizeOverflow { len: usize, factor: usize },

    #[error("Padded size overflows: {lead} + {len} + {trail}")]
    PaddedSizeOverflow {
        len: usize,
        lead: usize,
        trail: usize,
    },

    #[error("Invalid hot point {point:?} for a {kernel:?} filter kernel")]
    InvalidHotPoint {
        point: (usize, usize),
        kernel: (usize, usize),
    },
}

/// Coarse classification of [`ResampleError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input or parameters, detected before any computation
    Validation,

    /// Transform or allocation failure
    Numeric,

    /// Explicit options that contradict each other
    Configuration,
}

impl ResampleError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResampleError::Transform(_)
            | ResampleError::SizeOverflow { .. }
            | ResampleError::PaddedSizeOverflow { .. } => ErrorKind::Numeric,
            ResampleError::StrategyRequiresKernel(_) => ErrorKind::Configuration,
            _ => ErrorKind::Validation,
        }
    }
}

pub type Result<T> = std::result::Result<T, ResampleError>;

/// `len * factor`, or [`ResampleError::SizeOverflow`]
pub(crate) fn zoomed_len(len: usize, factor: usize) -> Result<usize> {
    len.checked_mul(factor)
        .ok_or(ResampleError::SizeOverflow { len, factor })
}

/// `lead + len + trail`, or [`ResampleError::PaddedSizeOverflow`]
pub(crate) fn padded_len(len: usize, lead: usize, trail: usize) -> Result<usize> {
    len.checked_add(lead)
        .and_then(|sum| sum.checked_add(trail))
        .ok_or(ResampleError::PaddedSizeOverflow { len, lead, trail })
}
