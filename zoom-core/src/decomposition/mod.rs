//! Signal decomposition ahead of spectral zoom

pub mod periodic_smooth;
pub mod smooth;

pub use periodic_smooth::{decompose, decompose_image, Decomposition};
pub use smooth::{upsample_smooth, upsample_smooth_image};

use crate::error::Result;
use ndarray::{Array2, ArrayView2};

/// Whether the boundary trend is split off before the spectral zoom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecompositionPolicy {
    /// Zoom the whole signal in the frequency domain
    Regular,

    /// Zoom the periodic part spectrally and the smooth part spatially
    #[default]
    PeriodicSmooth,
}

impl DecompositionPolicy {
    /// Split an image according to the policy
    ///
    /// # Returns
    /// `(periodic, smooth)`; `smooth` is `None` for [`DecompositionPolicy::Regular`]
    pub fn split(&self, image: ArrayView2<'_, f64>) -> Result<(Array2<f64>, Option<Array2<f64>>)> {
        match self {
            DecompositionPolicy::Regular => Ok((image.to_owned(), None)),
            DecompositionPolicy::PeriodicSmooth => {
                let (periodic, smooth) = decompose_image(image)?;
                Ok((periodic, Some(smooth)))
            }
        }
    }
}
