//! Axis-separable lane passes over 2D arrays
//!
//! A lane is one row (along `Axis(1)`) or one column (along `Axis(0)`).
//! Lanes of a pass are independent, so they run on the rayon pool and each
//! writes its own slice of the output.

use crate::error::{ResampleError, Result};
use ndarray::parallel::prelude::*;
use ndarray::{Array2, ArrayView2, Axis};

/// Map every lane of `input` running along `axis` through `f`
///
/// # Arguments
/// * `input` - Source array
/// * `axis` - Axis the lanes run along
/// * `out_len` - Length every mapped lane must have
/// * `f` - Lane transform, called concurrently
///
/// # Returns
/// Array whose length along `axis` is `out_len`, other axis unchanged
pub(crate) fn map_lanes<A, B, F>(
    input: ArrayView2<'_, A>,
    axis: Axis,
    out_len: usize,
    f: F,
) -> Result<Array2<B>>
where
    A: Clone + Send + Sync,
    B: Clone + Send + Sync,
    F: Fn(&[A]) -> Result<Vec<B>> + Send + Sync,
{
    let across = Axis(1 - axis.index());

    let lanes = input
        .axis_iter(across)
        .into_par_iter()
        .map(|lane| {
            let samples = lane.to_vec();
            let mapped = f(&samples)?;
            if mapped.len() != out_len {
                return Err(ResampleError::DimensionMismatch(format!(
                    "lane pass produced {} samples, expected {}",
                    mapped.len(),
                    out_len
                )));
            }
            Ok(mapped)
        })
        .collect::<Result<Vec<Vec<B>>>>()?;

    let lane_count = lanes.len();
    let flat: Vec<B> = lanes.into_iter().flatten().collect();
    let stacked = Array2::from_shape_vec((lane_count, out_len), flat)
        .map_err(|e| ResampleError::DimensionMismatch(e.to_string()))?;

    if axis == Axis(1) {
        Ok(stacked)
    } else {
        Ok(stacked.reversed_axes().as_standard_layout().into_owned())
    }
}
