//! Boundary extension of signals and images
//!
//! The original samples always sit at `[left, left + n)` of the padded
//! signal, whatever the policy.

use crate::error::{padded_len, ResampleError, Result};
use crate::lanes::map_lanes;
use ndarray::{Array2, ArrayView2, Axis};

/// How new boundary samples are filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddingPolicy {
    /// Half-sample symmetric reflection: `padded[m-1-i] == padded[m+i]`
    #[default]
    Mirror,

    /// Circular extension from the opposite end
    Periodic,

    /// New samples are 0
    Zero,
}

/// Margins on each side plus the fill policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaddingSpec {
    pub left: usize,
    pub right: usize,
    pub top: usize,
    pub bottom: usize,
    pub policy: PaddingPolicy,
}

impl PaddingSpec {
    pub fn new(
        left: usize,
        right: usize,
        top: usize,
        bottom: usize,
        policy: PaddingPolicy,
    ) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
            policy,
        }
    }

    /// Same margin on all four sides
    pub fn uniform(margin: usize, policy: PaddingPolicy) -> Self {
        Self::new(margin, margin, margin, margin, policy)
    }

    pub fn is_empty(&self) -> bool {
        self.left == 0 && self.right == 0 && self.top == 0 && self.bottom == 0
    }

    /// Leading and trailing margins along `axis` (0 = rows/vertical, 1 = columns/horizontal)
    pub fn along(&self, axis: Axis) -> (usize, usize) {
        if axis == Axis(0) {
            (self.top, self.bottom)
        } else {
            (self.left, self.right)
        }
    }

    /// Check the margins against an image of `rows` x `cols`
    pub fn validate(&self, rows: usize, cols: usize) -> Result<()> {
        check_margins(cols, self.left, self.right, self.policy)?;
        check_margins(rows, self.top, self.bottom, self.policy)?;
        self.padded_shape(rows, cols).map(|_| ())
    }

    /// Size of a `rows` x `cols` image once padded
    pub fn padded_shape(&self, rows: usize, cols: usize) -> Result<(usize, usize)> {
        Ok((
            padded_len(rows, self.top, self.bottom)?,
            padded_len(cols, self.left, self.right)?,
        ))
    }
}

fn check_margins(len: usize, left: usize, right: usize, policy: PaddingPolicy) -> Result<()> {
    if len == 0 {
        return Err(ResampleError::EmptyInput { rows: 1, cols: len });
    }

    if policy != PaddingPolicy::Zero {
        let margin = left.max(right);
        if margin > len {
            return Err(ResampleError::MarginTooLarge { policy, margin, len });
        }
    }

    Ok(())
}

/// Extend a signal at both ends
///
/// # Arguments
/// * `signal` - Original samples (n >= 1)
/// * `left` - Samples added before the signal
/// * `right` - Samples added after the signal
/// * `policy` - Fill policy
///
/// # Returns
/// Padded signal of length `left + n + right`
///
/// Mirror and periodic margins may not exceed `n`.
pub fn extend(
    signal: &[f64],
    left: usize,
    right: usize,
    policy: PaddingPolicy,
) -> Result<Vec<f64>> {
    let n = signal.len();
    check_margins(n, left, right, policy)?;
    let total = padded_len(n, left, right)?;

    let len = n as isize;
    let padded = (0..total)
        .map(|p| {
            let x = p as isize - left as isize;
            if (0..len).contains(&x) {
                return signal[x as usize];
            }

            match policy {
                PaddingPolicy::Zero => 0.0,
                PaddingPolicy::Periodic => signal[x.rem_euclid(len) as usize],
                PaddingPolicy::Mirror => {
                    let reflected = if x < 0 { -x - 1 } else { 2 * len - 1 - x };
                    signal[reflected as usize]
                }
            }
        })
        .collect();

    Ok(padded)
}

/// Pad an image: rows get left/right margins, columns get top/bottom margins
pub fn pad_image(image: ArrayView2<'_, f64>, spec: &PaddingSpec) -> Result<Array2<f64>> {
    let (rows, cols) = image.dim();
    spec.validate(rows, cols)?;
    let (padded_rows, padded_cols) = spec.padded_shape(rows, cols)?;

    if spec.is_empty() {
        return Ok(image.to_owned());
    }

    let policy = spec.policy;
    let widened = map_lanes(image, Axis(1), padded_cols, |row| {
        extend(row, spec.left, spec.right, policy)
    })?;

    map_lanes(widened.view(), Axis(0), padded_rows, |col| {
        extend(col, spec.top, spec.bottom, policy)
    })
}
