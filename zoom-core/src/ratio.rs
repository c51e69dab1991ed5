//! Rational zoom ratio `input_resolution : output_resolution`
//!
//! A ratio of `k:o` zooms the signal by `k` and then keeps every `o`-th
//! sample, for an overall scale of `k / o`. Ratios are stored reduced.

use crate::error::{ResampleError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomRatio {
    input_resolution: usize,
    output_resolution: usize,
}

impl ZoomRatio {
    /// Build a ratio reduced by the GCD of both terms (8:4 becomes 2:1)
    ///
    /// # Arguments
    /// * `input_resolution` - Zoom factor applied in the frequency domain
    /// * `output_resolution` - Decimation step applied afterwards
    pub fn new(input_resolution: usize, output_resolution: usize) -> Result<Self> {
        if input_resolution == 0 {
            return Err(ResampleError::InvalidZoomFactor(input_resolution));
        }
        if output_resolution == 0 {
            return Err(ResampleError::InvalidOutputResolution(output_resolution));
        }

        let divisor = gcd(input_resolution, output_resolution);
        Ok(Self {
            input_resolution: input_resolution / divisor,
            output_resolution: output_resolution / divisor,
        })
    }

    /// Parse `"k"` or `"k:o"`
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || ResampleError::InvalidRatio(text.to_string());
        let number = |part: &str| part.trim().parse::<usize>().map_err(|_| invalid());

        match text.split_once(':') {
            Some((input, output)) => Self::new(number(input)?, number(output)?),
            None => Self::new(number(text)?, 1),
        }
    }

    pub fn input_resolution(&self) -> usize {
        self.input_resolution
    }

    pub fn output_resolution(&self) -> usize {
        self.output_resolution
    }

    /// Overall scale `input / output`
    pub fn ratio(&self) -> f64 {
        self.input_resolution as f64 / self.output_resolution as f64
    }
}

impl fmt::Display for ZoomRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.input_resolution, self.output_resolution)
    }
}

impl FromStr for ZoomRatio {
    type Err = ResampleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}
