//! Frequency-domain transforms and spectrum reordering

pub mod fft;
pub mod shift;

pub use fft::{forward_2d, inverse_2d_real, SpectralTransformer};
pub use shift::{shift, shift_2d, unshift, unshift_2d};
