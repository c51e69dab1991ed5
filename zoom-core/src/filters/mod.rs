//! Filter kernels: design, preparation and spectral application

pub mod design;
pub mod kernel;
pub mod windows;

pub use design::{design_interpolation_kernel, frequency_response};
pub use kernel::{apply_kernel, normalize_polyphase, prepare_kernel, FilterKernel};
pub use windows::{generate_window, WindowType};
