//! # atrous-dwt
//!
//! Periodized single-level wavelet primitives shared by the stationary
//! transforms in `atrous-swt`.
//!
//! ## Building Blocks
//!
//! | Function | Purpose |
//! |----------|---------|
//! | [`swt_step_axis`] | one dilated (à-trous) analysis step along an axis |
//! | [`dwt_axis`] / [`idwt_axis`] | decimated periodized analysis / synthesis along an axis |
//! | [`idwtn`] | separable synthesis over several axes |
//! | [`dwt_periodized`] / [`idwt_periodized`] | the same on plain slices |
//! | [`swt_max_level`] | deepest feasible stationary level |
//!
//! ## Quick Start
//!
//! ```ignore
//! use atrous_dwt::{Wavelet, dwt_periodized, idwt_periodized};
//!
//! let w = Wavelet::from_name("db2")?;
//! let (ca, cd) = dwt_periodized(&[1.0, 2.0, 3.0, 4.0], &w)?;
//! let x = idwt_periodized(&ca, &cd, &w)?;
//! ```

mod axis;
mod error;
mod level;
mod periodic;
mod wavelet;

pub use axis::{dwt_axis, idwt_axis, idwtn, swt_step_axis};
pub use error::DwtError;
pub use level::swt_max_level;
pub use periodic::{dwt_periodized, idwt_periodized};
pub use wavelet::{Wavelet, WaveletFamily};
