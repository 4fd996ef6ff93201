//! # atrous-swt
//!
//! Stationary (undecimated) wavelet transforms in one, two and N
//! dimensions, with exact inverses.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["ArrayD<f64>"] -->|"swtn(view, &config, axes)?"| B["Vec<LevelCoeffs>"]
//!     B -->|"iswtn(&levels, &wavelet, axes)?"| A
//!     B --> C[".get_str(\"ad\")"]
//!     B --> D[".approximation()"]
//! ```
//!
//! Levels are returned coarsest first. Every sub-band keeps the input's
//! shape; a decomposition over `k` axes has `2^k` sub-bands per level,
//! keyed by strings over `{a, d}` such as `"ad"`.
//!
//! ## Entry Points
//!
//! | Forward | Inverse | Result per level |
//! |---------|---------|------------------|
//! | [`swt`] | [`iswt`], [`iswt_axis`] | [`SwtLevel1d`] |
//! | [`swt2`] | [`iswt2`] | [`SwtLevel2d`] |
//! | [`swtn`] | [`iswtn`] | [`LevelCoeffs`] |
//!
//! Each has a `*_complex` counterpart for `Complex64` data.
//!
//! ## Quick Start
//!
//! ```ignore
//! use atrous_swt::{SwtConfig, WaveletSelector, iswtn, swtn};
//!
//! let wavelet = WaveletSelector::from_name("db2")?;
//! let config = SwtConfig::new(wavelet.clone()).with_level(2);
//! let levels = swtn(image.view().into_dyn(), &config, None)?;
//! let restored = iswtn(&levels, &wavelet, None)?;
//! ```

mod axes;
mod complex;
mod config;
mod error;
mod iswtn;
mod odometer;
mod selector;
mod subband;
mod swt1d;
mod swt2d;
mod swtn;

pub use atrous_dwt::{Wavelet, WaveletFamily, swt_max_level};
pub use axes::{normalize_axes, normalize_axis};
pub use complex::{
    CombineParts, SplitParts, iswt_axis_complex, iswt_complex, iswt2_complex, iswtn_complex,
    split_complex, swt_complex, swt2_complex, swtn_complex,
};
pub use config::SwtConfig;
pub use error::SwtError;
pub use iswtn::iswtn;
pub use selector::WaveletSelector;
pub use subband::{LevelCoeffs, SubbandKey, SwtLevel1d, SwtLevel2d};
pub use swt1d::{iswt, iswt_axis, swt};
pub use swt2d::{iswt2, swt2};
pub use swtn::swtn;
