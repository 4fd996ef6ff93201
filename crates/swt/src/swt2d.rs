//! Two-axis stationary wavelet transform with named detail bands.

use ndarray::{ArrayD, ArrayViewD};

use crate::axes::normalize_axes;
use crate::config::SwtConfig;
use crate::error::SwtError;
use crate::iswtn::reconstruct;
use crate::selector::WaveletSelector;
use crate::subband::SwtLevel2d;
use crate::swtn::swtn;

/// Multilevel 2-D stationary decomposition over `axes`.
///
/// The input may have more than two dimensions; the remaining axes are
/// carried through untouched. `[-2, -1]` selects the last two axes.
///
/// # Errors
///
/// Same as [`swtn`]. Input with fewer than two dimensions fails with
/// [`SwtError::TooFewDimensions`].
pub fn swt2(
    data: ArrayViewD<'_, f64>,
    config: &SwtConfig,
    axes: [isize; 2],
) -> Result<Vec<SwtLevel2d<f64>>, SwtError> {
    swtn(data, config, Some(&axes))?
        .into_iter()
        .map(SwtLevel2d::try_from)
        .collect()
}

/// Inverse of [`swt2`].
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SwtError::EmptyDecomposition`] | `coeffs` is empty |
/// | axis errors | `axes` invalid for the coefficient arrays |
/// | [`SwtError::WaveletCount`] | a per-axis selector without exactly two wavelets |
/// | [`SwtError::ShapeMismatch`] | bands differ in shape within or across levels |
/// | [`SwtError::IndivisibleLength`] | an axis length is not a multiple of `2^levels` |
pub fn iswt2(
    coeffs: &[SwtLevel2d<f64>],
    wavelet: &WaveletSelector,
    axes: [isize; 2],
) -> Result<ArrayD<f64>, SwtError> {
    let first = coeffs.first().ok_or(SwtError::EmptyDecomposition)?;
    let axes = normalize_axes(Some(&axes), first.approximation().ndim())?;
    let wavelets = wavelet.for_axes(2)?;
    let levels: Vec<Vec<_>> = coeffs
        .iter()
        .map(|l| l.bands_in_key_order().iter().map(|b| b.view()).collect())
        .collect();
    reconstruct(&levels, &wavelets, &axes)
}
