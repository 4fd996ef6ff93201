//! One-axis stationary wavelet transform.

use ndarray::{ArrayD, ArrayViewD};

use crate::axes::normalize_axes;
use crate::config::SwtConfig;
use crate::error::SwtError;
use crate::iswtn::reconstruct;
use crate::selector::WaveletSelector;
use crate::subband::SwtLevel1d;
use crate::swtn::swtn;

/// Multilevel stationary decomposition along a single axis.
///
/// Every lane along `axis` is transformed independently; `axis` may be
/// negative. Returns `(cA, cD)` pairs coarsest first.
///
/// # Errors
///
/// Same as [`swtn`] with a one-element axis set.
///
/// # Example
///
/// ```ignore
/// use atrous_swt::{swt, SwtConfig, WaveletSelector};
/// use ndarray::array;
///
/// let x = array![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0].into_dyn();
/// let config = SwtConfig::new(WaveletSelector::from_name("db2")?).with_level(2);
/// let levels = swt(x.view(), &config, -1)?;
/// assert_eq!(levels.len(), 2);
/// ```
pub fn swt(
    data: ArrayViewD<'_, f64>,
    config: &SwtConfig,
    axis: isize,
) -> Result<Vec<SwtLevel1d<f64>>, SwtError> {
    swtn(data, config, Some(&[axis]))?
        .into_iter()
        .map(SwtLevel1d::try_from)
        .collect()
}

/// Inverse of [`swt`] along the last axis.
///
/// # Errors
///
/// See [`iswt_axis`].
pub fn iswt(coeffs: &[SwtLevel1d<f64>], wavelet: &WaveletSelector) -> Result<ArrayD<f64>, SwtError> {
    iswt_axis(coeffs, wavelet, -1)
}

/// Inverse of [`swt`] along an explicit axis.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SwtError::EmptyDecomposition`] | `coeffs` is empty |
/// | [`SwtError::AxisOutOfRange`] | `axis` is invalid for the coefficient arrays |
/// | [`SwtError::WaveletCount`] | a per-axis selector without exactly one wavelet |
/// | [`SwtError::ShapeMismatch`] | `cA` and `cD` differ in shape within or across levels |
/// | [`SwtError::IndivisibleLength`] | the length along `axis` is not a multiple of `2^levels` |
pub fn iswt_axis(
    coeffs: &[SwtLevel1d<f64>],
    wavelet: &WaveletSelector,
    axis: isize,
) -> Result<ArrayD<f64>, SwtError> {
    let first = coeffs.first().ok_or(SwtError::EmptyDecomposition)?;
    let axes = normalize_axes(Some(&[axis]), first.approximation().ndim())?;
    let wavelets = wavelet.for_axes(1)?;
    let levels: Vec<_> = coeffs
        .iter()
        .map(|l| vec![l.approximation().view(), l.detail().view()])
        .collect();
    reconstruct(&levels, &wavelets, &axes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{Array1, Array2};

    fn selector(name: &str) -> WaveletSelector {
        WaveletSelector::from_name(name).unwrap()
    }

    #[test]
    fn round_trip_along_first_axis() {
        let x = Array2::from_shape_fn((8, 3), |(i, j)| (i * i) as f64 - j as f64).into_dyn();
        let config = SwtConfig::new(selector("db2")).with_level(2);
        let levels = swt(x.view(), &config, 0).unwrap();
        assert_eq!(levels.len(), 2);
        assert_eq!(levels[0].detail().shape(), &[8, 3]);
        let y = iswt_axis(&levels, &selector("db2"), 0).unwrap();
        for (u, v) in x.iter().zip(y.iter()) {
            assert_abs_diff_eq!(u, v, epsilon = 1e-9);
        }
    }

    #[test]
    fn mismatched_cd_shape_is_rejected() {
        let a = Array1::<f64>::zeros(8).into_dyn();
        let d = Array1::<f64>::zeros(4).into_dyn();
        let err = iswt(&[SwtLevel1d::new(a, d)], &selector("haar")).unwrap_err();
        assert!(matches!(err, SwtError::ShapeMismatch { level: 0, .. }));
    }

    #[test]
    fn per_axis_selector_must_have_one_entry() {
        let x = Array1::from(vec![1.0, 2.0, 3.0, 4.0]).into_dyn();
        let config = SwtConfig::new(selector("haar")).with_level(1);
        let levels = swt(x.view(), &config, 0).unwrap();
        let two = WaveletSelector::from_names(&["haar", "db2"]).unwrap();
        assert_eq!(
            iswt(&levels, &two).unwrap_err(),
            SwtError::WaveletCount {
                expected: 1,
                got: 2
            }
        );
    }
}
